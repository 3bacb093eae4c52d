//! [Multi-block local binary patterns], a texture descriptor which compares
//! the mean intensities of rectangular blocks rather than single pixels.
//!
//! [Multi-block local binary patterns]: https://en.wikipedia.org/wiki/Local_binary_patterns#Extensions

use image::{GenericImageView, Pixel};
use log::warn;

use super::{is_grayscale, TextureDescriptor};
use crate::integral_image::IntegralImage;

const NOT_GRAYSCALE_WARNING: &str = "multiblock local binary patterns expect a grayscale image; \
     reading the first channel of each pixel";

/// The multi-block local binary pattern descriptor.
///
/// A window of 3×3 rectangular blocks slides over every position at which it
/// fits entirely within the image. At each position the mean intensity of
/// the center block is compared against the mean intensity of each of the
/// eight surrounding blocks, producing an 8-bit code; the codes of all
/// window positions are tallied into a 256-bin histogram. Block means are
/// read from an [`IntegralImage`] in constant time, so the cost per window
/// does not depend on the block size.
///
/// The grid columns do not tile the window evenly: the middle column starts
/// on the last pixel column of the left block and is one pixel wider than
/// the two outer columns. Block means are truncated toward zero before
/// comparison.
///
/// # Examples
/// ```
/// use textureproc::texture_descriptors::{MultiblockLbp, TextureDescriptor};
/// use image::{GrayImage, Luma};
///
/// // A uniform 10x8 image admits two window positions for the default
/// // 3x2 block size. No block is strictly darker than any other, so both
/// // positions produce the all-zero pattern code.
/// let image = GrayImage::from_pixel(10, 8, Luma([7u8]));
/// let histogram = MultiblockLbp::default().histogram(&image);
///
/// assert_eq!(histogram[0], 2);
/// assert_eq!(histogram.iter().sum::<u32>(), 2);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MultiblockLbp {
    block_width: u32,
    block_height: u32,
}

impl Default for MultiblockLbp {
    fn default() -> MultiblockLbp {
        MultiblockLbp::new(3, 2)
    }
}

impl MultiblockLbp {
    /// Creates a descriptor whose comparison grid is made of blocks
    /// `block_width` pixels wide and `block_height` pixels tall.
    ///
    /// # Panics
    /// If `block_width` or `block_height` is zero.
    pub fn new(block_width: u32, block_height: u32) -> MultiblockLbp {
        assert!(
            block_width > 0 && block_height > 0,
            "block dimensions must be positive: {}x{}",
            block_width,
            block_height
        );
        MultiblockLbp {
            block_width,
            block_height,
        }
    }

    /// Computes the same histogram as [`TextureDescriptor::histogram`], with
    /// window rows partitioned across threads.
    ///
    /// Pattern codes are independent between window positions and histogram
    /// accumulation is commutative, so per-row histograms merge by
    /// element-wise addition without changing the result.
    #[cfg(feature = "rayon")]
    pub fn histogram_parallel<I>(&self, image: &I) -> [u32; 256]
    where
        I: GenericImageView + Sync,
        I::Pixel: Pixel<Subpixel = u8>,
    {
        use rayon::prelude::*;

        if !is_grayscale::<I::Pixel>() {
            warn!("{}", NOT_GRAYSCALE_WARNING);
        }

        let integral = IntegralImage::new(image);
        let width = image.width().saturating_sub(3 * self.block_width);
        let height = image.height().saturating_sub(3 * self.block_height);

        (0..height)
            .into_par_iter()
            .map(|y| {
                let mut hist = [0u32; 256];
                for x in 0..width {
                    let code = self.pattern_code(&integral, x, y);
                    hist[code as usize] += 1;
                }
                hist
            })
            .reduce(
                || [0u32; 256],
                |mut acc, hist| {
                    for (total, count) in acc.iter_mut().zip(hist.iter()) {
                        *total += *count;
                    }
                    acc
                },
            )
    }

    fn histogram_impl<I, F>(&self, image: &I, mut report: F) -> [u32; 256]
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8>,
        F: FnMut(&str),
    {
        if !is_grayscale::<I::Pixel>() {
            report(NOT_GRAYSCALE_WARNING);
        }

        let integral = IntegralImage::new(image);

        // One window anchor per pixel position whose block grid fits the
        // image; either range may be empty.
        let width = image.width().saturating_sub(3 * self.block_width);
        let height = image.height().saturating_sub(3 * self.block_height);

        let mut hist = [0u32; 256];
        for y in 0..height {
            for x in 0..width {
                let code = self.pattern_code(&integral, x, y);
                hist[code as usize] += 1;
            }
        }
        hist
    }

    /// Computes the pattern code of the window anchored at (x, y).
    fn pattern_code(&self, integral: &IntegralImage, x: u32, y: u32) -> u8 {
        let (bw, bh) = (self.block_width, self.block_height);

        // Column spans of the block grid. The middle column begins on the
        // last pixel column of the left block and is one pixel wider than
        // the outer columns.
        let lefts = [x, x + bw - 1, x + 2 * bw];
        let rights = [x + bw - 1, x + 2 * bw - 1, x + 3 * bw - 1];

        let mut means = [0u32; 9];
        for gy in 0..3usize {
            let top = y + gy as u32 * bh;
            let bottom = top + bh - 1;
            for gx in 0..3usize {
                means[3 * gy + gx] = integral.mean(lefts[gx], top, rights[gx], bottom) as u32;
            }
        }

        // Neighbours of the center block, clockwise from the top left. The
        // nth most significant bit of the code is set when the center block
        // is strictly darker than the nth neighbour.
        let center = means[4];
        let neighbors = [
            means[0], means[1], means[2], means[5], means[8], means[7], means[6], means[3],
        ];

        let mut code = 0u8;
        for i in 0..8 {
            code |= ((center < neighbors[i]) as u8) << (7 - i);
        }
        code
    }
}

impl TextureDescriptor for MultiblockLbp {
    fn histogram<I>(&self, image: &I) -> [u32; 256]
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8>,
    {
        self.histogram_impl(image, |message| warn!("{}", message))
    }
}
