//! The classic pixel-wise [local binary pattern] descriptor.
//!
//! [local binary pattern]: https://en.wikipedia.org/wiki/Local_binary_patterns

use image::{GenericImageView, Pixel};
use log::warn;

use super::{is_grayscale, TextureDescriptor};

const NOT_GRAYSCALE_WARNING: &str = "local binary patterns expect a grayscale image; \
     reading the first channel of each pixel";

/// Computes the local binary pattern of the pixel at (x, y), or `None`
/// if the pixel is too close to the image boundary for all eight of its
/// neighbours to exist.
///
/// The neighbours of a pixel are enumerated clockwise starting at the top
/// left, most significant bit first; a bit is set when the pixel is strictly
/// darker than the corresponding neighbour.
///
/// # Examples
/// ```
/// use textureproc::gray_image;
/// use textureproc::texture_descriptors::lbp::local_binary_pattern;
///
/// let image = gray_image!(
///     5, 6, 1;
///     8, 4, 9;
///     3, 2, 7);
///
/// let expected = 0b11011001;
/// assert_eq!(local_binary_pattern(&image, 1, 1), Some(expected));
/// ```
pub fn local_binary_pattern<I>(image: &I, x: u32, y: u32) -> Option<u8>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    if x == 0 || y == 0 || x + 1 >= width || y + 1 >= height {
        return None;
    }

    let intensity = |px, py| image.get_pixel(px, py).channels()[0];

    let center = intensity(x, y);
    let neighbors = [
        intensity(x - 1, y - 1),
        intensity(x, y - 1),
        intensity(x + 1, y - 1),
        intensity(x + 1, y),
        intensity(x + 1, y + 1),
        intensity(x, y + 1),
        intensity(x - 1, y + 1),
        intensity(x - 1, y),
    ];

    let mut code = 0u8;
    for i in 0..8 {
        code |= ((center < neighbors[i]) as u8) << (7 - i);
    }

    Some(code)
}

/// Texture descriptor which tallies the [`local_binary_pattern`] code of
/// every interior pixel into a 256-bin histogram.
///
/// This is the single-pixel ancestor of [`MultiblockLbp`]: the comparison
/// neighbourhood is the eight pixels touching the center pixel, so the
/// descriptor is sensitive to texture at the finest scale only.
///
/// [`MultiblockLbp`]: super::MultiblockLbp
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LocalBinaryPattern;

impl LocalBinaryPattern {
    fn histogram_impl<I, F>(&self, image: &I, mut report: F) -> [u32; 256]
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8>,
        F: FnMut(&str),
    {
        if !is_grayscale::<I::Pixel>() {
            report(NOT_GRAYSCALE_WARNING);
        }

        let (width, height) = image.dimensions();

        let mut hist = [0u32; 256];
        for y in 1..height.saturating_sub(1) {
            for x in 1..width.saturating_sub(1) {
                if let Some(code) = local_binary_pattern(image, x, y) {
                    hist[code as usize] += 1;
                }
            }
        }
        hist
    }
}

impl TextureDescriptor for LocalBinaryPattern {
    fn histogram<I>(&self, image: &I) -> [u32; 256]
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8>,
    {
        self.histogram_impl(image, |message| warn!("{}", message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::gray_bench_image;
    use image::{GrayImage, Luma};

    #[test]
    fn test_local_binary_pattern() {
        let image = gray_image!(
            06, 11, 14;
            09, 10, 10;
            19, 00, 22);

        // center 10; darker than 11, 14, 22 and 19, read clockwise from the
        // top left as bits 6, 5, 3 and 1.
        let expected = 0b01101010;
        assert_eq!(local_binary_pattern(&image, 1, 1), Some(expected));
    }

    #[test]
    fn test_local_binary_pattern_boundary() {
        let image = gray_bench_image(4, 4);

        assert_eq!(local_binary_pattern(&image, 0, 1), None);
        assert_eq!(local_binary_pattern(&image, 1, 0), None);
        assert_eq!(local_binary_pattern(&image, 3, 1), None);
        assert_eq!(local_binary_pattern(&image, 1, 3), None);
        assert!(local_binary_pattern(&image, 1, 1).is_some());
    }

    #[test]
    fn test_histogram_counts_interior_pixels() {
        let image = gray_bench_image(12, 9);
        let hist = LocalBinaryPattern.histogram(&image);

        let sum: u64 = hist.iter().map(|&count| u64::from(count)).sum();
        assert_eq!(sum, 10 * 7);
    }

    #[test]
    fn test_uniform_image_has_all_mass_in_bin_zero() {
        let image = GrayImage::from_pixel(8, 8, Luma([31u8]));
        let hist = LocalBinaryPattern.histogram(&image);

        assert_eq!(hist[0], 36);
    }

    #[test]
    fn test_degenerate_image_gives_empty_histogram() {
        assert_eq!(LocalBinaryPattern.histogram(&gray_image!()), [0u32; 256]);
        assert_eq!(
            LocalBinaryPattern.histogram(&gray_bench_image(2, 5)),
            [0u32; 256]
        );
    }
}
