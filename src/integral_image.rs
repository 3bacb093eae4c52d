//! [Integral images](https://en.wikipedia.org/wiki/Summed_area_table) and
//! constant time rectangle queries over them.

use image::{GenericImageView, Pixel};

/// A summed area table over the first channel of an image.
///
/// The table has width and height one greater than its source image, and
/// holds at (x, y) the sum of the intensities of all input pixels strictly
/// above and strictly to the left of (x, y). In particular the left column
/// and top row are all 0, and the bottom right entry is the sum of all
/// pixels in the source image.
///
/// Building the table costs one pass over the image; afterwards the sum or
/// mean of the intensities within any axis-aligned rectangle can be read in
/// constant time, whatever the rectangle's size. For a rectangle spanning
/// columns \[l, r\] and rows \[t, b\], both inclusive, the sum is
/// `at(r + 1, b + 1) − at(r + 1, t) − at(l, b + 1) + at(l, t)`.
///
/// # Examples
/// ```
/// use textureproc::gray_image;
/// use textureproc::integral_image::IntegralImage;
///
/// let image = gray_image!(
///     1, 2, 3;
///     4, 5, 6);
///
/// let integral = IntegralImage::new(&image);
///
/// // Sum of the right two columns
/// assert_eq!(integral.sum(1, 0, 2, 1), 2 + 3 + 5 + 6);
/// // Sum of the top row
/// assert_eq!(integral.sum(0, 0, 2, 0), 1 + 2 + 3);
/// // Mean of the top row
/// assert_eq!(integral.mean(0, 0, 2, 0), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct IntegralImage {
    sums: Vec<u64>,
    width: u32,
}

impl IntegralImage {
    /// Runs the summation pass over `image`.
    ///
    /// The intensity of a pixel is the value of its first channel, which for
    /// single-channel images is its gray level.
    pub fn new<I>(image: &I) -> IntegralImage
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8>,
    {
        let (in_width, in_height) = image.dimensions();
        let out_width = in_width + 1;
        let out_height = in_height + 1;

        let mut sums = vec![0u64; out_width as usize * out_height as usize];

        for y in 1..out_height {
            let mut row_sum = 0u64;
            for x in 1..out_width {
                let pixel = unsafe { image.unsafe_get_pixel(x - 1, y - 1) };
                row_sum += u64::from(pixel.channels()[0]);

                let above = sums[(y - 1) as usize * out_width as usize + x as usize];
                sums[y as usize * out_width as usize + x as usize] = above + row_sum;
            }
        }

        IntegralImage {
            sums,
            width: out_width,
        }
    }

    fn at(&self, x: u32, y: u32) -> u64 {
        self.sums[y as usize * self.width as usize + x as usize]
    }

    /// Sums the intensities of the pixels with positions
    /// \[`left`, `right`\] * \[`top`, `bottom`\], all bounds inclusive.
    ///
    /// # Panics
    /// If the rectangle extends beyond the source image.
    pub fn sum(&self, left: u32, top: u32, right: u32, bottom: u32) -> u64 {
        self.at(right + 1, bottom + 1) + self.at(left, top)
            - self.at(right + 1, top)
            - self.at(left, bottom + 1)
    }

    /// Mean intensity of the pixels with positions
    /// \[`left`, `right`\] * \[`top`, `bottom`\], all bounds inclusive.
    ///
    /// The mean is returned untruncated; callers requiring an integer mean
    /// choose their own rounding.
    ///
    /// # Panics
    /// If the rectangle extends beyond the source image.
    pub fn mean(&self, left: u32, top: u32, right: u32, bottom: u32) -> f64 {
        let count = u64::from(right - left + 1) * u64::from(bottom - top + 1);
        self.sum(left, top, right, bottom) as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::Image;
    use crate::property_testing::GrayTestImage;
    use assert_approx_eq::assert_approx_eq;
    use image::{GenericImage, Luma};
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn test_sum() {
        let image = gray_image!(
            1, 2;
            3, 4);

        let integral = IntegralImage::new(&image);

        // Top left
        assert_eq!(integral.sum(0, 0, 0, 0), 1);
        // Top row
        assert_eq!(integral.sum(0, 0, 1, 0), 3);
        // Left column
        assert_eq!(integral.sum(0, 0, 0, 1), 4);
        // Whole image
        assert_eq!(integral.sum(0, 0, 1, 1), 10);
        // Right column
        assert_eq!(integral.sum(1, 0, 1, 1), 6);
        // Bottom row
        assert_eq!(integral.sum(0, 1, 1, 1), 7);
        // Bottom right
        assert_eq!(integral.sum(1, 1, 1, 1), 4);
    }

    #[test]
    fn test_mean() {
        let image = gray_image!(
            1, 2;
            3, 5);

        let integral = IntegralImage::new(&image);

        assert_approx_eq!(integral.mean(0, 0, 1, 1), 11.0 / 4.0);
        assert_approx_eq!(integral.mean(1, 0, 1, 1), 7.0 / 2.0);
        assert_approx_eq!(integral.mean(0, 1, 1, 1), 4.0);
        assert_approx_eq!(integral.mean(1, 1, 1, 1), 5.0);
    }

    #[test]
    fn test_reads_first_channel() {
        let image = rgb_image!(
            [1, 10, 100], [2, 20, 200];
            [3, 30, 101], [4, 40, 201]);

        let integral = IntegralImage::new(&image);

        assert_eq!(integral.sum(0, 0, 1, 1), 10);
        assert_eq!(integral.sum(1, 0, 1, 0), 2);
    }

    /// Simple implementation of summed area tables to validate the faster
    /// version against.
    fn integral_image_ref<I>(image: &I) -> Image<Luma<u64>>
    where
        I: GenericImage<Pixel = Luma<u8>>,
    {
        let (in_width, in_height) = image.dimensions();
        let (out_width, out_height) = (in_width + 1, in_height + 1);
        let mut out = Image::<Luma<u64>>::new(out_width, out_height);

        for y in 1..out_height {
            for x in 0..out_width {
                let mut sum = 0u64;

                for iy in 0..y {
                    for ix in 0..x {
                        sum += u64::from(image.get_pixel(ix, iy)[0]);
                    }
                }

                out.put_pixel(x, y, Luma([sum]));
            }
        }

        out
    }

    #[test]
    fn test_matches_reference_implementation() {
        fn prop(image: GrayTestImage) -> TestResult {
            let integral = IntegralImage::new(&image.0);
            let reference = integral_image_ref(&image.0);

            let (width, height) = image.0.dimensions();
            for y in 0..height + 1 {
                for x in 0..width + 1 {
                    if integral.at(x, y) != reference.get_pixel(x, y)[0] {
                        return TestResult::error(format!(
                            "mismatch at ({}, {}): {} vs {}",
                            x,
                            y,
                            integral.at(x, y),
                            reference.get_pixel(x, y)[0]
                        ));
                    }
                }
            }
            TestResult::passed()
        }
        quickcheck(prop as fn(GrayTestImage) -> TestResult);
    }
}
