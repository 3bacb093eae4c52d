//! Utils for testing and debugging.

/// Helper for defining grayscale images.
///
/// Pixels are `Luma<u8>`, listed in row-major order.
///
/// # Examples
/// ```
/// use textureproc::gray_image;
/// use image::{GrayImage, Luma};
///
/// // An empty image with pixel type Luma<u8>
/// let empty = gray_image!();
///
/// let image = gray_image!(
///     1, 2, 3;
///     4, 5, 6);
///
/// let mut expected = GrayImage::new(3, 2);
/// expected.put_pixel(0, 0, Luma([1]));
/// expected.put_pixel(1, 0, Luma([2]));
/// expected.put_pixel(2, 0, Luma([3]));
/// expected.put_pixel(0, 1, Luma([4]));
/// expected.put_pixel(1, 1, Luma([5]));
/// expected.put_pixel(2, 1, Luma([6]));
///
/// assert_eq!(image, expected);
/// ```
#[macro_export]
macro_rules! gray_image {
    // Empty image
    () => {
        ::image::ImageBuffer::<::image::Luma<u8>, Vec<u8>>::new(0, 0)
    };
    // Non-empty image
    ($( $( $x: expr ),*);*) => {
        {
            let nested_array = [ $( [ $($x),* ] ),* ];
            let height = nested_array.len() as u32;
            let width = nested_array[0].len() as u32;

            let flat_array: Vec<_> = nested_array.iter().flatten().cloned().collect();
            ::image::ImageBuffer::<::image::Luma<u8>, Vec<u8>>::from_raw(width, height, flat_array)
                .unwrap()
        }
    };
}

/// Helper for defining RGB images.
///
/// Pixels are `Rgb<u8>`, listed in row-major order with each pixel written
/// as `[red, green, blue]`.
///
/// # Examples
/// ```
/// use textureproc::rgb_image;
/// use image::{Rgb, RgbImage};
///
/// let image = rgb_image!(
///     [1, 2, 3], [ 4,  5,  6];
///     [7, 8, 9], [10, 11, 12]);
///
/// let mut expected = RgbImage::new(2, 2);
/// expected.put_pixel(0, 0, Rgb([1, 2, 3]));
/// expected.put_pixel(1, 0, Rgb([4, 5, 6]));
/// expected.put_pixel(0, 1, Rgb([7, 8, 9]));
/// expected.put_pixel(1, 1, Rgb([10, 11, 12]));
///
/// assert_eq!(image, expected);
/// ```
#[macro_export]
macro_rules! rgb_image {
    // Empty image
    () => {
        ::image::ImageBuffer::<::image::Rgb<u8>, Vec<u8>>::new(0, 0)
    };
    // Non-empty image
    ($( $( [$r: expr, $g: expr, $b: expr]),*);*) => {
        {
            let nested_array = [ $( [ $( [$r, $g, $b] ),* ] ),* ];
            let height = nested_array.len() as u32;
            let width = nested_array[0].len() as u32;

            let flat_array: Vec<_> = nested_array
                .iter()
                .flatten()
                .flatten()
                .cloned()
                .collect();
            ::image::ImageBuffer::<::image::Rgb<u8>, Vec<u8>>::from_raw(width, height, flat_array)
                .unwrap()
        }
    };
}

/// Gray image to use in benchmarks. This is neither noise nor
/// similar to natural images - it's just a convenience method
/// to produce an image that's not constant.
pub fn gray_bench_image(width: u32, height: u32) -> image::GrayImage {
    let mut image = image::GrayImage::new(width, height);
    for y in 0..image.height() {
        for x in 0..image.width() {
            let intensity = (x % 7 + y % 6) as u8;
            image.put_pixel(x, y, image::Luma([intensity]));
        }
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_image_dimensions() {
        let image = gray_image!(
            1, 2, 3;
            4, 5, 6);
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1)[0], 6);
    }

    #[test]
    fn test_gray_image_empty() {
        let image = gray_image!();
        assert_eq!(image.dimensions(), (0, 0));
    }

    #[test]
    fn test_gray_bench_image_dimensions() {
        let image = gray_bench_image(300, 200);
        assert_eq!(image.dimensions(), (300, 200));
    }
}
