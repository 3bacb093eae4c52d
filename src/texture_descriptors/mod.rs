//! Texture descriptors which summarise an image as a histogram of local
//! pattern codes.
//!
//! Each descriptor compares a pixel or block of pixels against its
//! neighbourhood, encodes the comparison outcomes as an 8-bit code and
//! tallies the codes of every valid position into a 256-bin histogram. The
//! histograms of two images can then be compared to judge how similar their
//! textures are.

use image::{GenericImageView, Pixel};

pub mod lbp;
pub mod multiblock_lbp;

pub use self::lbp::LocalBinaryPattern;
pub use self::multiblock_lbp::MultiblockLbp;

/// A texture descriptor: a stateless strategy for summarising an image as a
/// histogram of 8-bit pattern codes.
///
/// Implementors hold only their configuration, fixed at construction time,
/// so a single instance may be shared freely across threads and calls.
///
/// Descriptors expect grayscale input. A multi-channel image is reported
/// via [`log::warn!`] and then processed anyway, reading the first channel
/// of each pixel as its intensity.
pub trait TextureDescriptor {
    /// Computes the histogram of pattern codes for `image`.
    ///
    /// Bin `i` holds the number of positions whose pattern code is `i`.
    /// Images too small to contain a single valid position yield a
    /// histogram of all zeros.
    fn histogram<I>(&self, image: &I) -> [u32; 256]
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8>;
}

/// True if pixels of type `P` carry a single channel.
pub(crate) fn is_grayscale<P: Pixel>() -> bool {
    P::CHANNEL_COUNT == 1
}
