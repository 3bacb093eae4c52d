//! A texture description library based on the
//! [image] crate.
//!
//! Texture descriptors summarise the spatial distribution of intensity in a
//! grayscale image as a histogram of local pattern codes. The descriptors in
//! this crate all expose the same capability through the
//! [`TextureDescriptor`](texture_descriptors::TextureDescriptor) trait.
//!
//! [image]: https://github.com/image-rs/image
#![deny(missing_docs)]
#![allow(clippy::many_single_char_names, clippy::needless_range_loop)]

#[macro_use]
pub mod utils;
pub mod definitions;
pub mod integral_image;
#[cfg(any(feature = "property-testing", test))]
pub mod property_testing;
pub mod texture_descriptors;
