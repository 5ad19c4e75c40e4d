//! Format-specific encoders. Formats without a dedicated encoder
//! go through `DynamicImage::write_to`.

pub mod common;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png")]
pub mod png;
#[cfg(feature = "tiff")]
pub mod tiff;
#[cfg(feature = "webp")]
pub mod webp;
