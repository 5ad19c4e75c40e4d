//! Helpers shared between all encoders

use std::borrow::Cow;

use image::{DynamicImage, ImageEncoder, ImageFormat};

use crate::image::Image;

/// Offset of the data colour space signature in an ICC profile header
const ICC_COLOR_SPACE: std::ops::Range<usize> = 16..20;

/// Only a `GRAY` profile can describe the single-channel output.
/// RGB profiles are not permitted on greyscale PNG and JPEG files.
pub fn is_grey_profile(icc: &[u8]) -> bool {
    icc.get(ICC_COLOR_SPACE) == Some(b"GRAY".as_slice())
}

pub fn write_icc(encoder: &mut impl ImageEncoder, image: &Image) {
    match &image.icc {
        Some(icc) if is_grey_profile(icc) => {
            let _ = encoder.set_icc_profile(icc.clone()); // ignore UnsupportedError
        }
        Some(_) => log::debug!("dropping non-grey ICC profile"),
        None => {}
    }
}

/// Converts the greyscale pixels into something the encoder for `format` accepts.
/// Formats that cannot store a single channel get three identical ones.
pub fn fit_pixels_to_format(pixels: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    let is_16_bit = matches!(
        pixels,
        DynamicImage::ImageLuma16(_) | DynamicImage::ImageLumaA16(_)
    );
    match format {
        ImageFormat::Png | ImageFormat::Tiff | ImageFormat::Pnm => Cow::Borrowed(pixels),
        ImageFormat::Jpeg | ImageFormat::Bmp | ImageFormat::Tga => {
            if is_16_bit {
                Cow::Owned(DynamicImage::ImageLuma8(pixels.to_luma8()))
            } else {
                Cow::Borrowed(pixels)
            }
        }
        ImageFormat::OpenExr | ImageFormat::Hdr => {
            Cow::Owned(DynamicImage::ImageRgb32F(pixels.to_rgb32f()))
        }
        ImageFormat::Farbfeld => Cow::Owned(DynamicImage::ImageRgba16(pixels.to_rgba16())),
        _ => Cow::Owned(DynamicImage::ImageRgb8(pixels.to_rgb8())),
    }
}
