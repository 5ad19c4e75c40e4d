use std::io::Write;

use image::ImageFormat;
use webp::{Encoder, WebPMemory};

use crate::encoders::common::fit_pixels_to_format;
use crate::{error::MagickError, image::Image, wm_err, wm_try};

/// Not documented by imagemagick, was determined experimentally
const DEFAULT_QUALITY: f32 = 75.0;

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), MagickError> {
    // libwebp only takes RGB(A) input
    let pixels = fit_pixels_to_format(&image.pixels, ImageFormat::WebP);
    let encoder: Encoder =
        Encoder::from_image(&pixels).map_err(|e| wm_err!("WebP encoding failed: {e}"))?;

    let webp: WebPMemory = encoder
        .encode_simple(false, DEFAULT_QUALITY)
        .map_err(|e| wm_err!("WebP encoding failed: {e:?}"))?;
    // TODO: `webp` crate doesn't support setting the ICC profile:
    // https://github.com/jaredforth/webp/issues/41
    Ok(wm_try!(writer.write_all(&webp)))
}
