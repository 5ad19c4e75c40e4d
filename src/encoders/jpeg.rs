use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::ImageFormat;

use crate::encoders::common::{fit_pixels_to_format, write_icc};
use crate::{error::MagickError, image::Image, wm_try};

/// imagemagick's default when the input quality cannot be estimated
const DEFAULT_QUALITY: u8 = 92;

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), MagickError> {
    let mut encoder = JpegEncoder::new_with_quality(writer, DEFAULT_QUALITY);
    write_icc(&mut encoder, image);
    let pixels = fit_pixels_to_format(&image.pixels, ImageFormat::Jpeg);
    Ok(wm_try!(pixels.write_with_encoder(encoder)))
}
