use std::io::Write;

use image::codecs::png::PngEncoder;

use crate::encoders::common::write_icc;
use crate::{error::MagickError, image::Image, wm_try};

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), MagickError> {
    let mut encoder = PngEncoder::new(writer);
    write_icc(&mut encoder, image);
    Ok(wm_try!(image.pixels.write_with_encoder(encoder)))
}
