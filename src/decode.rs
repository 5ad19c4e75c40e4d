use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader};

use crate::{error::MagickError, image::Image, wm_err, wm_try};

/// If the format has not been explicitly specified, guesses the format based on file contents.
pub fn decode(file: &Path, format: Option<ImageFormat>) -> Result<Image, MagickError> {
    let mut reader = ImageReader::open(file)
        .map_err(|error| wm_err!("unable to open image '{}': {error}", file.display()))?;
    match format {
        Some(format) => reader.set_format(format),
        None => reader = wm_try!(reader.with_guessed_format()),
    }
    let format = reader.format();

    let mut decoder = wm_try!(reader.into_decoder());
    // a broken ICC chunk is not worth failing the whole conversion over
    let icc = decoder.icc_profile().unwrap_or(None);
    let pixels = wm_try!(DynamicImage::from_decoder(decoder));
    log::debug!(
        "decoded {} as {:?}: {}x{} {:?}",
        file.display(),
        format,
        pixels.width(),
        pixels.height(),
        pixels.color()
    );

    Ok(Image {
        format,
        icc,
        pixels,
    })
}
