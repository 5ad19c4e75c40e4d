use std::{ffi::OsStr, io::BufWriter, path::Path};

use image::ImageFormat;
use tempfile::{Builder, NamedTempFile};

use crate::{
    encoders::common::fit_pixels_to_format, error::MagickError, image::Image, wm_err, wm_try,
};

/// Writes the image to `path`, replacing any existing file.
///
/// The data is first written to a temporary file next to the target and renamed over it
/// once fully flushed, so a failed encode never leaves a truncated image behind.
pub fn encode(
    image: &Image,
    path: &Path,
    explicit_format: Option<ImageFormat>,
) -> Result<(), MagickError> {
    let format = choose_encoding_format(image, path, explicit_format)?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file = create_temporary(directory)
        .map_err(|error| wm_err!("unable to open image '{}': {error}", path.display()))?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);

    match format {
        #[cfg(feature = "png")]
        ImageFormat::Png => crate::encoders::png::encode(image, &mut writer)?,
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => crate::encoders::jpeg::encode(image, &mut writer)?,
        #[cfg(feature = "tiff")]
        ImageFormat::Tiff => crate::encoders::tiff::encode(image, &mut writer)?,
        #[cfg(feature = "webp")]
        ImageFormat::WebP => crate::encoders::webp::encode(image, &mut writer)?,
        _ => {
            let pixels = fit_pixels_to_format(&image.pixels, format);
            wm_try!(pixels.write_to(&mut writer, format))
        }
    }

    // The buffers would be flushed on drop too, but that would swallow errors.
    let file = writer
        .into_inner()
        .map_err(|error| wm_err!("unable to write image '{}': {error}", path.display()))?;
    file.persist(path)
        .map_err(|error| wm_err!("unable to write image '{}': {error}", path.display()))?;
    log::debug!("wrote {} as {:?}", path.display(), format);

    Ok(())
}

/// The file keeps its mode when renamed into place, so it is created with the usual
/// umask-filtered mode instead of tempfile's owner-only default.
fn create_temporary(directory: &Path) -> std::io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(directory)
}

fn choose_encoding_format(
    image: &Image,
    path: &Path,
    explicitly_specified: Option<ImageFormat>,
) -> Result<ImageFormat, MagickError> {
    if let Some(format) = explicitly_specified {
        return Ok(format);
    }
    // if format was not explicitly specified, guess based on the output path
    if let Ok(format) = ImageFormat::from_path(path) {
        return Ok(format);
    }
    // if that fails, use the input format (like ImageMagick)
    if let Some(format) = image.format {
        return Ok(format);
    }
    // otherwise error; fallback to empty string matches imagemagick
    let extension = path.extension().unwrap_or(OsStr::new(""));
    Err(wm_err!(
        "no encode delegate for this image format `{}'",
        extension.to_ascii_uppercase().to_string_lossy()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;

    fn grey_image(format: Option<ImageFormat>) -> Image {
        Image {
            format,
            icc: None,
            pixels: DynamicImage::new_luma8(2, 2),
        }
    }

    #[test]
    fn test_format_from_extension() {
        let image = grey_image(Some(ImageFormat::Png));
        assert_eq!(
            choose_encoding_format(&image, Path::new("out.jpg"), None).unwrap(),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_format_falls_back_to_input() {
        let image = grey_image(Some(ImageFormat::Png));
        assert_eq!(
            choose_encoding_format(&image, Path::new("no_extension_linear"), None).unwrap(),
            ImageFormat::Png
        );
    }

    #[test]
    fn test_unknown_format_is_an_error() {
        let image = grey_image(None);
        let err = choose_encoding_format(&image, Path::new("out.xyz"), None).unwrap_err();
        assert!(err.0.contains("no encode delegate for this image format `XYZ'"));
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_encode_replaces_target() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("out.png");
        std::fs::write(&path, b"stale").unwrap();

        encode(&grey_image(None), &path, None).unwrap();

        let written = image::open(&path).unwrap();
        assert_eq!(written.color(), image::ColorType::L8);
        assert_eq!(std::fs::read_dir(directory.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_unknown_format_creates_nothing() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("out.xyz");
        assert!(encode(&grey_image(None), &path, None).is_err());
        assert_eq!(std::fs::read_dir(directory.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_failed_encode_leaves_target_untouched() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("out.dds");
        std::fs::write(&path, b"stale").unwrap();

        // `image` can decode DDS but has no encoder for it,
        // so this fails after the temporary file has been created
        assert!(encode(&grey_image(None), &path, Some(ImageFormat::Dds)).is_err());

        let entries: Vec<_> = std::fs::read_dir(directory.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(entries, vec![path.clone()]);
        assert_eq!(std::fs::read(&path).unwrap(), b"stale");
    }

    #[cfg(all(unix, feature = "png"))]
    #[test]
    fn test_output_mode_matches_a_freshly_created_file() {
        use std::os::unix::fs::PermissionsExt;

        let directory = tempfile::tempdir().unwrap();
        let reference = directory.path().join("reference");
        std::fs::File::create(&reference).unwrap();
        let path = directory.path().join("out.png");

        encode(&grey_image(None), &path, None).unwrap();

        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&reference));
    }
}
