use image::{ColorType, DynamicImage, ImageFormat};

#[derive(Debug, Clone)]
pub struct Image {
    /// Format the image was decoded from, if it is one `image` recognizes
    pub format: Option<ImageFormat>,
    pub icc: Option<Vec<u8>>,
    pub pixels: DynamicImage,
}

/// Storage precision of a single channel in the written greyscale image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelFormat {
    U8,
    U16,
}

impl ChannelFormat {
    /// 8-bit sources stay 8-bit, anything deeper is kept at 16 bits
    pub fn of_source(color: ColorType) -> Self {
        match color {
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => Self::U8,
            _ => Self::U16,
        }
    }
}
