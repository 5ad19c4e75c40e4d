//! Color to greyscale conversion.
//!
//! All formulas operate on channel values normalized to `[0, 1]` and return
//! unclamped results. Clamping happens only when the result is quantized for storage.

use image::{DynamicImage, ImageBuffer, Luma, Rgb32FImage};

use crate::{
    arg_parsers::Approach,
    error::MagickError,
    image::{ChannelFormat, Image},
};

/// Single-channel luminance image, same dimensions as the color source
pub type GreyBuffer = ImageBuffer<Luma<f32>, Vec<f32>>;

/// ITU-R BT.709
const REC709_WEIGHTS: [f32; 3] = [0.2126, 0.7152, 0.0722];
/// ITU-R BT.601, as used by NTSC
const REC601_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

// sRGB transfer function constants
const DECOMPRESS_THRESHOLD: f32 = 0.04045;
const COMPRESS_THRESHOLD: f32 = 0.0031308;
const LINEAR_SLOPE: f32 = 12.92;
const OFFSET: f32 = 0.055;
const GAMMA: f32 = 2.4;

#[inline]
fn weighted_sum(rgb: [f32; 3], weights: [f32; 3]) -> f32 {
    weights[0] * rgb[0] + weights[1] * rgb[1] + weights[2] * rgb[2]
}

/// `Y = 0.2126 R + 0.7152 G + 0.0722 B`
#[inline]
pub fn linear(rgb: [f32; 3]) -> f32 {
    weighted_sum(rgb, REC709_WEIGHTS)
}

/// `Y = 0.299 R + 0.587 G + 0.114 B`
#[inline]
pub fn linear_approx(rgb: [f32; 3]) -> f32 {
    weighted_sum(rgb, REC601_WEIGHTS)
}

/// sRGB-encoded value to linear light
#[inline]
pub fn gamma_decompress(value: f32) -> f32 {
    if value <= DECOMPRESS_THRESHOLD {
        value / LINEAR_SLOPE
    } else {
        ((value + OFFSET) / (1.0 + OFFSET)).powf(GAMMA)
    }
}

/// Linear light to sRGB-encoded value
#[inline]
pub fn gamma_compress(linear: f32) -> f32 {
    if linear <= COMPRESS_THRESHOLD {
        LINEAR_SLOPE * linear
    } else {
        (1.0 + OFFSET) * linear.powf(1.0 / GAMMA) - OFFSET
    }
}

/// Weighted sum of sRGB-encoded values is not the luminance the eye perceives,
/// so the channels are combined in linear light and the result is encoded back.
#[inline]
pub fn gamma_decomp(rgb: [f32; 3]) -> f32 {
    gamma_compress(linear(rgb.map(gamma_decompress)))
}

fn formula(approach: Approach) -> fn([f32; 3]) -> f32 {
    match approach {
        Approach::Linear => linear,
        Approach::LinearApprox => linear_approx,
        Approach::GammaDecomp => gamma_decomp,
    }
}

/// Produces a new buffer; the source is left untouched.
pub fn to_grey(rgb: &Rgb32FImage, approach: Approach) -> GreyBuffer {
    let formula = formula(approach);
    ImageBuffer::from_fn(rgb.width(), rgb.height(), |x, y| {
        Luma([formula(rgb.get_pixel(x, y).0)])
    })
}

/// Out-of-range values saturate instead of wrapping around.
#[inline]
pub fn quantize_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * u8::MAX as f32).round() as u8
}

#[inline]
pub fn quantize_u16(value: f32) -> u16 {
    (value.clamp(0.0, 1.0) * u16::MAX as f32).round() as u16
}

fn quantize(grey: &GreyBuffer, depth: ChannelFormat) -> DynamicImage {
    let (width, height) = grey.dimensions();
    match depth {
        ChannelFormat::U8 => DynamicImage::ImageLuma8(ImageBuffer::from_fn(width, height, |x, y| {
            Luma([quantize_u8(grey.get_pixel(x, y).0[0])])
        })),
        ChannelFormat::U16 => {
            DynamicImage::ImageLuma16(ImageBuffer::from_fn(width, height, |x, y| {
                Luma([quantize_u16(grey.get_pixel(x, y).0[0])])
            }))
        }
    }
}

pub fn greyscale(image: &mut Image, approach: Approach) -> Result<(), MagickError> {
    let depth = ChannelFormat::of_source(image.pixels.color());
    // alpha is dropped, greyscale sources are expanded to three equal channels
    let rgb = image.pixels.to_rgb32f();
    let grey = to_grey(&rgb, approach);
    image.pixels = quantize(&grey, depth);
    log::debug!("applied {approach} greyscale, stored as {depth:?}");
    Ok(())
}
