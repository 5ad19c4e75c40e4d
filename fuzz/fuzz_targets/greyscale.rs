#![no_main]

use std::num::NonZeroU8;

use arbitrary::Unstructured;
use greymagick::{
    arg_parsers::Approach,
    image::Image,
    operations::greyscale::{gamma_compress, gamma_decompress, greyscale},
};
use image::{DynamicImage, ImageBuffer, RgbImage};
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct StructuredImage {
    width: NonZeroU8,
    height: NonZeroU8,
    rgb_data: Vec<u8>,
}

impl StructuredImage {
    fn to_rgb_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width.get() as u32, self.height.get() as u32, |x, y| {
            let idx = (y * self.width.get() as u32 + x) as usize * 3;
            image::Rgb([
                self.rgb_data[idx],
                self.rgb_data[idx + 1],
                self.rgb_data[idx + 2],
            ])
        })
    }
}

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width: NonZeroU8 = unstructured.arbitrary()?;
        let height: NonZeroU8 = unstructured.arbitrary()?;
        let rgb_data_len = width.get() as usize * height.get() as usize * 3;
        let rgb_data = unstructured.bytes(rgb_data_len)?;

        Ok(Self {
            width,
            height,
            rgb_data: rgb_data.to_vec(),
        })
    }
}

fuzz_target!(|input: (StructuredImage, u8)| {
    let (structured, selector) = input;
    let approach = match selector % 3 {
        0 => Approach::Linear,
        1 => Approach::LinearApprox,
        _ => Approach::GammaDecomp,
    };
    let rgb = structured.to_rgb_image();
    let mut image = Image {
        format: None,
        icc: None,
        pixels: DynamicImage::ImageRgb8(rgb.clone()),
    };

    greyscale(&mut image, approach).expect("greyscale conversion cannot fail");

    // Contract.
    let grey = image.pixels.as_luma8().expect("8-bit input must give 8-bit output");
    assert_eq!(grey.dimensions(), rgb.dimensions());

    // Test assertion: grey input pixels come out unchanged.
    for (color, luma) in rgb.pixels().zip(grey.pixels()) {
        let [r, g, b] = color.0;
        if r == g && g == b {
            assert_eq!(luma.0[0], r, "{approach} changed a grey pixel");
        }
        let v = r as f32 / 255.0;
        assert!((gamma_decompress(gamma_compress(v)) - v).abs() < 1e-4);
    }
});
