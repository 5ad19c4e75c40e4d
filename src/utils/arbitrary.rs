//! Helper functions for using `quickcheck`'s `Arbitrary` trait

use quickcheck::Arbitrary;

/// Evenly spread over `[0, 1]`, both ends included
#[must_use]
pub fn unit_float(gen: &mut quickcheck::Gen) -> f32 {
    let raw = u32::arbitrary(gen);
    (raw as f64 / u32::MAX as f64) as f32
}
