//! Color processing for 7-color ACeP (Advanced Color ePaper) panels:
//! tonal adjustments, blue-cast reduction, and quantization to the fixed
//! panel palette.

mod adjust;
mod blue;
mod error;
mod palette;

pub use adjust::{adjust, Adjustments};
pub use blue::{attenuation_curve, reduce_blue, BlueReduction};
pub use error::{AcepError, Result};
pub use palette::{from_indexed, to_acep, to_acep_indexed, AcepColorMap, ACEP_PALETTE};

use image::Rgb;

/// Unsigned Normalized integer conversion.
pub(crate) fn to_unorm8(v: f32) -> u8 {
    if v.is_nan() {
        0
    } else {
        (v.clamp(0.0, 1.0) * u8::MAX as f32).round() as u8
    }
}
/// Unsigned Normalized integer conversion.
pub(crate) fn from_unorm8(v: u8) -> f32 {
    v as f32 / u8::MAX as f32
}

/// Rec. 601 luminance of an RGB pixel, between 0.0 and 1.0.
pub(crate) fn luminance(p: Rgb<u8>) -> f32 {
    0.299 * from_unorm8(p[0]) + 0.587 * from_unorm8(p[1]) + 0.114 * from_unorm8(p[2])
}
