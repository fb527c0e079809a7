use image::{Rgb, RgbImage};
use imageproc::map::map_colors;

use crate::{from_unorm8, luminance, to_unorm8};

/// Tonal adjustments applied before quantization, in declaration order:
/// saturation, black level, contrast, shadows.
///
/// The default value for every field is its identity; identity steps are
/// skipped entirely rather than evaluated and re-rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustments {
    /// Saturation percentage; 100 leaves colors unchanged, 0 turns the
    /// image grayscale.
    pub saturation: u32,
    /// Black-level lift percentage; linearly remaps values onto
    /// `[black_level%, 100%]`, like ImageMagick's `+level`.
    pub black_level: u32,
    /// Sigmoidal contrast gain around the 50% midpoint. Positive values
    /// steepen the curve, negative values apply the inverse transfer.
    pub contrast: f32,
    /// Shadow brightening strength; lifts channels in proportion to how
    /// dark the pixel is.
    pub shadows: f32,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            saturation: 100,
            black_level: 0,
            contrast: 0.0,
            shadows: 0.0,
        }
    }
}

/// Apply the adjustment chain to an image.
pub fn adjust(mut image: RgbImage, adjustments: &Adjustments) -> RgbImage {
    if adjustments.saturation != 100 {
        let factor = adjustments.saturation as f32 / 100.0;
        image = map_colors(&image, |p| saturate(p, factor));
    }
    if adjustments.black_level > 0 {
        let lift = adjustments.black_level as f32 / 100.0;
        image = map_colors(&image, |p| level(p, lift));
    }
    if adjustments.contrast != 0.0 {
        let lut = contrast_lut(adjustments.contrast);
        image = map_colors(&image, |p| {
            Rgb([lut[p[0] as usize], lut[p[1] as usize], lut[p[2] as usize]])
        });
    }
    if adjustments.shadows > 0.0 {
        image = map_colors(&image, |p| brighten_shadows(p, adjustments.shadows));
    }
    image
}

/// Blend each channel with the pixel's luminance.
fn saturate(p: Rgb<u8>, factor: f32) -> Rgb<u8> {
    let luminance = luminance(p);
    let blend = |c: u8| to_unorm8(luminance + (from_unorm8(c) - luminance) * factor);
    Rgb([blend(p[0]), blend(p[1]), blend(p[2])])
}

/// Remap `[0, 1]` onto `[lift, 1]`.
fn level(p: Rgb<u8>, lift: f32) -> Rgb<u8> {
    let remap = |c: u8| to_unorm8(lift + from_unorm8(c) * (1.0 - lift));
    Rgb([remap(p[0]), remap(p[1]), remap(p[2])])
}

/// Additive lift weighted by how dark the pixel is.
fn brighten_shadows(p: Rgb<u8>, amount: f32) -> Rgb<u8> {
    let lift = (1.0 - luminance(p)) * amount * 5.0 / 255.0;
    let add = |c: u8| to_unorm8(from_unorm8(c) + lift);
    Rgb([add(p[0]), add(p[1]), add(p[2])])
}

/// Per-channel transfer table for sigmoidal contrast.
fn contrast_lut(gain: f32) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = to_unorm8(sigmoid_remap(from_unorm8(i as u8), gain));
    }
    lut
}

/// Sigmoidal contrast on a normalized value: a logistic curve centered at
/// the 0.5 midpoint, rescaled to fix 0 and 1. A negative gain applies the
/// inverse transfer, flattening contrast instead. The gain-zero identity
/// case is the caller's to skip.
fn sigmoid_remap(x: f32, gain: f32) -> f32 {
    const MIDPOINT: f32 = 0.5;
    let beta = gain.abs();
    let s = |u: f32| 1.0 / (1.0 + (beta * (MIDPOINT - u)).exp());
    let (s0, s1) = (s(0.0), s(1.0));
    if gain > 0.0 {
        (s(x) - s0) / (s1 - s0)
    } else {
        // Inverse of the branch above, solved for x.
        (MIDPOINT - (1.0 / (s0 + x * (s1 - s0)) - 1.0).ln() / beta).clamp(0.0, 1.0)
    }
}
