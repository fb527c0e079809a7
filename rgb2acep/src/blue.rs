use std::f32::consts::PI;

use image::{Rgb, RgbImage};
use imageproc::map::map_colors;

use crate::{from_unorm8, luminance, to_unorm8};

/// Guard against division by zero on pure black pixels.
const RATIO_EPSILON: f32 = 1e-6;
/// The curve is evaluated on the ratio scaled by 1.5 to shorten it.
const RATIO_SHRINK: f32 = 1.5;

/// Settings for blue-channel attenuation.
///
/// `strength` drives the dominance curve: the less blue-dominant a pixel
/// is, the more its blue channel is reduced. `dark_strength` adds a
/// further reduction to pixels darker than `luminance_threshold`, where
/// blue casts are most visible on the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlueReduction {
    pub strength: f32,
    pub dark_strength: f32,
    pub luminance_threshold: f32,
}

impl Default for BlueReduction {
    fn default() -> Self {
        Self {
            strength: 0.0,
            dark_strength: 0.0,
            luminance_threshold: 0.35,
        }
    }
}

impl BlueReduction {
    pub fn is_noop(&self) -> bool {
        self.strength == 0.0 && self.dark_strength == 0.0
    }
}

/// Attenuate the blue channel of every pixel based on blue dominance and
/// darkness. Red and green are never modified.
pub fn reduce_blue(image: RgbImage, settings: &BlueReduction) -> RgbImage {
    if settings.is_noop() {
        return image;
    }
    map_colors(&image, |p| reduce_pixel(p, settings))
}

fn reduce_pixel(p: Rgb<u8>, settings: &BlueReduction) -> Rgb<u8> {
    let (r, g, b) = (from_unorm8(p[0]), from_unorm8(p[1]), from_unorm8(p[2]));

    let mut factor = 1.0;
    if settings.dark_strength > 0.0 {
        let luminance = luminance(p);
        if luminance < settings.luminance_threshold {
            let darkness = 1.0 - luminance / settings.luminance_threshold;
            factor *= 1.0 - settings.dark_strength * darkness * 0.1;
        }
    }
    if settings.strength > 0.0 {
        let ratio = b / (r + g + b + RATIO_EPSILON);
        factor *= (attenuation_curve(ratio * RATIO_SHRINK) - 1.0) * settings.strength + 1.0;
    }

    Rgb([p[0], p[1], to_unorm8(b * factor)])
}

/// Normalized attenuation curve over the (shortened) blue-dominance ratio.
///
/// `attenuation_curve(0) == 0` and `attenuation_curve(1) == 1`, so the
/// blue multiplier runs from `1 - strength` on blue-free pixels up to 1 on
/// blue-dominant ones: the reduction targets pixels where blue does *not*
/// dominate, without washing out skies.
pub fn attenuation_curve(x: f32) -> f32 {
    let pi_sq = PI * PI;
    0.25 * (-4.0 * pi_sq * (3.0 * x).exp() + 6.0 * PI * (2.0 * PI * x).sin()
        - 9.0 * (2.0 * PI * x).cos()
        + 9.0
        + 4.0 * pi_sq)
        * (3.0 - 3.0 * x).exp()
        / (pi_sq * (1.0 - 3.0f32.exp()))
}
