use image::{imageops::ColorMap, Pixel, Rgb, RgbImage};

use crate::error::{AcepError, Result};

/// The 7 colors an ACeP panel can show, in the panel's color-table order.
pub const ACEP_PALETTE: [Rgb<u8>; 7] = [
    Rgb([0, 0, 0]),       // black
    Rgb([255, 255, 255]), // white
    Rgb([0, 255, 0]),     // green
    Rgb([0, 0, 255]),     // blue
    Rgb([255, 0, 0]),     // red
    Rgb([255, 255, 0]),   // yellow
    Rgb([255, 128, 0]),   // orange
];

/// Convert an image to the 7 ACeP colors.
///
/// The result is still RGB, but only uses the palette colors. With
/// `dither` the quantization error is diffused Floyd-Steinberg style;
/// without it every pixel snaps to its nearest palette color.
pub fn to_acep(mut image: RgbImage, dither: bool) -> RgbImage {
    let map = AcepColorMap;
    if dither {
        image::imageops::dither(&mut image, &map)
    } else {
        for pixel in image.pixels_mut() {
            map.map_color(pixel);
        }
    }
    image
}

/// Convert an image to the 7 ACeP colors, as one palette index per pixel.
///
/// Panels consume index buffers rather than RGB, so this is the form to
/// use when packing data for a display driver.
pub fn to_acep_indexed(image: RgbImage, dither: bool) -> (Vec<u8>, u32, u32) {
    let (width, height) = image.dimensions();
    let image = to_acep(image, dither);
    let map = AcepColorMap;
    let indices = image.pixels().map(|p| map.index_of(p) as u8).collect();
    (indices, width, height)
}

/// Rebuild an RGB image from a buffer of palette indices.
pub fn from_indexed(indices: &[u8], width: u32, height: u32) -> Result<RgbImage> {
    if indices.len() != width as usize * height as usize {
        return Err(AcepError::BufferSize {
            len: indices.len(),
            width,
            height,
        });
    }
    let map = AcepColorMap;
    let mut pixels = Vec::with_capacity(indices.len() * 3);
    for &index in indices {
        let color = map
            .lookup(index as usize)
            .ok_or(AcepError::BadIndex(index))?;
        pixels.extend_from_slice(color.channels());
    }
    Ok(RgbImage::from_raw(width, height, pixels).unwrap())
}

/// Nearest-color map onto [`ACEP_PALETTE`] by squared RGB distance.
#[derive(Debug, Default)]
pub struct AcepColorMap;

impl ColorMap for AcepColorMap {
    type Color = Rgb<u8>;

    fn index_of(&self, color: &Self::Color) -> usize {
        let mut nearest = 0;
        let mut nearest_distance = u32::MAX;
        for (index, palette_color) in ACEP_PALETTE.iter().enumerate() {
            let distance = color
                .channels()
                .iter()
                .zip(palette_color.channels())
                .map(|(&a, &b)| {
                    let delta = a as i32 - b as i32;
                    (delta * delta) as u32
                })
                .sum();
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest = index;
            }
        }
        nearest
    }
    fn lookup(&self, index: usize) -> Option<Self::Color> {
        ACEP_PALETTE.get(index).copied()
    }
    fn has_lookup(&self) -> bool {
        true
    }
    fn map_color(&self, color: &mut Self::Color) {
        *color = self.lookup(self.index_of(color)).unwrap();
    }
}
