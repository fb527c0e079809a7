use image::{Rgb, RgbImage};
use rgb2acep::{from_indexed, to_acep, to_acep_indexed, ACEP_PALETTE};

/// Smooth gradient covering a good part of the RGB cube.
fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) * 255 / (width + height)) as u8,
        ])
    })
}

#[test]
fn dithered_output_uses_only_palette_colors() {
    let result = to_acep(gradient(64, 48), true);
    assert!(result.pixels().all(|p| ACEP_PALETTE.contains(p)));
}

#[test]
fn plain_remap_uses_only_palette_colors() {
    let result = to_acep(gradient(64, 48), false);
    assert!(result.pixels().all(|p| ACEP_PALETTE.contains(p)));
}

/// Dithering must not disturb regions that are already a palette color:
/// a solid orange image carries no quantization error to diffuse.
#[test]
fn solid_palette_color_survives_dithering() {
    let image = RgbImage::from_pixel(16, 16, Rgb([255, 128, 0]));
    let result = to_acep(image.clone(), true);
    assert_eq!(result, image);
}

/// Without dithering a mid-gray image collapses to a single palette
/// color; with error diffusion it must mix more than one.
#[test]
fn dithering_mixes_palette_colors_on_flat_gray() {
    let image = RgbImage::from_pixel(32, 32, Rgb([128, 128, 128]));

    let plain = to_acep(image.clone(), false);
    let first = *plain.get_pixel(0, 0);
    assert!(plain.pixels().all(|p| *p == first));

    let dithered = to_acep(image, true);
    assert!(dithered.pixels().any(|p| *p != first));
}

#[test]
fn indexed_output_matches_rgb_output() {
    let image = gradient(32, 32);
    let quantized = to_acep(image.clone(), false);
    let (indices, width, height) = to_acep_indexed(image, false);
    assert_eq!((width, height), (32, 32));
    let rebuilt = from_indexed(&indices, width, height).unwrap();
    assert_eq!(rebuilt, quantized);
}
