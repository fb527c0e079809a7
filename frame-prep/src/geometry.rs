use image::imageops::{self, FilterType};
use image::RgbImage;

/// Panel orientation, derived from the photograph's aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Square images count as portrait.
    pub fn of(width: u32, height: u32) -> Self {
        if width > height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// Aspect ratio to crop to before scaling.
    pub fn crop_ratio(self) -> (u32, u32) {
        match self {
            Self::Landscape => (5, 3),
            Self::Portrait => (3, 5),
        }
    }

    /// Panel resolution for this orientation.
    pub fn target_dimensions(self) -> (u32, u32) {
        match self {
            Self::Landscape => (800, 480),
            Self::Portrait => (480, 800),
        }
    }
}

/// Center-crop to the given aspect ratio, cropping width when the image
/// is too wide and height when it is too tall.
pub fn crop_to_ratio(image: &RgbImage, (ratio_w, ratio_h): (u32, u32)) -> RgbImage {
    let (width, height) = image.dimensions();
    if width * ratio_h > height * ratio_w {
        let new_width = height * ratio_w / ratio_h;
        let left = (width - new_width) / 2;
        imageops::crop_imm(image, left, 0, new_width, height).to_image()
    } else {
        let new_height = width * ratio_h / ratio_w;
        let top = (height - new_height) / 2;
        imageops::crop_imm(image, 0, top, width, new_height).to_image()
    }
}

/// Crop and scale a photograph to the panel resolution for the given
/// orientation, using Lanczos3 resampling.
pub fn fit_to_panel(image: &RgbImage, orientation: Orientation) -> RgbImage {
    let cropped = crop_to_ratio(image, orientation.crop_ratio());
    let (target_w, target_h) = orientation.target_dimensions();
    imageops::resize(&cropped, target_w, target_h, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};

    use super::*;

    #[test]
    fn orientation_of_dimensions() {
        assert_eq!(Orientation::of(4000, 3000), Orientation::Landscape);
        assert_eq!(Orientation::of(3000, 4000), Orientation::Portrait);
        // Squares display better as portraits on this frame.
        assert_eq!(Orientation::of(1000, 1000), Orientation::Portrait);
    }

    #[test]
    fn crop_too_wide() {
        let image = RgbImage::from_pixel(1000, 300, Rgb([10, 20, 30]));
        let cropped = crop_to_ratio(&image, (5, 3));
        assert_eq!(cropped.dimensions(), (500, 300));
    }

    #[test]
    fn crop_too_tall() {
        let image = RgbImage::from_pixel(500, 900, Rgb([10, 20, 30]));
        let cropped = crop_to_ratio(&image, (5, 3));
        assert_eq!(cropped.dimensions(), (500, 300));
    }

    #[test]
    fn crop_exact_ratio_is_unchanged() {
        let image = RgbImage::from_pixel(1500, 900, Rgb([10, 20, 30]));
        let cropped = crop_to_ratio(&image, (5, 3));
        assert_eq!(cropped.dimensions(), (1500, 900));
    }

    #[test]
    fn crop_is_centered() {
        // Left and right thirds black, middle third white.
        let image = RgbImage::from_fn(900, 300, |x, _| {
            if (300..600).contains(&x) {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        });
        let cropped = crop_to_ratio(&image, (1, 1));
        assert_eq!(cropped.dimensions(), (300, 300));
        assert!(cropped.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn fit_to_panel_hits_the_panel_resolution() {
        let landscape = RgbImage::from_pixel(1024, 768, Rgb([10, 20, 30]));
        let fitted = fit_to_panel(&landscape, Orientation::Landscape);
        assert_eq!(fitted.dimensions(), (800, 480));

        let portrait = RgbImage::from_pixel(768, 1024, Rgb([10, 20, 30]));
        let fitted = fit_to_panel(&portrait, Orientation::Portrait);
        assert_eq!(fitted.dimensions(), (480, 800));
    }
}
