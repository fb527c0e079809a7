mod config;
mod geometry;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;
use rgb2acep::{adjust, reduce_blue, to_acep, Adjustments, BlueReduction};
use simplelog::{LevelFilter::Info, SimpleLogger};

use geometry::Orientation;

#[derive(Parser, Debug)]
struct Opt {
    /// Photograph to convert.
    image: PathBuf,
    /// Optional TOML file with default adjustment settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Blue reduction strength.
    #[arg(long)]
    blue_reduction: Option<f32>,
    /// Additional blue reduction strength for dark pixels.
    #[arg(long)]
    dark_blue_reduction: Option<f32>,
    /// Saturation percentage; 100 leaves the image unchanged.
    #[arg(long)]
    saturation: Option<u32>,
    /// Black level percentage.
    #[arg(long)]
    black_level: Option<u32>,
    /// Sigmoidal contrast gain; negative values flatten.
    #[arg(long)]
    contrast: Option<f32>,
    /// Shadow brightening strength.
    #[arg(long)]
    shadows: Option<f32>,
    /// Dither method.
    #[arg(long, value_enum, default_value = "floyd-steinberg")]
    dither_method: DitherMethod,
    /// Output directory.
    #[arg(long, default_value = "converted")]
    out_dir: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum DitherMethod {
    FloydSteinberg,
    None,
}

pub fn main() -> anyhow::Result<()> {
    SimpleLogger::init(Info, Default::default())?;

    let opt = Opt::parse();
    let defaults = match &opt.config {
        Some(path) => config::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => config::Config::default(),
    };
    let adjustments = Adjustments {
        saturation: opt.saturation.or(defaults.saturation).unwrap_or(100),
        black_level: opt.black_level.or(defaults.black_level).unwrap_or(0),
        contrast: opt.contrast.or(defaults.contrast).unwrap_or(1.0),
        shadows: opt.shadows.or(defaults.shadows).unwrap_or(0.0),
    };
    anyhow::ensure!(
        adjustments.black_level < 100,
        "--black-level must be below 100"
    );
    let blue = BlueReduction {
        strength: opt.blue_reduction.or(defaults.blue_reduction).unwrap_or(0.0),
        dark_strength: opt
            .dark_blue_reduction
            .or(defaults.dark_blue_reduction)
            .unwrap_or(0.0),
        ..Default::default()
    };

    let output = output_path(&opt.out_dir, &opt.image)?;
    info!(
        "Processing {} -> {}",
        opt.image.display(),
        output.display()
    );
    info!("Settings: {:?}, {:?}, {:?}", blue, adjustments, opt.dither_method);

    let image = image::io::Reader::open(&opt.image)
        .with_context(|| format!("failed to open {}", opt.image.display()))?
        .with_guessed_format()?
        .decode()
        .with_context(|| format!("failed to decode {}", opt.image.display()))?
        .into_rgb8();

    let (width, height) = image.dimensions();
    let orientation = Orientation::of(width, height);
    info!(
        "{}x{} input is {:?}: cropping to {:?}, scaling to {:?}",
        width,
        height,
        orientation,
        orientation.crop_ratio(),
        orientation.target_dimensions()
    );

    let image = geometry::fit_to_panel(&image, orientation);
    let image = reduce_blue(image, &blue);
    let image = adjust(image, &adjustments);
    let image = to_acep(image, opt.dither_method == DitherMethod::FloydSteinberg);

    fs::create_dir_all(&opt.out_dir)
        .with_context(|| format!("failed to create {}", opt.out_dir.display()))?;
    image
        .save(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("Done");

    Ok(())
}

fn output_path(out_dir: &Path, input: &Path) -> anyhow::Result<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input path has no file name")?;
    Ok(out_dir.join(format!("{}_converted.bmp", stem)))
}
