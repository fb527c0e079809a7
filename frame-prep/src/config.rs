use serde::Deserialize;
use std::{fs, path::Path};

/// Default adjustment settings loaded from a TOML file. Every field is
/// optional; explicit command-line flags take precedence over the file.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    pub saturation: Option<u32>,
    pub black_level: Option<u32>,
    pub contrast: Option<f32>,
    pub shadows: Option<f32>,
    pub blue_reduction: Option<f32>,
    pub dark_blue_reduction: Option<f32>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    adjustments: RawAdjustments,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawAdjustments {
    saturation: Option<u32>,
    black_level: Option<u32>,
    contrast: Option<f32>,
    shadows: Option<f32>,
    blue_reduction: Option<f32>,
    dark_blue_reduction: Option<f32>,
}

pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Config> {
    let s = fs::read_to_string(path)?;
    from_str(&s)
}

pub fn from_str(s: &str) -> anyhow::Result<Config> {
    let raw: RawConfig = toml::from_str(s)?;
    let adjustments = raw.adjustments;
    if let Some(black_level) = adjustments.black_level {
        anyhow::ensure!(
            black_level < 100,
            "black-level must be below 100, got {}",
            black_level
        );
    }
    Ok(Config {
        saturation: adjustments.saturation,
        black_level: adjustments.black_level,
        contrast: adjustments.contrast,
        shadows: adjustments.shadows,
        blue_reduction: adjustments.blue_reduction,
        dark_blue_reduction: adjustments.dark_blue_reduction,
    })
}

#[cfg(test)]
mod tests {
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn from_str() {
        let config = assert_ok!(super::from_str(
            r#"
[adjustments]
saturation = 130
black-level = 4
contrast = 2.0
blue-reduction = 0.3
"#
        ));
        assert_eq!(
            config,
            super::Config {
                saturation: Some(130),
                black_level: Some(4),
                contrast: Some(2.0),
                shadows: None,
                blue_reduction: Some(0.3),
                dark_blue_reduction: None,
            }
        );
        assert_eq!(assert_ok!(super::from_str("")), super::Config::default());
        assert_err!(super::from_str(
            r#"
[adjustments]
black-level = 100
"#
        ));
        assert_err!(super::from_str(
            r#"
[adjustments]
sharpness = 3
"#
        ));
    }
}
