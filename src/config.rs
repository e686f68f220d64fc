//! Filter configuration.
//!
//! Handles loading and validating an optional `filters.toml`. Every option has
//! a default, so the tool runs without any config file; a file only needs the
//! values it wants to change. Command-line overrides are applied on top of
//! the loaded file and the result is validated again.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [contrast]
//! factor = 1.2          # Multiplier around mid-gray (128). Must be > 0.
//!
//! [blur]
//! radius = 1            # Box window is (2 * radius + 1) squared. 0-16.
//!
//! [output]
//! encoding = "binary"   # "binary" (P6) or "ascii" (P3)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{BlurRadius, ContrastFactor, FilterSettings, MAX_BLUR_RADIUS, PixmapEncoding};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Filter configuration loaded from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Contrast adjustment settings.
    pub contrast: ContrastConfig,
    /// Box blur settings.
    pub blur: BlurConfig,
    /// Output file settings.
    pub output: OutputConfig,
}

impl FilterConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factor = self.contrast.factor;
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "contrast.factor must be a positive number, got {factor}"
            )));
        }
        if self.blur.radius > MAX_BLUR_RADIUS {
            return Err(ConfigError::Validation(format!(
                "blur.radius must be 0-{MAX_BLUR_RADIUS}, got {}",
                self.blur.radius
            )));
        }
        Ok(())
    }

    /// The parameter set handed to the filter pipeline.
    pub fn settings(&self) -> FilterSettings {
        FilterSettings {
            contrast: ContrastFactor::new(self.contrast.factor),
            blur: BlurRadius::new(self.blur.radius),
        }
    }
}

/// Contrast adjustment settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContrastConfig {
    /// Multiplier applied to each channel's distance from 128.
    pub factor: f32,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            factor: ContrastFactor::default().value(),
        }
    }
}

/// Box blur settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlurConfig {
    /// Half-width of the averaging window.
    pub radius: usize,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            radius: BlurRadius::default().value(),
        }
    }
}

/// Output file settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Sample encoding of written pixmaps.
    pub encoding: PixmapEncoding,
}

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigOverrides {
    pub contrast_factor: Option<f32>,
    pub blur_radius: Option<usize>,
    pub encoding: Option<PixmapEncoding>,
}

impl ConfigOverrides {
    /// Apply the overrides and validate the merged result.
    pub fn apply(self, mut config: FilterConfig) -> Result<FilterConfig, ConfigError> {
        if let Some(factor) = self.contrast_factor {
            config.contrast.factor = factor;
        }
        if let Some(radius) = self.blur_radius {
            config.blur.radius = radius;
        }
        if let Some(encoding) = self.encoding {
            config.output.encoding = encoding;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Load config from `path`, or stock defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<FilterConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(FilterConfig::default());
    };
    let content = fs::read_to_string(path)?;
    let config: FilterConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A documented config file with every option at its default.
pub fn stock_config_toml() -> &'static str {
    r#"# pixmap-filter configuration
# All options are optional. Delete the ones you do not want to change.

[contrast]
# Multiplier applied to each channel's distance from mid-gray (128).
# Results are truncated toward zero, then clamped to 0-255.
factor = 1.2

[blur]
# Box blur half-width. The averaging window is (2 * radius + 1) squared;
# pixels closer than `radius` to an edge are left untouched. 0-16.
radius = 1

[output]
# "binary" writes P6, "ascii" writes P3.
encoding = "binary"
"#
}
