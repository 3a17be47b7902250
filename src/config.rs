//! Generator configuration.
//!
//! Settings are read from `mobile-assets.toml` in the working directory (or
//! the file passed with `--config`). Command-line flags override anything set
//! here.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! input = "art"              # Source directory (no default)
//! output = "generated"       # Output directory (no default)
//!
//! [target]
//! width = 0.0                # Logical width in dp; 0 derives it from height
//! height = 0.0               # Logical height in dp; 0 derives it from width
//! padding = 0.0              # Logical padding in dp on every side
//!
//! [scan]
//! recursive = false          # Descend into subdirectories of the input
//!
//! [platforms]
//! android = true
//! ios = true
//!
//! [android]
//! first_bucket_only = false  # Without a target size, only write mdpi
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::density::AndroidDensity;
use crate::generate::GenerateRequest;
use crate::imaging::MAX_CANVAS_DIMENSION;
use crate::platform::{AndroidOptions, AssetSpec};
use crate::types::LogicalSize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "mobile-assets.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Logical size and padding applied to every source.
    pub target: TargetConfig,
    pub scan: ScanConfig,
    pub platforms: PlatformsConfig,
    pub android: AndroidConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub recursive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformsConfig {
    pub android: bool,
    pub ios: bool,
}

impl Default for PlatformsConfig {
    fn default() -> Self {
        Self {
            android: true,
            ios: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AndroidConfig {
    pub first_bucket_only: bool,
}

impl GeneratorConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let target = &self.target;
        if !target.width.is_finite() || !target.height.is_finite() {
            return Err(ConfigError::Validation(
                "target.width and target.height must be finite numbers".into(),
            ));
        }
        if !target.padding.is_finite() || target.padding < 0.0 {
            return Err(ConfigError::Validation(
                "target.padding must be a non-negative number".into(),
            ));
        }
        let largest_side = (target.width.max(target.height) + 2.0 * target.padding)
            * AndroidDensity::REFERENCE.multiplier();
        if largest_side > f64::from(MAX_CANVAS_DIMENSION) {
            return Err(ConfigError::Validation(format!(
                "target size plus padding must stay within {MAX_CANVAS_DIMENSION} px at {}x",
                AndroidDensity::REFERENCE.multiplier()
            )));
        }
        if !self.platforms.android && !self.platforms.ios {
            return Err(ConfigError::Validation(
                "at least one of platforms.android and platforms.ios must be enabled".into(),
            ));
        }
        Ok(())
    }

    /// Build the batch request. `None` when input or output is still unset.
    pub fn to_request(&self) -> Option<GenerateRequest> {
        let input = self.input.clone()?;
        let output = self.output.clone()?;
        Some(GenerateRequest {
            input,
            output,
            spec: AssetSpec::new(
                LogicalSize::new(self.target.width, self.target.height),
                self.target.padding,
            ),
            recursive: self.scan.recursive,
            android: self.platforms.android,
            ios: self.platforms.ios,
            android_options: AndroidOptions {
                first_bucket_only: self.android.first_bucket_only,
            },
        })
    }
}

/// Load and validate a config file.
///
/// A missing file yields the defaults when `required` is false and an error
/// otherwise.
pub fn load_config(path: &Path, required: bool) -> Result<GeneratorConfig, ConfigError> {
    if !required && !path.exists() {
        return Ok(GeneratorConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: GeneratorConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `--gen-config` flag.
pub fn stock_config_toml() -> &'static str {
    r##"# mobile-assets configuration
# ===========================
# All settings are optional. Values shown below are the defaults.
# Command-line flags override anything set here.
# Unknown keys will cause an error.

# Source directory with the PNG files to convert (-i).
# input = "art"

# Directory that receives the Android/ and iOS/ trees (-o).
# output = "generated"

[target]
# Logical (dp) size of every generated asset, excluding padding.
# 0 for one dimension derives it from the other and the source aspect ratio.
# 0 for both treats each source as drawn for the highest density
# (xxxhdpi on Android, @3x on iOS) and scales it down for the others.
width = 0.0
height = 0.0

# Transparent border added on every side, in dp.
padding = 0.0

[scan]
# Also process PNG files in subdirectories of the input (-r).
recursive = false

[platforms]
android = true
ios = true

[android]
# Without a target size, only write the drawable-mdpi bucket.
# Reproduces asset sets generated by older releases.
first_bucket_only = false
"##
}
