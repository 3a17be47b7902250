//! Platform asset emitters.
//!
//! Each emitter fans one source image out into every density tier of its
//! platform and lays the variants out the way that platform's asset pipeline
//! expects:
//!
//! ```text
//! out/Android/star/drawable-mdpi/star.png      (and hdpi, xdpi, xxhdpi, xxxhdpi)
//! out/iOS/star/star.png, star@2x.png, star@3x.png, Contents.json
//! ```
//!
//! ## Sizing
//!
//! With an explicit logical size, tier `n` renders `target_dp * n` with the
//! Fit policy and `padding * n` around it. With no size, the source is taken
//! to be drawn for the platform's highest tier and every tier scales it by
//! `n / reference`, padding included.
//!
//! ## Failure handling
//!
//! Android keeps going after a failed tier and reports the set as
//! incomplete. iOS stops at the first failed tier and leaves no
//! `Contents.json`, since a catalog must list every scale.

pub mod android;
pub mod ios;

pub use android::{AndroidOptions, emit_android};
pub use ios::{AssetCatalogContents, ManifestEntry, ManifestInfo, emit_ios};

use crate::types::{FitPolicy, LogicalSize, ResizeTarget};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Target mobile platform. `Display` gives the output subdirectory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    pub const fn dir_name(self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("source image not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to resize {} into {}", input.display(), output.display())]
    ResizeFailed { input: PathBuf, output: PathBuf },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The logical size and padding requested for every generated asset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AssetSpec {
    pub target_dp: LogicalSize,
    pub padding: f64,
}

impl AssetSpec {
    pub fn new(target_dp: LogicalSize, padding: f64) -> Self {
        Self { target_dp, padding }
    }

    /// Resize target and pixel padding for a tier of `multiplier`, on a
    /// platform whose highest tier is `reference`.
    pub fn variant(&self, multiplier: f64, reference: f64) -> (ResizeTarget, f64) {
        if self.target_dp.is_empty() {
            let factor = multiplier / reference;
            (ResizeTarget::Scale(factor), self.padding * factor)
        } else {
            (
                ResizeTarget::Size {
                    size: self.target_dp * multiplier,
                    policy: FitPolicy::Fit,
                },
                self.padding * multiplier,
            )
        }
    }
}

/// Fail early, before any directory is created, when the source is missing.
fn require_source(source: &Path) -> Result<(), EmitError> {
    if source.is_file() {
        Ok(())
    } else {
        Err(EmitError::InputNotFound(source.to_path_buf()))
    }
}

/// Filename without extension: `icons/star.png` → `star`.
fn file_stem(source: &Path) -> String {
    source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Delete a previous variant so a failed render never leaves a stale file.
fn remove_existing(path: &Path) -> std::io::Result<()> {
    match std::fs::remove_file(path) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_directory_names() {
        assert_eq!(Platform::Android.to_string(), "Android");
        assert_eq!(Platform::Ios.to_string(), "iOS");
    }

    #[test]
    fn variant_without_target_scales_from_reference() {
        let spec = AssetSpec::new(LogicalSize::ZERO, 8.0);
        let (target, padding) = spec.variant(1.5, 4.0);
        assert_eq!(target, ResizeTarget::Scale(0.375));
        assert_eq!(padding, 3.0);
    }

    #[test]
    fn variant_with_target_multiplies_size_and_padding() {
        let spec = AssetSpec::new(LogicalSize::new(24.0, 0.0), 2.0);
        let (target, padding) = spec.variant(3.0, 3.0);
        assert_eq!(
            target,
            ResizeTarget::Size {
                size: LogicalSize::new(72.0, 0.0),
                policy: FitPolicy::Fit,
            }
        );
        assert_eq!(padding, 6.0);
    }

    #[test]
    fn file_stem_strips_directory_and_extension() {
        assert_eq!(file_stem(Path::new("icons/star.png")), "star");
        assert_eq!(file_stem(Path::new("a.b.png")), "a.b");
    }

    #[test]
    fn remove_existing_ignores_missing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("gone.png");
        remove_existing(&path).unwrap();

        std::fs::write(&path, "x").unwrap();
        remove_existing(&path).unwrap();
        assert!(!path.exists());
    }
}
