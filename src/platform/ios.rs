//! iOS asset-catalog image sets.
//!
//! `out/<stem>/<stem>.png`, `<stem>@2x.png`, `<stem>@3x.png` plus the
//! `Contents.json` Xcode reads to map files to scales:
//!
//! ```json
//! {
//!   "images": [
//!     { "filename": "star.png", "idiom": "universal", "scale": "1x" },
//!     { "filename": "star@2x.png", "idiom": "universal", "scale": "2x" },
//!     { "filename": "star@3x.png", "idiom": "universal", "scale": "3x" }
//!   ],
//!   "info": { "author": "xcode", "version": 1 }
//! }
//! ```

use super::{AssetSpec, EmitError, Platform, file_stem, remove_existing, require_source};
use crate::density::IosScale;
use crate::events::{AssetEvent, Reporter};
use crate::imaging::{ImageBackend, resize};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONTENTS_FILE: &str = "Contents.json";

/// The `Contents.json` document of an image set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetCatalogContents {
    pub images: Vec<ManifestEntry>,
    pub info: ManifestInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
}

impl ManifestEntry {
    pub fn universal(filename: String, scale: IosScale) -> Self {
        Self {
            filename,
            idiom: "universal".to_string(),
            scale: scale.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

/// Write the 1x/2x/3x variants of `source` and their `Contents.json` under
/// `out_dir/<stem>/`.
///
/// Stops at the first failed scale. Any previous `Contents.json` is removed
/// up front, so a failed run never leaves a manifest naming deleted files.
pub fn try_emit_ios(
    backend: &impl ImageBackend,
    reporter: &impl Reporter,
    source: &Path,
    out_dir: &Path,
    spec: &AssetSpec,
) -> Result<(PathBuf, AssetCatalogContents), EmitError> {
    require_source(source)?;

    let stem = file_stem(source);
    let asset_dir = out_dir.join(&stem);
    std::fs::create_dir_all(&asset_dir)?;
    remove_existing(&asset_dir.join(CONTENTS_FILE))?;

    let mut images = Vec::with_capacity(IosScale::ALL.len());
    for scale in IosScale::ALL {
        let filename = scale.filename(&stem);
        let output = asset_dir.join(&filename);
        remove_existing(&output)?;

        let (target, padding) = spec.variant(scale.multiplier(), IosScale::REFERENCE.multiplier());
        if !resize(backend, reporter, source, &output, target, padding) {
            return Err(EmitError::ResizeFailed {
                input: source.to_path_buf(),
                output,
            });
        }

        images.push(ManifestEntry::universal(filename, scale));
    }

    let contents = AssetCatalogContents {
        images,
        info: ManifestInfo::default(),
    };
    let json = serde_json::to_string_pretty(&contents)?;
    std::fs::write(asset_dir.join(CONTENTS_FILE), json)?;

    Ok((asset_dir, contents))
}

/// [`try_emit_ios`], reporting the outcome and collapsing it to
/// success/failure.
pub fn emit_ios(
    backend: &impl ImageBackend,
    reporter: &impl Reporter,
    source: &Path,
    out_dir: &Path,
    spec: &AssetSpec,
) -> bool {
    let event = match try_emit_ios(backend, reporter, source, out_dir, spec) {
        Ok((output_dir, _)) => AssetEvent::PlatformDone {
            platform: Platform::Ios,
            source: source.to_path_buf(),
            output_dir,
        },
        Err(e) => AssetEvent::EmitFailed {
            platform: Platform::Ios,
            source: source.to_path_buf(),
            reason: e.to_string(),
        },
    };
    let success = !event.is_failure();
    reporter.emit(&event);
    success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NullReporter;
    use crate::imaging::RustBackend;
    use crate::imaging::backend::tests::MockBackend;
    use crate::test_helpers::{collect_events, create_test_png, png_dimensions};
    use crate::types::LogicalSize;
    use std::sync::mpsc;
    use tempfile::TempDir;

    fn read_contents(dir: &Path) -> AssetCatalogContents {
        let json = std::fs::read_to_string(dir.join(CONTENTS_FILE)).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn writes_three_scales_and_manifest() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("star.png");
        create_test_png(&source, 300, 150);
        let out = tmp.path().join("iOS");

        let ok = emit_ios(
            &RustBackend::new(),
            &NullReporter,
            &source,
            &out,
            &AssetSpec::new(LogicalSize::new(40.0, 0.0), 0.0),
        );

        assert!(ok);
        let dir = out.join("star");
        assert_eq!(png_dimensions(&dir.join("star.png")), (40, 20));
        assert_eq!(png_dimensions(&dir.join("star@2x.png")), (80, 40));
        assert_eq!(png_dimensions(&dir.join("star@3x.png")), (120, 60));
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 4);

        let contents = read_contents(&dir);
        let pairs: Vec<(&str, &str)> = contents
            .images
            .iter()
            .map(|e| (e.filename.as_str(), e.scale.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("star.png", "1x"),
                ("star@2x.png", "2x"),
                ("star@3x.png", "3x")
            ]
        );
        assert!(contents.images.iter().all(|e| e.idiom == "universal"));
        assert_eq!(contents.info, ManifestInfo::default());
    }

    #[test]
    fn manifest_json_shape() {
        let contents = AssetCatalogContents {
            images: vec![ManifestEntry::universal("a.png".into(), IosScale::X1)],
            info: ManifestInfo::default(),
        };
        let value = serde_json::to_value(&contents).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "images": [{ "filename": "a.png", "idiom": "universal", "scale": "1x" }],
                "info": { "author": "xcode", "version": 1 }
            })
        );
    }

    #[test]
    fn no_target_treats_source_as_3x() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("logo.png");
        create_test_png(&source, 90, 60);

        let ok = emit_ios(
            &RustBackend::new(),
            &NullReporter,
            &source,
            tmp.path(),
            &AssetSpec::default(),
        );

        assert!(ok);
        let dir = tmp.path().join("logo");
        assert_eq!(png_dimensions(&dir.join("logo.png")), (30, 20));
        assert_eq!(png_dimensions(&dir.join("logo@2x.png")), (60, 40));
        assert_eq!(
            std::fs::read(&source).unwrap(),
            std::fs::read(dir.join("logo@3x.png")).unwrap()
        );
    }

    #[test]
    fn second_failure_aborts_without_manifest() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("logo.png");
        std::fs::write(&source, "png").unwrap();
        let backend = MockBackend::with_dimensions(64, 64).failing_on_render(2);
        let (tx, rx) = mpsc::channel();

        let ok = emit_ios(
            &backend,
            &tx,
            &source,
            tmp.path(),
            &AssetSpec::new(LogicalSize::new(16.0, 16.0), 0.0),
        );

        assert!(!ok);
        assert_eq!(backend.renders().len(), 2);
        let dir = tmp.path().join("logo");
        assert!(dir.join("logo.png").exists());
        assert!(!dir.join("logo@3x.png").exists());
        assert!(!dir.join(CONTENTS_FILE).exists());

        let events = collect_events(&rx);
        assert!(matches!(
            events.last(),
            Some(AssetEvent::EmitFailed {
                platform: Platform::Ios,
                ..
            })
        ));
    }

    #[test]
    fn failure_removes_stale_manifest() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("logo.png");
        std::fs::write(&source, "png").unwrap();
        let dir = tmp.path().join("logo");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONTENTS_FILE), "{}").unwrap();
        std::fs::write(dir.join("logo.png"), "old").unwrap();

        let backend = MockBackend::with_dimensions(64, 64).failing_on_render(1);
        let ok = emit_ios(
            &backend,
            &NullReporter,
            &source,
            tmp.path(),
            &AssetSpec::new(LogicalSize::new(16.0, 16.0), 0.0),
        );

        assert!(!ok);
        assert!(!dir.join("logo.png").exists());
        assert!(!dir.join(CONTENTS_FILE).exists());
    }

    #[test]
    fn rerun_overwrites_manifest() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("logo.png");
        std::fs::write(&source, "png").unwrap();
        let dir = tmp.path().join("logo");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONTENTS_FILE), "stale").unwrap();

        let ok = emit_ios(
            &MockBackend::with_dimensions(64, 64),
            &NullReporter,
            &source,
            tmp.path(),
            &AssetSpec::new(LogicalSize::new(16.0, 16.0), 1.0),
        );

        assert!(ok);
        assert_eq!(read_contents(&dir).images.len(), 3);
    }

    #[test]
    fn missing_source_creates_nothing() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("iOS");

        let ok = emit_ios(
            &MockBackend::with_dimensions(1, 1),
            &NullReporter,
            &tmp.path().join("ghost.png"),
            &out,
            &AssetSpec::default(),
        );

        assert!(!ok);
        assert!(!out.exists());
    }
}
