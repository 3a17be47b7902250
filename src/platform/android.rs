//! Android drawable directories.
//!
//! `out/<stem>/drawable-<density>/<stem>.png` for each of the five densities.

use super::{AssetSpec, EmitError, Platform, file_stem, remove_existing, require_source};
use crate::density::AndroidDensity;
use crate::events::{AssetEvent, Reporter};
use crate::imaging::{ImageBackend, resize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AndroidOptions {
    /// Without a target size, stop after the mdpi bucket. Matches asset
    /// sets produced by older releases, which only ever wrote that bucket.
    pub first_bucket_only: bool,
}

/// Write every density bucket for `source` under `out_dir/<stem>/`.
///
/// Returns the per-source directory and whether every bucket succeeded.
/// A failed bucket does not stop the remaining ones.
pub fn try_emit_android(
    backend: &impl ImageBackend,
    reporter: &impl Reporter,
    source: &Path,
    out_dir: &Path,
    spec: &AssetSpec,
    options: &AndroidOptions,
) -> Result<(PathBuf, bool), EmitError> {
    require_source(source)?;

    let stem = file_stem(source);
    let asset_dir = out_dir.join(&stem);
    let filename = format!("{stem}.png");
    let mut all_ok = true;

    for density in AndroidDensity::ALL {
        let dir = asset_dir.join(density.directory());
        std::fs::create_dir_all(&dir)?;

        let output = dir.join(&filename);
        remove_existing(&output)?;

        let (target, padding) =
            spec.variant(density.multiplier(), AndroidDensity::REFERENCE.multiplier());
        all_ok &= resize(backend, reporter, source, &output, target, padding);

        if options.first_bucket_only && spec.target_dp.is_empty() {
            break;
        }
    }

    Ok((asset_dir, all_ok))
}

/// [`try_emit_android`], reporting the outcome and collapsing it to
/// success/failure.
pub fn emit_android(
    backend: &impl ImageBackend,
    reporter: &impl Reporter,
    source: &Path,
    out_dir: &Path,
    spec: &AssetSpec,
    options: &AndroidOptions,
) -> bool {
    let event = match try_emit_android(backend, reporter, source, out_dir, spec, options) {
        Ok((output_dir, true)) => AssetEvent::PlatformDone {
            platform: Platform::Android,
            source: source.to_path_buf(),
            output_dir,
        },
        Ok((output_dir, false)) => AssetEvent::PlatformIncomplete {
            platform: Platform::Android,
            source: source.to_path_buf(),
            output_dir,
        },
        Err(e) => AssetEvent::EmitFailed {
            platform: Platform::Android,
            source: source.to_path_buf(),
            reason: e.to_string(),
        },
    };
    let success = !event.is_failure();
    reporter.emit(&event);
    success
}
