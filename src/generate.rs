//! Batch generation over an input directory.
//!
//! ```text
//! out/
//! ├── Android/
//! │   └── star/drawable-{mdpi,hdpi,xdpi,xxhdpi,xxxhdpi}/star.png
//! └── iOS/
//!     └── star/{star.png, star@2x.png, star@3x.png, Contents.json}
//! ```
//!
//! Sources are discovered once. Each selected platform then processes every
//! source in discovery order. A failed source, or a platform directory that
//! cannot be created, marks the batch as failed but never stops it; only a
//! failure to list the input directory aborts the run.

use crate::events::{AssetEvent, Reporter};
use crate::imaging::ImageBackend;
use crate::platform::{AndroidOptions, AssetSpec, Platform, emit_android, emit_ios};
use crate::scan::{ScanError, discover_sources};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Everything a batch run needs to know.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub spec: AssetSpec,
    pub recursive: bool,
    pub android: bool,
    pub ios: bool,
    pub android_options: AndroidOptions,
}

impl GenerateRequest {
    /// Both platforms, top-level sources only, no target size or padding.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            spec: AssetSpec::default(),
            recursive: false,
            android: true,
            ios: true,
            android_options: AndroidOptions::default(),
        }
    }

    fn platforms(&self) -> Vec<Platform> {
        let mut platforms = Vec::with_capacity(2);
        if self.android {
            platforms.push(Platform::Android);
        }
        if self.ios {
            platforms.push(Platform::Ios);
        }
        platforms
    }
}

/// Run every selected platform emitter over every discovered source.
///
/// Returns `Ok(true)` only when every source succeeded on every platform.
pub fn try_generate(
    backend: &impl ImageBackend,
    reporter: &impl Reporter,
    request: &GenerateRequest,
) -> Result<bool, GenerateError> {
    let sources = discover_sources(&request.input, request.recursive)?;
    let mut success = true;

    for platform in request.platforms() {
        let platform_dir = request.output.join(platform.dir_name());
        if let Err(e) = std::fs::create_dir_all(&platform_dir) {
            reporter.emit(&AssetEvent::PlatformFailed {
                platform,
                output_dir: platform_dir,
                reason: e.to_string(),
            });
            success = false;
            continue;
        }

        for source in &sources {
            success &= match platform {
                Platform::Android => emit_android(
                    backend,
                    reporter,
                    source,
                    &platform_dir,
                    &request.spec,
                    &request.android_options,
                ),
                Platform::Ios => emit_ios(backend, reporter, source, &platform_dir, &request.spec),
            };
        }
    }

    Ok(success)
}

/// [`try_generate`], reporting the outcome and collapsing it to
/// success/failure.
pub fn generate(
    backend: &impl ImageBackend,
    reporter: &impl Reporter,
    request: &GenerateRequest,
) -> bool {
    let success = match try_generate(backend, reporter, request) {
        Ok(success) => success,
        Err(e) => {
            reporter.emit(&AssetEvent::BatchFailed {
                input: request.input.clone(),
                reason: e.to_string(),
            });
            false
        }
    };
    reporter.emit(&AssetEvent::BatchFinished {
        input: request.input.clone(),
        output: request.output.clone(),
        success,
    });
    success
}
