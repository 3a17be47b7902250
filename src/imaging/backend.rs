//! Image codec trait and shared types.
//!
//! The [`ImageBackend`] trait is the whole contract the asset pipeline needs
//! from a codec: report the pixel size of a source, and render a scaled copy
//! onto a padded canvas encoded to disk.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate and statically linked into the binary.

use super::params::RenderParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image codecs.
pub trait ImageBackend {
    /// Get image dimensions.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Decode the source, resample it to the target size, composite it onto
    /// a transparent canvas and encode the canvas as PNG.
    fn render(&self, params: &RenderParams) -> Result<(), BackendError>;
}
