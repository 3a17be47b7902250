//! Single-image resize.
//!
//! Combines the geometry calculations with backend execution. Callers get a
//! plain `bool`: every failure is reported to the [`Reporter`] and stops at
//! this boundary.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::{
    CanvasLayout, MAX_CANVAS_DIMENSION, calculate_canvas_layout, resolve_target_size,
};
use super::params::RenderParams;
use crate::events::{AssetEvent, Reporter};
use crate::types::{LogicalSize, ResizeTarget};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("source image not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("codec error: {0}")]
    Codec(#[from] BackendError),
    #[error("canvas {width}x{height} exceeds the {max} px limit", max = MAX_CANVAS_DIMENSION)]
    TooLarge { width: u32, height: u32 },
}

/// What a successful resize did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// Source bytes copied verbatim.
    Copied,
    Rendered {
        source: Dimensions,
        layout: CanvasLayout,
    },
}

/// Compute the canvas for a source of `source_dims` pixels.
pub fn plan_layout(source_dims: Dimensions, target: ResizeTarget, padding: f64) -> CanvasLayout {
    let original = LogicalSize::new(f64::from(source_dims.width), f64::from(source_dims.height));
    let size = match target {
        ResizeTarget::Size { size, policy } => resolve_target_size(original, size, policy),
        ResizeTarget::Scale(factor) => original * factor,
    };
    calculate_canvas_layout(size, padding)
}

/// Resize `source` into `output`, overwriting it.
///
/// An identity target with no padding copies the file instead of re-encoding.
pub fn try_resize(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    target: ResizeTarget,
    padding: f64,
) -> Result<ResizeOutcome, ResizeError> {
    if !source.is_file() {
        return Err(ResizeError::InputNotFound(source.to_path_buf()));
    }

    if target.is_identity() && padding <= 0.0 {
        std::fs::copy(source, output)?;
        return Ok(ResizeOutcome::Copied);
    }

    let dims = backend.identify(source)?;
    let layout = plan_layout(dims, target, padding);
    if !layout.is_renderable() {
        return Err(ResizeError::TooLarge {
            width: layout.canvas_width,
            height: layout.canvas_height,
        });
    }
    backend.render(&RenderParams::from_layout(
        source.to_path_buf(),
        output.to_path_buf(),
        layout,
    ))?;

    Ok(ResizeOutcome::Rendered {
        source: dims,
        layout,
    })
}

/// [`try_resize`], reporting the outcome and collapsing it to success/failure.
pub fn resize(
    backend: &impl ImageBackend,
    reporter: &impl Reporter,
    source: &Path,
    output: &Path,
    target: ResizeTarget,
    padding: f64,
) -> bool {
    let event = match try_resize(backend, source, output, target, padding) {
        Ok(ResizeOutcome::Copied) => AssetEvent::Copied {
            source: source.to_path_buf(),
            output: output.to_path_buf(),
        },
        Ok(ResizeOutcome::Rendered {
            source: dims,
            layout,
        }) => AssetEvent::Resized {
            source: source.to_path_buf(),
            output: output.to_path_buf(),
            source_dims: (dims.width, dims.height),
            canvas: (layout.canvas_width, layout.canvas_height),
            padding,
        },
        Err(e) => AssetEvent::ResizeFailed {
            source: source.to_path_buf(),
            output: output.to_path_buf(),
            reason: e.to_string(),
        },
    };
    let success = !event.is_failure();
    reporter.emit(&event);
    success
}
