//! Parameter types for codec operations.
//!
//! These structs describe *what* to render, not *how*. They are the interface
//! between the [`operations`](super::operations) module (which decides the
//! geometry of every variant) and the [`backend`](super::backend) (which does
//! the pixel work), so tests can swap in a recording backend.

use super::calculations::CanvasLayout;
use std::path::PathBuf;

/// One render: scale `source` to the target size, draw it at
/// `(offset_x, offset_y)` on a blank canvas and encode the canvas losslessly
/// to `output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub target_width: u32,
    pub target_height: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

impl RenderParams {
    pub fn from_layout(source: PathBuf, output: PathBuf, layout: CanvasLayout) -> Self {
        Self {
            source,
            output,
            target_width: layout.target_width,
            target_height: layout.target_height,
            canvas_width: layout.canvas_width,
            canvas_height: layout.canvas_height,
            offset_x: layout.offset,
            offset_y: layout.offset,
        }
    }
}
