//! Pure calculation functions for variant geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use crate::types::{FitPolicy, LogicalSize};

/// Resolve the size a source image should be scaled to.
///
/// An empty `requested` size means "keep the original". A missing width or
/// height is derived from the source aspect ratio, then `policy` reconciles
/// the pair.
///
/// `original` must have both dimensions positive.
///
/// # Examples
/// ```
/// # use mobile_assets::imaging::resolve_target_size;
/// # use mobile_assets::types::{FitPolicy, LogicalSize};
/// // 2:1 source asked for a 100x100 box → fits as 100x50
/// let size = resolve_target_size(
///     LogicalSize::new(200.0, 100.0),
///     LogicalSize::new(100.0, 100.0),
///     FitPolicy::Fit,
/// );
/// assert_eq!(size, LogicalSize::new(100.0, 50.0));
/// ```
pub fn resolve_target_size(
    original: LogicalSize,
    requested: LogicalSize,
    policy: FitPolicy,
) -> LogicalSize {
    if requested.is_empty() {
        return original;
    }

    let ratio = original.width / original.height;
    let mut width = requested.width;
    let mut height = requested.height;

    if width <= 0.0 {
        width = ratio * height;
    }
    if height <= 0.0 {
        height = width / ratio;
    }

    // Each policy updates width first and derives height from the new width.
    match policy {
        FitPolicy::Fill => {}
        FitPolicy::Fit => {
            width = width.min(ratio * height);
            height = height.min(width / ratio);
        }
        FitPolicy::Stretch => {
            width = width.max(ratio * height);
            // Divides by the requested height, not the ratio. Existing asset
            // sets were generated with this formula.
            height = height.max(width / height);
        }
    }

    LogicalSize::new(width, height)
}

/// Pixel layout of one rendered variant: the scaled source drawn at
/// `(offset, offset)` on a canvas grown by the padding on every side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    pub target_width: u32,
    pub target_height: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub offset: u32,
}

/// Largest canvas side the resizer will render.
pub const MAX_CANVAS_DIMENSION: u32 = 16_384;

/// Round a target size plus padding to whole pixels.
///
/// The canvas is built from the rounded parts so the padding stays equal on
/// every side. Dimensions never drop below one pixel.
pub fn calculate_canvas_layout(target: LogicalSize, padding: f64) -> CanvasLayout {
    let target_width = to_pixels(target.width);
    let target_height = to_pixels(target.height);
    let offset = padding.max(0.0).round() as u32;
    let border = offset.saturating_mul(2);
    CanvasLayout {
        target_width,
        target_height,
        canvas_width: target_width.saturating_add(border),
        canvas_height: target_height.saturating_add(border),
        offset,
    }
}

impl CanvasLayout {
    /// Whether the canvas fits within [`MAX_CANVAS_DIMENSION`] on both sides.
    pub fn is_renderable(&self) -> bool {
        self.canvas_width <= MAX_CANVAS_DIMENSION && self.canvas_height <= MAX_CANVAS_DIMENSION
    }
}

fn to_pixels(value: f64) -> u32 {
    value.round().max(1.0) as u32
}
