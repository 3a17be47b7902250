//! Image processing in pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Resize + pad → PNG** | Lanczos3, transparent canvas, PNG encoder |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for geometry (unit testable)
//! - **Parameters**: Data structures describing a render
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: The single-image resizer combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{
    CanvasLayout, MAX_CANVAS_DIMENSION, calculate_canvas_layout, resolve_target_size,
};
pub use operations::{ResizeError, ResizeOutcome, plan_layout, resize, try_resize};
pub use params::RenderParams;
pub use rust_backend::RustBackend;
