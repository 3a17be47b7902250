//! Pure Rust codec backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header only, no full decode) |
//! | Decode | `image::ImageReader` with format sniffing |
//! | Resample | `DynamicImage::resize_exact` with `Lanczos3` |
//! | Composite | `image::imageops::overlay` onto a transparent `RgbaImage` |
//! | Encode | `image::codecs::png::PngEncoder` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::RenderParams;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, RgbaImage};
use std::path::Path;

/// Codec backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Encode the canvas as PNG. The file is created (or truncated) here.
fn save_png(canvas: RgbaImage, path: &Path) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let writer = std::io::BufWriter::new(file);
    DynamicImage::ImageRgba8(canvas)
        .write_with_encoder(PngEncoder::new(writer))
        .map_err(|e| BackendError::ProcessingFailed(format!("PNG encode failed: {}", e)))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to read dimensions: {}", e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn render(&self, params: &RenderParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        let scaled = img
            .resize_exact(
                params.target_width,
                params.target_height,
                FilterType::Lanczos3,
            )
            .to_rgba8();

        let mut canvas = RgbaImage::new(params.canvas_width, params.canvas_height);
        image::imageops::overlay(
            &mut canvas,
            &scaled,
            i64::from(params.offset_x),
            i64::from(params.offset_y),
        );

        save_png(canvas, &params.output)
    }
}
