//! Shared test utilities: synthetic PNG fixtures and event collection.

use crate::events::AssetEvent;
use image::{ImageEncoder, RgbaImage};
use std::path::Path;
use std::sync::mpsc::Receiver;

/// Create a small valid opaque PNG file with the given dimensions.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::png::PngEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgba8)
        .unwrap();
}

/// Drain every event sent so far.
pub fn collect_events(rx: &Receiver<AssetEvent>) -> Vec<AssetEvent> {
    rx.try_iter().collect()
}

/// Pixel dimensions of a PNG on disk. Panics with the path on failure.
pub fn png_dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path)
        .unwrap_or_else(|e| panic!("cannot read dimensions of {}: {e}", path.display()))
}
