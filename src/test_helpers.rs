//! Shared test utilities for the pwa-icons test suite.
//!
//! Builds small in-memory images and writes them to disk so backend and
//! driver tests don't need fixture files.

use crate::color::Rgba;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::path::{Path, PathBuf};

/// A `width`×`height` image filled with `color`.
pub fn solid_image(width: u32, height: u32, color: Rgba) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color.into())
}

/// Encode `img` as PNG at `path`, regardless of the path's extension.
pub fn create_test_png(path: &Path, img: &RgbaImage) {
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::png::PngEncoder::new(writer)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgba8,
        )
        .unwrap();
}

/// An empty `source.png` in `dir`, for mock-backed runs that only need the
/// path to exist.
pub fn touch_source(dir: &Path) -> PathBuf {
    let path = dir.join("source.png");
    std::fs::write(&path, b"").unwrap();
    path
}
