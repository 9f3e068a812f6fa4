//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG) | `image::ImageReader` with content sniffing |
//! | Resize | `image::imageops::resize` with `Lanczos3` filter, on premultiplied alpha |
//! | Composite | logo alpha as a per-channel paste mask |
//! | Encode → PNG | `image::codecs::png::PngEncoder` (best compression, adaptive filter) |
//! | Encode → ICO | `image::codecs::ico::IcoEncoder` with PNG-compressed frames |

use super::backend::{BackendError, ImageBackend};
use super::calculations::Placement;
use super::params::{IconBundleParams, MaskableParams, ResizeParams, SplashParams};
use crate::color::Rgba;
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, ImageReader, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
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

/// Lanczos3 resize to exact dimensions (no aspect preservation).
///
/// Filtering runs on premultiplied color, so fully transparent pixels add
/// nothing to the color of the soft edges around them.
fn resample(source: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let premultiplied = premultiply(source);
    let mut resized = imageops::resize(&premultiplied, width, height, FilterType::Lanczos3);
    unpremultiply(&mut resized);
    resized
}

fn premultiply(img: &RgbaImage) -> RgbaImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        let alpha = u32::from(px[3]);
        for c in &mut px.0[..3] {
            *c = ((u32::from(*c) * alpha + 127) / 255) as u8;
        }
    }
    out
}

fn unpremultiply(img: &mut RgbaImage) {
    for px in img.pixels_mut() {
        let alpha = u32::from(px[3]);
        if alpha == 0 {
            px.0 = [0; 4];
            continue;
        }
        for c in &mut px.0[..3] {
            // Ringing can push a channel past its alpha.
            *c = ((u32::from(*c) * 255 + alpha / 2) / alpha).min(255) as u8;
        }
    }
}

/// Copy `logo` onto `canvas` at (`x`, `y`), using the logo's alpha as the
/// blend mask for all four channels, alpha included. Over a translucent
/// canvas this differs from Porter-Duff "over": a half-transparent logo pixel
/// lands halfway between the canvas alpha and its own. Anything outside the
/// canvas is clipped.
fn paste_masked(canvas: &mut RgbaImage, logo: &RgbaImage, x: i64, y: i64) {
    let (width, height) = (i64::from(canvas.width()), i64::from(canvas.height()));
    for (lx, ly, src) in logo.enumerate_pixels() {
        let (cx, cy) = (x + i64::from(lx), y + i64::from(ly));
        if cx < 0 || cy < 0 || cx >= width || cy >= height {
            continue;
        }
        let mask = u32::from(src[3]);
        let dst = canvas.get_pixel_mut(cx as u32, cy as u32);
        for (d, s) in dst.0.iter_mut().zip(src.0) {
            *d = ((u32::from(s) * mask + u32::from(*d) * (255 - mask) + 127) / 255) as u8;
        }
    }
}

/// Solid canvas with the source resized into `placement`, pasted through
/// the resized image's own alpha.
fn composite(
    source: &RgbaImage,
    width: u32,
    height: u32,
    background: Rgba,
    placement: Placement,
) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(width, height, background.into());
    let logo = resample(source, placement.size, placement.size);
    paste_masked(&mut canvas, &logo, placement.x, placement.y);
    canvas
}

/// Encode as PNG with maximum compression.
fn save_png(img: &RgbaImage, path: &Path) -> Result<(), BackendError> {
    let file = File::create(path).map_err(BackendError::Io)?;
    let writer = BufWriter::new(file);
    PngEncoder::new_with_quality(writer, CompressionType::Best, PngFilter::Adaptive)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("PNG encode failed for {}: {e}", path.display()))
        })
}

impl ImageBackend for RustBackend {
    fn load(&self, path: &Path) -> Result<RgbaImage, BackendError> {
        let img = ImageReader::open(path)
            .map_err(BackendError::Io)?
            .with_guessed_format()
            .map_err(BackendError::Io)?
            .decode()
            .map_err(|e| {
                BackendError::ProcessingFailed(format!(
                    "Failed to decode {}: {}",
                    path.display(),
                    e
                ))
            })?;
        Ok(img.to_rgba8())
    }

    fn resize(&self, source: &RgbaImage, params: &ResizeParams) -> Result<(), BackendError> {
        let resized = resample(source, params.size, params.size);
        save_png(&resized, &params.output)
    }

    fn icon_bundle(
        &self,
        source: &RgbaImage,
        params: &IconBundleParams,
    ) -> Result<(), BackendError> {
        let frames = params
            .sizes
            .iter()
            .map(|&size| {
                let resized = resample(source, size, size);
                IcoFrame::as_png(resized.as_raw(), size, size, ExtendedColorType::Rgba8)
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| BackendError::ProcessingFailed(format!("ICO frame encode failed: {e}")))?;

        let file = File::create(&params.output).map_err(BackendError::Io)?;
        IcoEncoder::new(BufWriter::new(file))
            .encode_images(&frames)
            .map_err(|e| {
                BackendError::ProcessingFailed(format!(
                    "ICO encode failed for {}: {e}",
                    params.output.display()
                ))
            })
    }

    fn maskable(&self, source: &RgbaImage, params: &MaskableParams) -> Result<(), BackendError> {
        let canvas = composite(
            source,
            params.canvas,
            params.canvas,
            params.background,
            params.content,
        );
        save_png(&canvas, &params.output)
    }

    fn splash(&self, source: &RgbaImage, params: &SplashParams) -> Result<(), BackendError> {
        let canvas = composite(
            source,
            params.width,
            params.height,
            params.background,
            params.logo,
        );
        save_png(&canvas, &params.output)
    }
}
