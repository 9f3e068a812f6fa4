//! Image processing — pure Rust, on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Load** | `image::ImageReader` (PNG, JPEG) → RGBA8 |
//! | **Resize** | `imageops::resize` with `Lanczos3` |
//! | **Composite** | solid `RgbaImage` canvas, resized source pasted with its alpha as a per-channel mask |
//! | **Encode PNG** | `PngEncoder`, best compression, adaptive filtering |
//! | **Encode ICO** | `IcoEncoder::encode_images` with PNG frames |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for placement math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: Turns a [`TargetSpec`](crate::targets::TargetSpec) into
//!   parameters and runs them on a backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{Placement, maskable_placement, splash_placement};
pub use operations::{Operation, Palette, plan_operation, run_operation};
pub use params::{IconBundleParams, MaskableParams, ResizeParams, SplashParams};
pub use rust_backend::RustBackend;
