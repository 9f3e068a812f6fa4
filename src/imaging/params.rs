//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides what images to create) and the [`backend`](super::backend)
//! (which does the actual pixel work). This separation allows swapping backends
//! (e.g. for testing with a mock) without changing operation logic.
//!
//! ## Types
//!
//! - [`ResizeParams`] — square resize of the source.
//! - [`IconBundleParams`] — frame sizes for a multi-resolution `.ico`.
//! - [`MaskableParams`] — canvas size, background and inner placement.
//! - [`SplashParams`] — canvas dimensions, background and logo placement.

use super::calculations::Placement;
use crate::color::Rgba;
use std::path::PathBuf;

/// Parameters for a plain square resize.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub output: PathBuf,
    pub size: u32,
}

/// Parameters for a multi-resolution icon container.
#[derive(Debug, Clone, PartialEq)]
pub struct IconBundleParams {
    pub output: PathBuf,
    /// Frame edge lengths, embedded in this order.
    pub sizes: Vec<u32>,
}

/// Parameters for a safe-zone composite.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskableParams {
    pub output: PathBuf,
    pub canvas: u32,
    pub background: Rgba,
    pub content: Placement,
}

/// Parameters for a splash-screen composite.
#[derive(Debug, Clone, PartialEq)]
pub struct SplashParams {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub background: Rgba,
    pub logo: Placement,
}
