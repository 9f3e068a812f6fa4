//! # pwa-icons
//!
//! Turns one source image into the full set of raster assets a web app
//! manifest and its HTML `<head>` refer to: PWA icons, Apple touch icons,
//! Windows tiles, favicons (PNG and a multi-size `.ico`), a maskable icon and
//! iOS splash screens.
//!
//! # Pipeline
//!
//! ```text
//! 1. Load      source.png  →  RGBA8 buffer        (decoded once)
//! 2. Colors    buffer      →  Palette             (--bg / --splash-bg or corner average)
//! 3. Generate  tables      →  <out>/icons, <out>/splash
//! ```
//!
//! There is no state between runs: every run rewrites every file, and the
//! same input and flags produce byte-identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`targets`] | Static tables of output names, directories and dimensions |
//! | [`color`] | `Rgba` hex parsing and corner-sampling background detection |
//! | [`config`] | [`GenerateOptions`](config::GenerateOptions): output root, toggles, canvas colors |
//! | [`imaging`] | Backend trait, pure Rust backend, placement math |
//! | [`generate`] | The driver: load, resolve colors, write every target |
//! | [`output`] | CLI output formatting for progress events and the summary |
//!
//! # Design Decisions
//!
//! ## Fixed Tables
//!
//! File names and sizes are what manifests, `<link>` tags and platform
//! conventions already expect, so they are constants in [`targets`] rather
//! than configuration. A drop-in replacement must reproduce them exactly.
//!
//! ## Pure-Rust Imaging
//!
//! Decoding, Lanczos3 resampling, alpha compositing and PNG/ICO encoding all
//! come from the `image` crate. No ImageMagick, no system libraries: the binary
//! is self-contained.
//!
//! ## Abort on First Error
//!
//! A failed asset stops the run. The set is regenerated in full every time,
//! so there is nothing to reconcile afterwards; fix the cause and rerun.

pub mod color;
pub mod config;
pub mod generate;
pub mod imaging;
pub mod output;
pub mod targets;

#[cfg(test)]
pub(crate) mod test_helpers;
