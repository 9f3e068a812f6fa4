//! Run configuration.
//!
//! Everything a run needs besides the source path: where to write, which
//! optional groups to produce, and how to pick canvas colors. The CLI builds a
//! [`GenerateOptions`] from its flags; library callers can start from
//! [`GenerateOptions::default`] and override fields.
//!
//! ## Defaults
//!
//! ```text
//! output root:     ./assets
//! background:      auto-detected from the source corners
//! splash bg:       same as background
//! favicon.ico:     generated
//! splash screens:  generated
//! ```
//!
//! ## Canvas Colors
//!
//! Two composites need a canvas color. The maskable icon uses `background`.
//! Splash screens use `splash_background` when set, otherwise they share the
//! maskable color, so a single `--bg` recolors both.

use crate::color::{Rgba, detect_background};
use crate::imaging::Palette;
use crate::targets::PlanOptions;
use image::RgbaImage;
use std::path::PathBuf;

/// Where a canvas color comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    /// Average of the four inset corner pixels of the source.
    #[default]
    Auto,
    Fixed(Rgba),
}

impl Background {
    pub fn resolve(self, source: &RgbaImage) -> Rgba {
        match self {
            Background::Auto => detect_background(source),
            Background::Fixed(color) => color,
        }
    }
}

impl From<Option<Rgba>> for Background {
    fn from(color: Option<Rgba>) -> Self {
        color.map_or(Background::Auto, Background::Fixed)
    }
}

/// Options for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    /// Output root; `icons/` and `splash/` are created beneath it.
    pub output_root: PathBuf,
    /// Canvas color for the maskable icon (and splash, unless overridden).
    pub background: Background,
    /// Canvas color for splash screens only.
    pub splash_background: Option<Rgba>,
    /// Write `icons/favicon.ico`.
    pub favicon_bundle: bool,
    /// Write the `splash/` screens.
    pub splash: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("./assets"),
            background: Background::Auto,
            splash_background: None,
            favicon_bundle: true,
            splash: true,
        }
    }
}

impl GenerateOptions {
    pub fn plan_options(&self) -> PlanOptions {
        PlanOptions {
            favicon_bundle: self.favicon_bundle,
            splash: self.splash,
        }
    }

    /// Resolve both canvas colors against the loaded source.
    pub fn palette(&self, source: &RgbaImage) -> Palette {
        let maskable = self.background.resolve(source);
        Palette {
            maskable,
            splash: self.splash_background.unwrap_or(maskable),
        }
    }
}
