//! Pure calculation functions for asset layout.
//!
//! All functions here are pure and testable without any I/O or images.

/// A square logo placed on a canvas. `x`/`y` are the top-left corner and may
/// be negative when the logo overhangs the canvas edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
    pub size: u32,
}

/// Safe-zone padding for a maskable icon: 10% of the canvas per side.
///
/// Adaptive icon masks (circle, squircle, teardrop) may crop anything
/// outside the central 80%.
pub fn maskable_padding(canvas: u32) -> u32 {
    canvas / 10
}

/// Where the source goes on an N×N maskable canvas.
///
/// # Examples
/// ```
/// # use pwa_icons::imaging::{maskable_placement, Placement};
/// // 512 canvas → 51px padding, 410px content
/// assert_eq!(maskable_placement(512), Placement { x: 51, y: 51, size: 410 });
/// ```
pub fn maskable_placement(canvas: u32) -> Placement {
    let padding = maskable_padding(canvas);
    Placement {
        x: i64::from(padding),
        y: i64::from(padding),
        size: canvas - 2 * padding,
    }
}

/// Where the logo goes on a `width`×`height` splash screen.
///
/// The logo is a square a quarter of the shorter edge, centered horizontally
/// and raised by `height / 20` from vertical center so it clears the status
/// bar optically.
///
/// # Examples
/// ```
/// # use pwa_icons::imaging::{splash_placement, Placement};
/// // iPhone 8: logo 187px at (281, 507)
/// assert_eq!(splash_placement(750, 1334), Placement { x: 281, y: 507, size: 187 });
/// ```
pub fn splash_placement(width: u32, height: u32) -> Placement {
    let size = width.min(height) / 4;
    let x = (i64::from(width) - i64::from(size)) / 2;
    let y = (i64::from(height) - i64::from(size)).div_euclid(2) - i64::from(height / 20);
    Placement { x, y, size }
}
