//! Background colors: hex parsing and corner-sampling detection.
//!
//! Maskable icons and splash screens are composited onto a solid canvas. The
//! canvas color either comes from the command line (`--bg`, `--splash-bg`) or
//! is guessed from the source image itself by [`detect_background`].
//!
//! ```text
//! "#c8102e"   → Rgba { r: 200, g: 16, b: 46, a: 255 }
//! "c8102e80"  → Rgba { r: 200, g: 16, b: 46, a: 128 }
//! ```

use image::RgbaImage;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid hex color: {0} (expected 6 or 8 hex digits, e.g. #c8102e)")]
    InvalidFormat(String),
}

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `rrggbb` or `rrggbbaa`, with or without a leading `#`.
    ///
    /// The six-digit form is fully opaque.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let invalid = || ColorError::InvalidFormat(input.to_string());

        if !(digits.len() == 6 || digits.len() == 8)
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if digits.len() == 8 { channel(6)? } else { 255 },
        })
    }

    /// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgba> for image::Rgba<u8> {
    fn from(c: Rgba) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

impl From<image::Rgba<u8>> for Rgba {
    fn from(p: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Self { r, g, b, a }
    }
}

/// Distance from each edge at which corners are sampled. Anti-aliased or
/// bordered sources often carry a stray outermost row.
const CORNER_INSET: u32 = 2;

/// The four sample coordinates used by [`detect_background`].
///
/// Clamped into the image so that sources narrower than `2 * CORNER_INSET + 1`
/// still sample real pixels.
pub fn corner_samples(width: u32, height: u32) -> [(u32, u32); 4] {
    let near = |len: u32| CORNER_INSET.min(len.saturating_sub(1));
    let far = |len: u32| len.saturating_sub(CORNER_INSET + 1);
    [
        (near(width), near(height)),
        (far(width), near(height)),
        (near(width), far(height)),
        (far(width), far(height)),
    ]
}

/// Guess the background color by averaging the four inset corner pixels.
///
/// Each channel is averaged independently with floor division. This is a
/// heuristic: a logo that touches its corners produces a blend, not the
/// "real" background.
pub fn detect_background(img: &RgbaImage) -> Rgba {
    let samples = corner_samples(img.width(), img.height());
    let mut sums = [0u32; 4];
    for &(x, y) in &samples {
        for (sum, value) in sums.iter_mut().zip(img.get_pixel(x, y).0) {
            *sum += u32::from(value);
        }
    }
    let avg = |sum: u32| (sum / samples.len() as u32) as u8;
    Rgba {
        r: avg(sums[0]),
        g: avg(sums[1]),
        b: avg(sums[2]),
        a: avg(sums[3]),
    }
}
