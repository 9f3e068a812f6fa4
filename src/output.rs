//! CLI output formatting.
//!
//! # Output Format
//!
//! ```text
//! Source: logo.png
//!     Size: 1024x1024
//!     Background: #c8102e (auto-detected)
//!
//! PWA Icons
//!     icon-72x72.png (72x72)
//!     ...
//!
//! Favicons
//!     favicon-16x16.png (16x16)
//!     ...
//!     favicon.ico (16+32+48)
//!
//! Maskable Icon
//!     maskable-icon-512x512.png (512x512, safe zone)
//!
//! Generated 29 files → /home/me/app/assets
//! ```
//!
//! # Architecture
//!
//! Each event has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::generate::{GenerateEvent, GenerateResult, RECOMMENDED_SOURCE_SIZE};
use crate::targets::Generator;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Describe what was written: its pixel size, plus frames or safe zone where
/// that matters.
fn asset_detail(generator: &Generator) -> String {
    match generator {
        Generator::Resize { size } => format!("{size}x{size}"),
        Generator::IconBundle { sizes } => sizes
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join("+"),
        Generator::Maskable { size } => format!("{size}x{size}, safe zone"),
        Generator::Splash { width, height } => format!("{width}x{height}"),
    }
}

/// Format a single progress event as display lines.
pub fn format_generate_event(event: &GenerateEvent) -> Vec<String> {
    match event {
        GenerateEvent::SourceLoaded {
            path,
            width,
            height,
        } => {
            let mut lines = vec![
                format!("Source: {}", path.display()),
                format!("{}Size: {}x{}", indent(1), width, height),
            ];
            if *width < RECOMMENDED_SOURCE_SIZE || *height < RECOMMENDED_SOURCE_SIZE {
                lines.push(format!(
                    "{}Warning: source is {}x{}, {}x{}+ recommended for best quality",
                    indent(1),
                    width,
                    height,
                    RECOMMENDED_SOURCE_SIZE,
                    RECOMMENDED_SOURCE_SIZE
                ));
            }
            lines
        }
        GenerateEvent::BackgroundDetected(color) => {
            vec![format!("{}Background: {} (auto-detected)", indent(1), color)]
        }
        GenerateEvent::GroupStarted { title } => vec![String::new(), title.to_string()],
        GenerateEvent::AssetWritten { name, generator } => {
            vec![format!("{}{} ({})", indent(1), name, asset_detail(generator))]
        }
    }
}

/// Format the closing summary line.
pub fn format_summary(result: &GenerateResult, output_root: &Path) -> Vec<String> {
    let root = std::path::absolute(output_root).unwrap_or_else(|_| output_root.to_path_buf());
    let noun = if result.count() == 1 { "file" } else { "files" };
    vec![
        String::new(),
        format!("Generated {} {} → {}", result.count(), noun, root.display()),
    ]
}

/// Print a progress event to stdout.
pub fn print_generate_event(event: &GenerateEvent) {
    for line in format_generate_event(event) {
        println!("{}", line);
    }
}

/// Print the summary to stdout.
pub fn print_summary(result: &GenerateResult, output_root: &Path) {
    for line in format_summary(result, output_root) {
        println!("{}", line);
    }
}
