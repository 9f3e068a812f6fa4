//! High-level image operations.
//!
//! These functions combine calculations with backend execution. They take a
//! [`TargetSpec`] row, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{maskable_placement, splash_placement};
use super::params::{IconBundleParams, MaskableParams, ResizeParams, SplashParams};
use crate::color::Rgba;
use crate::targets::{Generator, TargetSpec};
use image::RgbaImage;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Canvas colors for the composite generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub maskable: Rgba,
    pub splash: Rgba,
}

/// A fully parameterized backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Resize(ResizeParams),
    IconBundle(IconBundleParams),
    Maskable(MaskableParams),
    Splash(SplashParams),
}

impl Operation {
    pub fn output(&self) -> &Path {
        match self {
            Operation::Resize(p) => &p.output,
            Operation::IconBundle(p) => &p.output,
            Operation::Maskable(p) => &p.output,
            Operation::Splash(p) => &p.output,
        }
    }
}

/// Plan the backend call for one target without executing it.
///
/// Useful for testing parameter generation.
pub fn plan_operation(target: &TargetSpec, output_root: &Path, palette: Palette) -> Operation {
    let output = output_root.join(target.relative_path());

    match target.generator {
        Generator::Resize { size } => Operation::Resize(ResizeParams { output, size }),
        Generator::IconBundle { sizes } => Operation::IconBundle(IconBundleParams {
            output,
            sizes: sizes.to_vec(),
        }),
        Generator::Maskable { size } => Operation::Maskable(MaskableParams {
            output,
            canvas: size,
            background: palette.maskable,
            content: maskable_placement(size),
        }),
        Generator::Splash { width, height } => Operation::Splash(SplashParams {
            output,
            width,
            height,
            background: palette.splash,
            logo: splash_placement(width, height),
        }),
    }
}

/// Execute a planned operation against the decoded source.
pub fn run_operation(
    backend: &impl ImageBackend,
    source: &RgbaImage,
    operation: &Operation,
) -> Result<()> {
    match operation {
        Operation::Resize(p) => backend.resize(source, p),
        Operation::IconBundle(p) => backend.icon_bundle(source, p),
        Operation::Maskable(p) => backend.maskable(source, p),
        Operation::Splash(p) => backend.splash(source, p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Placement;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use crate::targets::{FAVICON_BUNDLE, MASKABLE_ICON, PWA_ICONS, SPLASH_SCREENS};

    const PALETTE: Palette = Palette {
        maskable: Rgba::opaque(200, 16, 46),
        splash: Rgba::opaque(9, 9, 9),
    };

    #[test]
    fn plan_resize_joins_output_root() {
        let op = plan_operation(&PWA_ICONS[0], Path::new("/out"), PALETTE);
        assert_eq!(
            op,
            Operation::Resize(ResizeParams {
                output: Path::new("/out/icons/icon-72x72.png").to_path_buf(),
                size: 72,
            })
        );
    }

    #[test]
    fn plan_bundle_keeps_frame_order() {
        let op = plan_operation(&FAVICON_BUNDLE, Path::new("/out"), PALETTE);
        let Operation::IconBundle(params) = op else {
            panic!("expected icon bundle, got {op:?}");
        };
        assert_eq!(params.sizes, [16, 32, 48]);
        assert!(params.output.ends_with("icons/favicon.ico"));
    }

    #[test]
    fn plan_maskable_uses_maskable_color_and_safe_zone() {
        let op = plan_operation(&MASKABLE_ICON, Path::new("/out"), PALETTE);
        let Operation::Maskable(params) = op else {
            panic!("expected maskable, got {op:?}");
        };
        assert_eq!(params.canvas, 512);
        assert_eq!(params.background, PALETTE.maskable);
        assert_eq!(
            params.content,
            Placement {
                x: 51,
                y: 51,
                size: 410
            }
        );
    }

    #[test]
    fn plan_splash_uses_splash_color() {
        let op = plan_operation(&SPLASH_SCREENS[0], Path::new("/out"), PALETTE);
        let Operation::Splash(params) = op else {
            panic!("expected splash, got {op:?}");
        };
        assert_eq!((params.width, params.height), (750, 1334));
        assert_eq!(params.background, PALETTE.splash);
        assert!(params.output.ends_with("splash/apple-splash-750x1334.png"));
    }

    #[test]
    fn run_dispatches_to_matching_backend_call() {
        let backend = MockBackend::new();
        let source = RgbaImage::new(8, 8);

        for target in [&PWA_ICONS[1], &FAVICON_BUNDLE, &MASKABLE_ICON, &SPLASH_SCREENS[8]] {
            let op = plan_operation(target, Path::new("/out"), PALETTE);
            run_operation(&backend, &source, &op).unwrap();
        }

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 4);
        assert!(matches!(&ops[0], RecordedOp::Resize { size: 96, .. }));
        assert!(matches!(&ops[1], RecordedOp::IconBundle { sizes, .. } if sizes == &[16, 32, 48]));
        assert!(matches!(&ops[2], RecordedOp::Maskable { canvas: 512, .. }));
        assert!(matches!(
            &ops[3],
            RecordedOp::Splash {
                width: 2048,
                height: 2732,
                ..
            }
        ));
    }
}
