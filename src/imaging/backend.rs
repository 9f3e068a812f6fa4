//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the five operations every backend must
//! support: load, resize, icon_bundle, maskable, and splash.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, everything
//! statically linked into the binary.

use super::params::{IconBundleParams, MaskableParams, ResizeParams, SplashParams};
use image::RgbaImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for image processing backends.
///
/// Generators take the already-decoded source so it is read from disk once
/// per run, however many assets are derived from it.
pub trait ImageBackend {
    /// Decode an image file into RGBA8.
    fn load(&self, path: &Path) -> Result<RgbaImage, BackendError>;

    /// Resize the source to a square and write it.
    fn resize(&self, source: &RgbaImage, params: &ResizeParams) -> Result<(), BackendError>;

    /// Write a multi-resolution icon container.
    fn icon_bundle(
        &self,
        source: &RgbaImage,
        params: &IconBundleParams,
    ) -> Result<(), BackendError>;

    /// Composite the source into the safe zone of a solid canvas and write it.
    fn maskable(&self, source: &RgbaImage, params: &MaskableParams) -> Result<(), BackendError>;

    /// Composite the source as a logo on a solid splash canvas and write it.
    fn splash(&self, source: &RgbaImage, params: &SplashParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::imaging::calculations::Placement;
    use std::sync::Mutex;

    /// Mock backend that records operations without executing them.
    #[derive(Default)]
    pub struct MockBackend {
        pub source: Mutex<Option<RgbaImage>>,
        pub operations: Mutex<Vec<RecordedOp>>,
        /// Output file name that makes the backend fail, for abort tests.
        pub fail_on: Option<String>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Load(String),
        Resize {
            output: String,
            size: u32,
        },
        IconBundle {
            output: String,
            sizes: Vec<u32>,
        },
        Maskable {
            output: String,
            canvas: u32,
            background: Rgba,
            content: Placement,
        },
        Splash {
            output: String,
            width: u32,
            height: u32,
            background: Rgba,
            logo: Placement,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// A backend whose `load` yields `img`.
        pub fn with_source(img: RgbaImage) -> Self {
            Self {
                source: Mutex::new(Some(img)),
                ..Self::default()
            }
        }

        pub fn failing_on(mut self, file_name: &str) -> Self {
            self.fail_on = Some(file_name.to_string());
            self
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }

        fn record(&self, output: &Path, op: RecordedOp) -> Result<(), BackendError> {
            let name = output.file_name().map(|n| n.to_string_lossy().into_owned());
            if name.is_some() && name == self.fail_on {
                return Err(BackendError::ProcessingFailed(format!(
                    "mock failure for {}",
                    output.display()
                )));
            }
            self.operations.lock().unwrap().push(op);
            Ok(())
        }
    }

    fn path_string(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }

    impl ImageBackend for MockBackend {
        fn load(&self, path: &Path) -> Result<RgbaImage, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Load(path_string(path)));

            self.source
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| BackendError::ProcessingFailed("No mock source".to_string()))
        }

        fn resize(&self, _source: &RgbaImage, params: &ResizeParams) -> Result<(), BackendError> {
            self.record(
                &params.output,
                RecordedOp::Resize {
                    output: path_string(&params.output),
                    size: params.size,
                },
            )
        }

        fn icon_bundle(
            &self,
            _source: &RgbaImage,
            params: &IconBundleParams,
        ) -> Result<(), BackendError> {
            self.record(
                &params.output,
                RecordedOp::IconBundle {
                    output: path_string(&params.output),
                    sizes: params.sizes.clone(),
                },
            )
        }

        fn maskable(&self, _source: &RgbaImage, params: &MaskableParams) -> Result<(), BackendError> {
            self.record(
                &params.output,
                RecordedOp::Maskable {
                    output: path_string(&params.output),
                    canvas: params.canvas,
                    background: params.background,
                    content: params.content,
                },
            )
        }

        fn splash(&self, _source: &RgbaImage, params: &SplashParams) -> Result<(), BackendError> {
            self.record(
                &params.output,
                RecordedOp::Splash {
                    output: path_string(&params.output),
                    width: params.width,
                    height: params.height,
                    background: params.background,
                    logo: params.logo,
                },
            )
        }
    }

    #[test]
    fn mock_records_load() {
        let backend = MockBackend::with_source(RgbaImage::new(4, 4));

        let img = backend.load(Path::new("/test/logo.png")).unwrap();
        assert_eq!(img.dimensions(), (4, 4));

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Load(p) if p == "/test/logo.png"));
    }

    #[test]
    fn mock_load_without_source_errors() {
        let backend = MockBackend::new();
        assert!(backend.load(Path::new("/missing.png")).is_err());
    }

    #[test]
    fn mock_records_resize() {
        let backend = MockBackend::new();

        backend
            .resize(
                &RgbaImage::new(1, 1),
                &ResizeParams {
                    output: "/out/icon-72x72.png".into(),
                    size: 72,
                },
            )
            .unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Resize { size: 72, .. }));
    }

    #[test]
    fn mock_fails_on_named_output() {
        let backend = MockBackend::new().failing_on("bad.png");

        let result = backend.resize(
            &RgbaImage::new(1, 1),
            &ResizeParams {
                output: "/out/bad.png".into(),
                size: 16,
            },
        );
        assert!(result.is_err());
        assert!(backend.get_operations().is_empty());
    }
}
