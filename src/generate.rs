//! The generation driver.
//!
//! Loads the source once, resolves canvas colors, then walks the static
//! tables in [`targets`](crate::targets) and runs one backend operation per
//! row:
//!
//! ```text
//! source.png ──load──▶ RgbaImage ──┬── PWA icons        (resize ×8)
//!                                  ├── Apple touch      (resize ×5)
//!                                  ├── Windows tiles    (resize ×2)
//!                                  ├── Favicons         (resize ×3, + favicon.ico)
//!                                  ├── Maskable         (safe-zone composite)
//!                                  └── Splash screens   (logo composite ×9)
//! ```
//!
//! ## Failure Model
//!
//! The first failing asset aborts the run. Files written before it stay on
//! disk; nothing after it is attempted. Every run rewrites every file, so
//! rerunning after fixing the cause leaves a complete set.
//!
//! ## Progress
//!
//! Callers pass an optional channel and receive [`GenerateEvent`]s as work
//! happens. The CLI drains it on a printer thread through
//! [`output::format_generate_event`](crate::output::format_generate_event).

use crate::color::Rgba;
use crate::config::{Background, GenerateOptions};
use crate::imaging::{
    BackendError, ImageBackend, Palette, RustBackend, plan_operation, run_operation,
};
use crate::targets::{Generator, count_targets, plan};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("File not found: {}", .0.display())]
    SourceNotFound(PathBuf),
}

/// Progress notifications, in the order they happen.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    SourceLoaded {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    /// Only sent when the maskable color was auto-detected.
    BackgroundDetected(Rgba),
    GroupStarted {
        title: &'static str,
    },
    AssetWritten {
        name: &'static str,
        generator: Generator,
    },
}

/// One file written by a run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedAsset {
    pub path: PathBuf,
    pub generator: Generator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateResult {
    pub assets: Vec<GeneratedAsset>,
    pub palette: Palette,
    pub source_dimensions: (u32, u32),
}

impl GenerateResult {
    pub fn count(&self) -> usize {
        self.assets.len()
    }
}

/// Sources smaller than this on either edge get upscaled for the largest
/// icons; the CLI warns about it.
pub const RECOMMENDED_SOURCE_SIZE: u32 = 512;

/// Generate every asset for `source` with the pure Rust backend.
pub fn generate(
    source: &Path,
    options: &GenerateOptions,
    progress: Option<Sender<GenerateEvent>>,
) -> Result<GenerateResult, GenerateError> {
    let backend = RustBackend::new();
    generate_with_backend(&backend, source, options, progress)
}

/// Generate using a specific backend (allows testing with mock).
pub fn generate_with_backend(
    backend: &impl ImageBackend,
    source: &Path,
    options: &GenerateOptions,
    progress: Option<Sender<GenerateEvent>>,
) -> Result<GenerateResult, GenerateError> {
    let emit = |event: GenerateEvent| {
        if let Some(tx) = &progress {
            // A dropped receiver only means nobody is listening.
            tx.send(event).ok();
        }
    };

    if !source.exists() {
        return Err(GenerateError::SourceNotFound(source.to_path_buf()));
    }

    let image = backend.load(source)?;
    let (width, height) = image.dimensions();
    info!(source = %source.display(), width, height, "loaded source image");
    if width != height {
        warn!(width, height, "source is not square; icons will be stretched");
    }
    emit(GenerateEvent::SourceLoaded {
        path: source.to_path_buf(),
        width,
        height,
    });

    let palette = options.palette(&image);
    if options.background == Background::Auto {
        debug!(color = %palette.maskable, "auto-detected background");
        emit(GenerateEvent::BackgroundDetected(palette.maskable));
    }

    let groups = plan(options.plan_options());
    debug!(planned = count_targets(&groups), "planned targets");

    let mut assets = Vec::new();
    for group in groups {
        emit(GenerateEvent::GroupStarted { title: group.title });

        for target in group.targets {
            let operation = plan_operation(target, &options.output_root, palette);
            if let Some(parent) = operation.output().parent() {
                std::fs::create_dir_all(parent)?;
            }
            run_operation(backend, &image, &operation)?;
            debug!(output = %operation.output().display(), "wrote asset");

            emit(GenerateEvent::AssetWritten {
                name: target.name,
                generator: target.generator,
            });
            assets.push(GeneratedAsset {
                path: operation.output().to_path_buf(),
                generator: target.generator,
            });
        }
    }

    info!(count = assets.len(), "generation complete");
    Ok(GenerateResult {
        assets,
        palette,
        source_dimensions: (width, height),
    })
}
