//! Static output tables.
//!
//! Every asset the tool writes is listed here: a file name, the subdirectory
//! it lands in, and the generator that produces it. Names and pixel sizes are
//! what web manifests and `<link rel="apple-touch-icon">` tags refer to, so they
//! are fixed rather than derived.
//!
//! ```text
//! <out>/
//! ├── icons/
//! │   ├── icon-72x72.png ... icon-512x512.png     # PWA manifest icons (8)
//! │   ├── apple-touch-icon*.png                   # iOS home screen (5)
//! │   ├── mstile-150x150.png, mstile-310x310.png  # Windows tiles (2)
//! │   ├── favicon-16x16.png ... favicon-48x48.png # Browser tabs (3)
//! │   ├── favicon.ico                             # 16+32+48 bundle
//! │   └── maskable-icon-512x512.png               # Adaptive icon safe zone
//! └── splash/
//!     └── apple-splash-WxH.png                    # iOS launch screens (9)
//! ```

use std::path::{Path, PathBuf};

/// Output subdirectory under the output root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetDir {
    Icons,
    Splash,
}

impl AssetDir {
    pub fn name(self) -> &'static str {
        match self {
            AssetDir::Icons => "icons",
            AssetDir::Splash => "splash",
        }
    }
}

/// Which transform produces an asset, with its target dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// Square resize of the whole source.
    Resize { size: u32 },
    /// Multi-resolution `.ico` container, frames in listed order.
    IconBundle { sizes: &'static [u32] },
    /// Source inset by a 10% safe zone on a solid canvas.
    Maskable { size: u32 },
    /// Logo centered (slightly high) on a solid canvas.
    Splash { width: u32, height: u32 },
}

impl Generator {
    /// Pixel dimensions of the written image. For bundles, the largest frame.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Generator::Resize { size } | Generator::Maskable { size } => (size, size),
            Generator::IconBundle { sizes } => {
                let max = sizes.iter().copied().max().unwrap_or(0);
                (max, max)
            }
            Generator::Splash { width, height } => (width, height),
        }
    }
}

/// One row of a static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSpec {
    pub name: &'static str,
    pub dir: AssetDir,
    pub generator: Generator,
}

impl TargetSpec {
    const fn icon(name: &'static str, size: u32) -> Self {
        Self {
            name,
            dir: AssetDir::Icons,
            generator: Generator::Resize { size },
        }
    }

    const fn splash(name: &'static str, width: u32, height: u32) -> Self {
        Self {
            name,
            dir: AssetDir::Splash,
            generator: Generator::Splash { width, height },
        }
    }

    /// Path relative to the output root, e.g. `icons/icon-72x72.png`.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(self.dir.name()).join(self.name)
    }
}

/// A named group of targets, printed as one section of progress output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetGroup {
    pub title: &'static str,
    pub targets: &'static [TargetSpec],
}

pub const PWA_ICONS: &[TargetSpec] = &[
    TargetSpec::icon("icon-72x72.png", 72),
    TargetSpec::icon("icon-96x96.png", 96),
    TargetSpec::icon("icon-128x128.png", 128),
    TargetSpec::icon("icon-144x144.png", 144),
    TargetSpec::icon("icon-152x152.png", 152),
    TargetSpec::icon("icon-192x192.png", 192),
    TargetSpec::icon("icon-384x384.png", 384),
    TargetSpec::icon("icon-512x512.png", 512),
];

pub const APPLE_TOUCH_ICONS: &[TargetSpec] = &[
    TargetSpec::icon("apple-touch-icon.png", 180),
    TargetSpec::icon("apple-touch-icon-120x120.png", 120),
    TargetSpec::icon("apple-touch-icon-152x152.png", 152),
    TargetSpec::icon("apple-touch-icon-167x167.png", 167),
    TargetSpec::icon("apple-touch-icon-180x180.png", 180),
];

pub const WINDOWS_TILES: &[TargetSpec] = &[
    TargetSpec::icon("mstile-150x150.png", 150),
    TargetSpec::icon("mstile-310x310.png", 310),
];

pub const FAVICONS: &[TargetSpec] = &[
    TargetSpec::icon("favicon-16x16.png", 16),
    TargetSpec::icon("favicon-32x32.png", 32),
    TargetSpec::icon("favicon-48x48.png", 48),
];

/// Frame sizes embedded in `favicon.ico`.
pub const FAVICON_BUNDLE_SIZES: &[u32] = &[16, 32, 48];

pub const FAVICON_BUNDLE: TargetSpec = TargetSpec {
    name: "favicon.ico",
    dir: AssetDir::Icons,
    generator: Generator::IconBundle {
        sizes: FAVICON_BUNDLE_SIZES,
    },
};

pub const MASKABLE_ICON: TargetSpec = TargetSpec {
    name: "maskable-icon-512x512.png",
    dir: AssetDir::Icons,
    generator: Generator::Maskable { size: 512 },
};

pub const SPLASH_SCREENS: &[TargetSpec] = &[
    TargetSpec::splash("apple-splash-750x1334.png", 750, 1334), // iPhone 8
    TargetSpec::splash("apple-splash-1125x2436.png", 1125, 2436), // iPhone X / XS
    TargetSpec::splash("apple-splash-1170x2532.png", 1170, 2532), // iPhone 12-14
    TargetSpec::splash("apple-splash-1179x2556.png", 1179, 2556), // iPhone 15 / 16
    TargetSpec::splash("apple-splash-1284x2778.png", 1284, 2778), // iPhone 12/13 Pro Max
    TargetSpec::splash("apple-splash-1290x2796.png", 1290, 2796), // iPhone 15 Pro Max
    TargetSpec::splash("apple-splash-1536x2048.png", 1536, 2048), // iPad Air / Mini
    TargetSpec::splash("apple-splash-1668x2388.png", 1668, 2388), // iPad Pro 11"
    TargetSpec::splash("apple-splash-2048x2732.png", 2048, 2732), // iPad Pro 12.9"
];

/// Which optional groups a run includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOptions {
    pub favicon_bundle: bool,
    pub splash: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            favicon_bundle: true,
            splash: true,
        }
    }
}

/// The ordered list of groups for a run.
///
/// The bundle joins the favicon section rather than forming its own, so the
/// favicon group comes in two shapes.
pub fn plan(options: PlanOptions) -> Vec<TargetGroup> {
    const FAVICONS_WITH_BUNDLE: &[TargetSpec] = &[
        FAVICONS[0],
        FAVICONS[1],
        FAVICONS[2],
        FAVICON_BUNDLE,
    ];
    const MASKABLE: &[TargetSpec] = &[MASKABLE_ICON];

    let mut groups = vec![
        TargetGroup {
            title: "PWA Icons",
            targets: PWA_ICONS,
        },
        TargetGroup {
            title: "Apple Touch Icons",
            targets: APPLE_TOUCH_ICONS,
        },
        TargetGroup {
            title: "Windows Tiles",
            targets: WINDOWS_TILES,
        },
        TargetGroup {
            title: "Favicons",
            targets: if options.favicon_bundle {
                FAVICONS_WITH_BUNDLE
            } else {
                FAVICONS
            },
        },
        TargetGroup {
            title: "Maskable Icon",
            targets: MASKABLE,
        },
    ];

    if options.splash {
        groups.push(TargetGroup {
            title: "Splash Screens",
            targets: SPLASH_SCREENS,
        });
    }

    groups
}

/// Total number of files a plan writes.
pub fn count_targets(groups: &[TargetGroup]) -> usize {
    groups.iter().map(|g| g.targets.len()).sum()
}
