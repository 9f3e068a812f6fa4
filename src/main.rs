use clap::Parser;
use pwa_icons::color::Rgba;
use pwa_icons::config::GenerateOptions;
use pwa_icons::{generate, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "pwa-icons")]
#[command(about = "Generate PWA icons, favicons and splash screens from one image")]
#[command(long_about = "\
Generate PWA icons, favicons and splash screens from one image

Every run rewrites the full set:

  <out>/
  ├── icons/
  │   ├── icon-{72,96,128,144,152,192,384,512}.png   # PWA manifest
  │   ├── apple-touch-icon*.png                      # iOS home screen
  │   ├── mstile-{150,310}.png                       # Windows tiles
  │   ├── favicon-{16,32,48}.png, favicon.ico        # Browser tabs
  │   └── maskable-icon-512x512.png                  # 10% safe zone
  └── splash/
      └── apple-splash-WxH.png                       # iOS launch screens

The maskable icon and splash screens are drawn on a solid background. By
default its color is the average of the source's four corners; use --bg to
set it, and --splash-bg to give splash screens their own color.")]
#[command(version = version_string())]
struct Cli {
    /// Source image (PNG or JPEG, 512x512+ recommended)
    source: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "./assets")]
    out: PathBuf,

    /// Background for maskable icon and splash screens, e.g. '#c8102e' (auto-detected if not set)
    #[arg(long, value_name = "HEX")]
    bg: Option<Rgba>,

    /// Background for splash screens only, e.g. '#090909'
    #[arg(long, value_name = "HEX")]
    splash_bg: Option<Rgba>,

    /// Skip splash screen generation
    #[arg(long)]
    no_splash: bool,

    /// Skip favicon.ico generation
    #[arg(long)]
    no_favicon: bool,

    /// Enable diagnostic logging on stderr (filter with RUST_LOG)
    #[arg(long)]
    log: bool,
}

impl Cli {
    fn options(&self) -> GenerateOptions {
        GenerateOptions {
            output_root: self.out.clone(),
            background: self.bg.into(),
            splash_background: self.splash_bg,
            favicon_bundle: !self.no_favicon,
            splash: !self.no_splash,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.log {
        init_tracing();
    }

    if !cli.source.exists() {
        eprintln!("File not found: {}", cli.source.display());
        std::process::exit(1);
    }

    let options = cli.options();
    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_generate_event(&event);
        }
    });
    let result = generate::generate(&cli.source, &options, Some(tx));
    printer
        .join()
        .map_err(|_| "progress printer thread panicked")?;

    let result = result?;
    output::print_summary(&result, &options.output_root);

    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` wins over the default filter.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pwa_icons=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
