//! Runs the compiled binary to check flags, output and exit codes.

use image::{Rgba, RgbaImage};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn pwa_icons(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pwa-icons"))
        .args(args)
        .current_dir(cwd)
        .output()
        .unwrap()
}

fn write_logo(dir: &Path, size: u32) {
    RgbaImage::from_pixel(size, size, Rgba([0, 128, 0, 255]))
        .save(dir.join("logo.png"))
        .unwrap();
}

#[test]
fn missing_source_exits_with_1() {
    let tmp = TempDir::new().unwrap();
    let out = pwa_icons(&["nope.png"], tmp.path());

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("File not found: nope.png"));
    assert!(!tmp.path().join("assets").exists());
}

#[test]
fn malformed_bg_is_a_usage_error() {
    let tmp = TempDir::new().unwrap();
    write_logo(tmp.path(), 32);
    let out = pwa_icons(&["logo.png", "--bg", "#12345"], tmp.path());

    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid hex color"));
    assert!(!tmp.path().join("assets").exists());
}

#[test]
fn no_splash_run_reports_progress_and_count() {
    let tmp = TempDir::new().unwrap();
    write_logo(tmp.path(), 64);
    let out = pwa_icons(&["logo.png", "-o", "web", "--no-splash"], tmp.path());

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Source: logo.png"));
    assert!(stdout.contains("Warning: source is 64x64"));
    assert!(stdout.contains("Background: #008000 (auto-detected)"));
    assert!(stdout.contains("favicon.ico (16+32+48)"));
    assert!(!stdout.contains("Splash Screens"));
    assert!(stdout.contains("Generated 20 files"));

    assert!(tmp.path().join("web/icons/icon-192x192.png").is_file());
    assert!(!tmp.path().join("web/splash").exists());
}

#[test]
fn explicit_bg_suppresses_detection() {
    let tmp = TempDir::new().unwrap();
    write_logo(tmp.path(), 32);
    let out = pwa_icons(
        &["logo.png", "--bg", "ffffff", "--no-splash", "--no-favicon"],
        tmp.path(),
    );

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("auto-detected"));
    assert!(stdout.contains("Generated 19 files"));
    assert!(!tmp.path().join("assets/icons/favicon.ico").exists());
}

#[test]
fn splash_bg_colors_only_splash_canvas() {
    let tmp = TempDir::new().unwrap();
    write_logo(tmp.path(), 32);
    let out = pwa_icons(
        &["logo.png", "--splash-bg", "090909", "--no-favicon"],
        tmp.path(),
    );

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let assets = tmp.path().join("assets");
    let splash = image::open(assets.join("splash/apple-splash-750x1334.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(splash.get_pixel(0, 0).0, [9, 9, 9, 255]);

    let maskable = image::open(assets.join("icons/maskable-icon-512x512.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(maskable.get_pixel(0, 0).0, [0, 128, 0, 255]);
}

#[test]
fn undecodable_source_fails() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("logo.png"), b"not a png").unwrap();
    let out = pwa_icons(&["logo.png"], tmp.path());

    assert_eq!(out.status.code(), Some(1));
    assert!(!tmp.path().join("assets/icons").exists());
}
