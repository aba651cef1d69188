use assert_cmd::Command;
use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

fn icongen(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("test-icongen").unwrap();
    cmd.env("ICONGEN_PROJECT_ROOT", root).env_remove("ICONGEN_LOG");
    cmd
}

fn write_logo(root: &Path) {
    let source = root.join("assets/images/logo.jpg");
    std::fs::create_dir_all(source.parent().unwrap()).unwrap();
    RgbImage::from_pixel(256, 256, Rgb([200, 40, 40]))
        .save_with_format(source, ImageFormat::Jpeg)
        .unwrap();
}

#[test]
fn should_print_progress_and_success_banner() {
    let dir = tempfile::tempdir().unwrap();
    write_logo(dir.path());

    let output = icongen(dir.path()).assert().success().get_output().clone();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        [
            "Created: web/favicon.png (16x16)",
            "Created: web/icons/Icon-192.png (192x192)",
            "Created: web/icons/Icon-512.png (512x512)",
            "Created: web/icons/Icon-maskable-192.png (192x192)",
            "Created: web/icons/Icon-maskable-512.png (512x512)",
            "✅ Logo conversion completed successfully!",
            "All web icons have been generated from your logo.",
        ]
    );
    assert!(dir.path().join("web/icons/Icon-maskable-512.png").is_file());
}

#[test]
fn should_exit_normally_when_logo_is_missing() {
    let dir = tempfile::tempdir().unwrap();

    let output = icongen(dir.path()).assert().success().get_output().clone();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let expected = format!(
        "❌ Error: logo.jpg not found in assets/images/\n\
         Please make sure your logo file exists at: {}\n",
        dir.path().join("assets/images/logo.jpg").display()
    );
    assert_eq!(stdout, expected);
    assert!(!dir.path().join("web").exists());
}

#[test]
fn should_report_conversion_error_text() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("assets/images/logo.jpg");
    std::fs::create_dir_all(source.parent().unwrap()).unwrap();
    std::fs::write(&source, b"garbage").unwrap();

    let output = icongen(dir.path()).assert().success().get_output().clone();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(
        stdout.starts_with("❌ Error converting logo: failed to decode"),
        "{}",
        stdout
    );
}

#[test]
fn should_reject_invalid_log_level() {
    let dir = tempfile::tempdir().unwrap();

    icongen(dir.path())
        .env("ICONGEN_LOG", "loud")
        .assert()
        .failure();
}
