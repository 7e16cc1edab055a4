//! Shared test utilities for the civic-site test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let project = setup_project();
//! let out = TempDir::new().unwrap();
//! generate(&SiteConfig::default(), project.path(), out.path()).unwrap();
//!
//! let html = read_output(out.path(), "about/index.html");
//! assert_single(&html, "<title>");
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

// =========================================================================
// Fixture setup
// =========================================================================

/// A project root with a small `public/` directory:
///
/// ```text
/// public/
/// ├── images/hero-bg.jpg     # 16x9 critical image
/// ├── images/logo.png
/// └── robots.txt
/// ```
///
/// `images/team-working.jpg` is deliberately absent so preload failures
/// can be observed.
pub fn setup_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let images = tmp.path().join("public/images");
    fs::create_dir_all(&images).unwrap();

    image::RgbImage::from_pixel(16, 9, image::Rgb([29, 78, 137]))
        .save(images.join("hero-bg.jpg"))
        .unwrap();
    image::RgbImage::new(4, 4).save(images.join("logo.png")).unwrap();
    fs::write(tmp.path().join("public/robots.txt"), "User-agent: *\n").unwrap();
    tmp
}

/// Write `config.toml` into a project root.
pub fn write_config(root: &Path, body: &str) {
    fs::write(root.join("config.toml"), body).unwrap();
}

// =========================================================================
// Output lookups: panic with a clear message on miss
// =========================================================================

/// Read a generated file. Panics with the list of generated files if missing.
pub fn read_output(output_dir: &Path, relative: &str) -> String {
    let path = output_dir.join(relative);
    fs::read_to_string(&path).unwrap_or_else(|err| {
        let files: Vec<String> = walkdir::WalkDir::new(output_dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().strip_prefix(output_dir).unwrap().display().to_string())
            .collect();
        panic!("cannot read {relative}: {err}. Generated: {files:?}")
    })
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert `needle` occurs exactly once in `html`.
pub fn assert_single(html: &str, needle: &str) {
    let count = html.matches(needle).count();
    assert_eq!(count, 1, "expected exactly one {needle:?}, found {count}");
}
