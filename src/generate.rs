//! Static site generation.
//!
//! Renders every route to HTML, writes the stylesheet and script, and copies
//! the public directory into the output root.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                      # Home
//! ├── about/index.html
//! ├── services/index.html
//! ├── portfolio/index.html
//! ├── contact/index.html
//! ├── team/
//! │   ├── fionn-hourican/index.html   # One per team member
//! │   └── ...
//! ├── 404.html                        # Unknown /team/{id} → /about
//! ├── assets/
//! │   ├── site-3f2a9c1e0b7d4a65.css   # Fingerprinted stylesheet
//! │   └── site.js
//! └── images/...                      # Copied from public_dir
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors injected from config)
//! - `static/site.js`: Mobile menu, image load state, breadcrumb anchors,
//!   unknown team member redirect
//!
//! The stylesheet name carries the first 16 hex digits of its SHA-256 so it
//! can be cached indefinitely. The script name is stable.
//!
//! ## Concurrency
//!
//! The critical-image dimension read and page rendering both run on the rayon pool.
//! Each page renders into its own [`Head`](crate::head::Head), so nothing
//! mutable is shared between threads.

use crate::config::{self, SiteConfig};
use crate::layout::Chrome;
use crate::pages::{self, PageContext};
use crate::responsive::{PreloadedImage, preload_critical_images};
use crate::routes::{NOT_FOUND_FILE, Route};
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to walk public directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Path {} is outside the public directory", .0.display())]
    OutsidePublicDir(PathBuf),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

pub const ASSETS_DIR: &str = "assets";
pub const SCRIPT_FILE: &str = "site.js";

/// One generated HTML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    /// Route path, or the file name for pages without a route.
    pub route: String,
    /// Relative to the output directory.
    pub file: PathBuf,
    pub bytes: usize,
}

/// What a build produced.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub pages: Vec<PageReport>,
    /// Site-absolute URL of the fingerprinted stylesheet.
    pub stylesheet: String,
    pub preloaded: Vec<PreloadedImage>,
    /// Critical images that were configured but could not be read.
    pub preload_skipped: Vec<String>,
    pub public_files: usize,
}

/// Everything that goes into the stylesheet: config colors, then the
/// static base styles.
pub fn build_css(config: &SiteConfig) -> String {
    let color_css = config::generate_color_css(&config.colors);
    format!("{}\n\n{}", color_css, CSS_STATIC)
}

/// `site-{hash}.css`, where `hash` is the first 16 hex digits of the
/// content's SHA-256.
pub fn fingerprinted_css_name(css: &str) -> String {
    let digest = format!("{:x}", Sha256::digest(css.as_bytes()));
    format!("site-{}.css", &digest[..16])
}

/// The year shown in the footer, fixed when the binary was built.
pub fn copyright_year() -> &'static str {
    env!("BUILD_YEAR")
}

/// Generate the whole site.
///
/// `root` is the directory `config.public_dir` is relative to.
pub fn generate(
    config: &SiteConfig,
    root: &Path,
    output_dir: &Path,
) -> Result<BuildReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let css = build_css(config);
    let css_name = fingerprinted_css_name(&css);
    let stylesheet = format!("/{ASSETS_DIR}/{css_name}");
    let script = format!("/{ASSETS_DIR}/{SCRIPT_FILE}");

    let public_dir = root.join(&config.public_dir);
    let preloaded = preload_critical_images(&public_dir, &config.images.preload);
    let preload_skipped = config
        .images
        .preload
        .iter()
        .filter(|source| !preloaded.iter().any(|p| &p.source == *source))
        .cloned()
        .collect();

    let ctx = PageContext {
        chrome: Chrome {
            language: &config.site.language,
            stylesheet: &stylesheet,
            script: &script,
            year: copyright_year(),
        },
        base_url: config.site.origin(),
        preloads: &preloaded,
        project_placeholder: config.images.placeholder,
    };

    let mut pages = Route::all()
        .par_iter()
        .map(|route| {
            let html = pages::render_route(*route, &ctx).into_string();
            write_page(output_dir, route.path(), &route.output_path(), &html)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let not_found = pages::render_not_found(&ctx).into_string();
    pages.push(write_page(
        output_dir,
        NOT_FOUND_FILE.to_string(),
        Path::new(NOT_FOUND_FILE),
        &not_found,
    )?);

    let assets_dir = output_dir.join(ASSETS_DIR);
    fs::create_dir_all(&assets_dir)?;
    fs::write(assets_dir.join(&css_name), &css)?;
    fs::write(assets_dir.join(SCRIPT_FILE), JS)?;
    debug!(stylesheet = %css_name, "wrote assets");

    let public_files = copy_public_dir(&public_dir, output_dir)?;

    info!(
        pages = pages.len(),
        public_files,
        output = %output_dir.display(),
        "site generated"
    );

    Ok(BuildReport {
        output_dir: output_dir.to_path_buf(),
        pages,
        stylesheet,
        preloaded,
        preload_skipped,
        public_files,
    })
}

fn write_page(
    output_dir: &Path,
    route: String,
    relative: &Path,
    html: &str,
) -> Result<PageReport, GenerateError> {
    let path = output_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, html)?;
    debug!(file = %relative.display(), bytes = html.len(), "wrote page");
    Ok(PageReport {
        route,
        file: relative.to_path_buf(),
        bytes: html.len(),
    })
}

/// Copy everything under `public_dir` into `output_dir`, keeping the
/// relative layout. A missing public directory copies nothing.
///
/// When `output_dir` lies inside `public_dir` (e.g. `public_dir = "."`),
/// it is skipped so the walk never descends into its own copies.
fn copy_public_dir(public_dir: &Path, output_dir: &Path) -> Result<usize, GenerateError> {
    if !public_dir.is_dir() {
        debug!(dir = %public_dir.display(), "no public directory");
        return Ok(0);
    }

    let output_canonical = fs::canonicalize(output_dir)?;
    let walker = WalkDir::new(public_dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_same_dir(entry, &output_canonical));

    let mut copied = 0;
    for entry in walker {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(public_dir)
            .map_err(|_| GenerateError::OutsidePublicDir(entry.path().to_path_buf()))?;
        let dest = output_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
            debug!(file = %relative.display(), "copied public file");
            copied += 1;
        }
    }
    Ok(copied)
}

fn is_same_dir(entry: &walkdir::DirEntry, dir: &Path) -> bool {
    entry.file_type().is_dir()
        && fs::canonicalize(entry.path()).is_ok_and(|path| path == dir)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{assert_single, read_output, setup_project, write_config};
    use tempfile::TempDir;

    #[test]
    fn css_name_is_stable_and_content_addressed() {
        let a = fingerprinted_css_name("body{}");
        assert_eq!(a, fingerprinted_css_name("body{}"));
        assert_ne!(a, fingerprinted_css_name("body{color:red}"));
        assert!(a.starts_with("site-") && a.ends_with(".css"));
        assert_eq!(a.len(), "site-".len() + 16 + ".css".len());
    }

    #[test]
    fn css_includes_config_colors() {
        let mut config = SiteConfig::default();
        config.colors.light.primary = "#123456".into();
        let css = build_css(&config);
        assert!(css.contains("--color-primary: #123456;"));
        assert!(css.contains(".responsive-image"));
    }

    #[test]
    fn generates_every_route() {
        let project = setup_project();
        let out = TempDir::new().unwrap();
        let report = generate(&SiteConfig::default(), project.path(), out.path()).unwrap();

        for route in Route::all() {
            assert!(out.path().join(route.output_path()).is_file(), "{}", route.path());
        }
        assert!(out.path().join("404.html").is_file());
        assert_eq!(report.pages.len(), Route::all().len() + 1);
    }

    #[test]
    fn writes_fingerprinted_assets() {
        let project = setup_project();
        let out = TempDir::new().unwrap();
        let report = generate(&SiteConfig::default(), project.path(), out.path()).unwrap();

        let css_path = out.path().join(report.stylesheet.trim_start_matches('/'));
        assert!(css_path.is_file());
        assert!(out.path().join("assets/site.js").is_file());

        let home = read_output(out.path(), "index.html");
        assert!(home.contains(&report.stylesheet));
    }

    #[test]
    fn copies_public_files() {
        let project = setup_project();
        let out = TempDir::new().unwrap();
        let report = generate(&SiteConfig::default(), project.path(), out.path()).unwrap();

        assert!(out.path().join("images/hero-bg.jpg").is_file());
        assert!(out.path().join("robots.txt").is_file());
        assert_eq!(report.public_files, 3);
    }

    #[test]
    fn output_inside_public_dir_is_not_copied_into_itself() {
        let project = setup_project();
        write_config(project.path(), "public_dir = \".\"\n");
        let config = config::load_config(&project.path().join("config.toml")).unwrap();
        let out = project.path().join("dist");

        generate(&config, project.path(), &out).unwrap();
        // Rebuild over an existing output, as a second `build` would.
        let report = generate(&config, project.path(), &out).unwrap();

        assert!(out.join("public/images/hero-bg.jpg").is_file());
        assert!(out.join("config.toml").is_file());
        assert!(!out.join("dist").exists());
        // public/ (3 files) plus config.toml.
        assert_eq!(report.public_files, 4);
    }

    #[test]
    fn preloads_existing_critical_images_only() {
        let project = setup_project();
        let out = TempDir::new().unwrap();
        let report = generate(&SiteConfig::default(), project.path(), out.path()).unwrap();

        // hero-bg.jpg exists in the fixture, team-working.jpg does not.
        assert_eq!(report.preloaded.len(), 1);
        assert_eq!(report.preloaded[0].source, "/images/hero-bg.jpg");
        assert_eq!(report.preload_skipped, vec!["/images/team-working.jpg"]);

        let home = read_output(out.path(), "index.html");
        assert!(home.contains(r#"<link rel="preload" as="image" href="/images/hero-bg.jpg">"#));
    }

    #[test]
    fn missing_public_dir_is_not_an_error() {
        let root = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let report = generate(&SiteConfig::default(), root.path(), out.path()).unwrap();
        assert_eq!(report.public_files, 0);
        assert!(report.preloaded.is_empty());
        assert_eq!(report.preload_skipped.len(), 2);
    }

    #[test]
    fn canonical_uses_configured_origin() {
        let project = setup_project();
        let out = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.site.base_url = "https://staging.example.ie/".into();
        generate(&config, project.path(), out.path()).unwrap();

        let about = read_output(out.path(), "about/index.html");
        assert!(about.contains(r#"<link rel="canonical" href="https://staging.example.ie/about">"#));
    }

    #[test]
    fn generates_from_loaded_config() {
        let project = setup_project();
        write_config(project.path(), "[site]\nlanguage = \"ga\"\n");
        let config = config::load_config(&project.path().join("config.toml")).unwrap();
        let out = TempDir::new().unwrap();
        generate(&config, project.path(), out.path()).unwrap();

        let html = read_output(out.path(), "contact/index.html");
        assert!(html.contains(r#"<html lang="ga">"#));
        assert_single(&html, "<title>");
        assert_single(&html, "application/ld+json");
    }

    #[test]
    fn not_found_page_carries_redirect() {
        let project = setup_project();
        let out = TempDir::new().unwrap();
        generate(&SiteConfig::default(), project.path(), out.path()).unwrap();

        let html = read_output(out.path(), "404.html");
        assert!(html.contains(r#"data-redirect-to="/about""#));
    }
}
