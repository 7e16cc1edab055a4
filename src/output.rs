//! CLI output formatting for every command.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Pages
//! 001 / → index.html (18.2 KB)
//! 002 /about → about/index.html (21.7 KB)
//! ...
//!     404.html → 404.html (6.1 KB)
//!
//! Assets
//!     Stylesheet: /assets/site-3f2a9c1e0b7d4a65.css
//!     Script: /assets/site.js
//!
//! Preload
//!     /images/hero-bg.jpg (1920x1080)
//!     /images/team-working.jpg: skipped
//!
//! Generated 10 pages, copied 14 public files into dist
//! ```
//!
//! ## Routes
//!
//! ```text
//! 001 / → index.html
//! 002 /about → about/index.html
//! ...
//!     /team/{unknown} → redirect /about
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::config::SiteConfig;
use crate::generate::BuildReport;
use crate::routes::{Route, TEAM_PREFIX, UNKNOWN_MEMBER_REDIRECT};
use crate::seo::{PageMetadata, StructuredDataKind};

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Human-readable size: bytes below 1 KiB, otherwise KB with one decimal.
fn format_bytes(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

// ============================================================================
// build
// ============================================================================

pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];

    let mut position = 0;
    for page in &report.pages {
        let target = format!(
            "{} \u{2192} {} ({})",
            page.route,
            page.file.display(),
            format_bytes(page.bytes)
        );
        if page.route.starts_with('/') {
            position += 1;
            lines.push(format!("{} {}", format_index(position), target));
        } else {
            lines.push(format!("{}{}", indent(1), target));
        }
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    lines.push(format!("{}Stylesheet: {}", indent(1), report.stylesheet));
    lines.push(format!(
        "{}Script: /{}/{}",
        indent(1),
        crate::generate::ASSETS_DIR,
        crate::generate::SCRIPT_FILE
    ));

    if !report.preloaded.is_empty() || !report.preload_skipped.is_empty() {
        lines.push(String::new());
        lines.push("Preload".to_string());
        for image in &report.preloaded {
            lines.push(format!(
                "{}{} ({}x{})",
                indent(1),
                image.source,
                image.width,
                image.height
            ));
        }
        for source in &report.preload_skipped {
            lines.push(format!("{}{}: skipped", indent(1), source));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} pages, copied {} public files into {}",
        report.pages.len(),
        report.public_files,
        report.output_dir.display()
    ));
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// routes
// ============================================================================

pub fn format_routes(routes: &[Route]) -> Vec<String> {
    let mut lines: Vec<String> = routes
        .iter()
        .enumerate()
        .map(|(i, route)| {
            format!(
                "{} {} \u{2192} {}",
                format_index(i + 1),
                route.path(),
                route.output_path().display()
            )
        })
        .collect();
    lines.push(format!(
        "{}{}{{unknown}} \u{2192} redirect {}",
        indent(1),
        TEAM_PREFIX,
        UNKNOWN_MEMBER_REDIRECT
    ));
    lines
}

pub fn print_routes(routes: &[Route]) {
    for line in format_routes(routes) {
        println!("{}", line);
    }
}

// ============================================================================
// seo
// ============================================================================

pub fn format_seo_output(
    page_key: &str,
    meta: &PageMetadata,
    structured: Option<StructuredDataKind>,
) -> Vec<String> {
    let mut lines = vec![format!("Page: {page_key}")];
    let i = indent(1);
    lines.push(format!("{i}Title: {}", meta.title));
    lines.push(format!("{i}Description: {}", truncate_desc(&meta.description, 80)));
    if let Some(keywords) = &meta.keywords {
        lines.push(format!("{i}Keywords: {}", keywords.join(", ")));
    }
    if let Some(image) = &meta.image {
        lines.push(format!("{i}Image: {image}"));
    }
    lines.push(format!("{i}Type: {}", meta.kind.as_str()));
    let data = match structured {
        Some(kind) => format!("{kind:?}"),
        None => "none".to_string(),
    };
    lines.push(format!("{i}Structured data: {data}"));
    lines
}

pub fn print_seo_output(page_key: &str, meta: &PageMetadata, structured: Option<StructuredDataKind>) {
    for line in format_seo_output(page_key, meta, structured) {
        println!("{}", line);
    }
}

// ============================================================================
// check
// ============================================================================

pub fn format_check_output(config: &SiteConfig, config_found: bool, public_dir_found: bool) -> Vec<String> {
    let i = indent(1);
    vec![
        "Config".to_string(),
        format!(
            "{i}{}",
            if config_found { "config.toml" } else { "(stock defaults)" }
        ),
        format!("{i}Base URL: {}", config.site.origin()),
        format!("{i}Language: {}", config.site.language),
        format!(
            "{i}Public dir: {}{}",
            config.public_dir,
            if public_dir_found { "" } else { " (missing)" }
        ),
        format!("{i}Preload: {} images", config.images.preload.len()),
        String::new(),
        format!("{} routes OK", Route::all().len()),
    ]
}

pub fn print_check_output(config: &SiteConfig, config_found: bool, public_dir_found: bool) {
    for line in format_check_output(config, config_found, public_dir_found) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::PageReport;
    use crate::responsive::PreloadedImage;
    use crate::seo;
    use std::path::PathBuf;

    fn report() -> BuildReport {
        BuildReport {
            output_dir: PathBuf::from("dist"),
            pages: vec![
                PageReport {
                    route: "/".into(),
                    file: PathBuf::from("index.html"),
                    bytes: 2048,
                },
                PageReport {
                    route: "/about".into(),
                    file: PathBuf::from("about/index.html"),
                    bytes: 512,
                },
                PageReport {
                    route: "404.html".into(),
                    file: PathBuf::from("404.html"),
                    bytes: 100,
                },
            ],
            stylesheet: "/assets/site-0123456789abcdef.css".into(),
            preloaded: vec![PreloadedImage {
                source: "/images/hero-bg.jpg".into(),
                width: 1920,
                height: 1080,
            }],
            preload_skipped: vec!["/images/team-working.jpg".into()],
            public_files: 7,
        }
    }

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn format_bytes_units() {
        assert_eq!(format_bytes(10), "10 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
    }

    #[test]
    fn truncate_desc_respects_char_boundaries() {
        assert_eq!(truncate_desc("short", 10), "short");
        assert_eq!(truncate_desc("Fíonn Hourican", 3), "Fío...");
    }

    // =========================================================================
    // build
    // =========================================================================

    #[test]
    fn build_output_lists_pages_with_positions() {
        let lines = format_build_output(&report());
        assert_eq!(lines[0], "Pages");
        assert_eq!(lines[1], "001 / \u{2192} index.html (2.0 KB)");
        assert_eq!(lines[2], "002 /about \u{2192} about/index.html (512 B)");
        assert_eq!(lines[3], "    404.html \u{2192} 404.html (100 B)");
    }

    #[test]
    fn build_output_lists_assets_and_preload() {
        let lines = format_build_output(&report());
        assert!(lines.contains(&"    Stylesheet: /assets/site-0123456789abcdef.css".to_string()));
        assert!(lines.contains(&"    Script: /assets/site.js".to_string()));
        assert!(lines.contains(&"    /images/hero-bg.jpg (1920x1080)".to_string()));
        assert!(lines.contains(&"    /images/team-working.jpg: skipped".to_string()));
    }

    #[test]
    fn build_output_summary_line() {
        let lines = format_build_output(&report());
        assert_eq!(
            lines.last().unwrap(),
            "Generated 3 pages, copied 7 public files into dist"
        );
    }

    #[test]
    fn build_output_omits_empty_preload_section() {
        let mut r = report();
        r.preloaded.clear();
        r.preload_skipped.clear();
        let lines = format_build_output(&r);
        assert!(!lines.contains(&"Preload".to_string()));
    }

    // =========================================================================
    // routes / seo / check
    // =========================================================================

    #[test]
    fn routes_output_includes_redirect() {
        let lines = format_routes(&Route::all());
        assert_eq!(lines[0], "001 / \u{2192} index.html");
        assert_eq!(
            lines.last().unwrap(),
            "    /team/{unknown} \u{2192} redirect /about"
        );
        assert_eq!(lines.len(), Route::all().len() + 1);
    }

    #[test]
    fn seo_output_shows_fields() {
        let meta = seo::resolve("contact", None);
        let lines = format_seo_output("contact", &meta, Some(StructuredDataKind::Organization));
        assert_eq!(lines[0], "Page: contact");
        assert!(lines.contains(&"    Title: Contact Us | Public Sector IT Solutions".to_string()));
        assert!(lines.contains(&"    Type: website".to_string()));
        assert!(lines.contains(&"    Structured data: Organization".to_string()));
    }

    #[test]
    fn seo_output_without_structured_data() {
        let meta = seo::default_metadata();
        let lines = format_seo_output("team", &meta, None);
        assert_eq!(lines.last().unwrap(), "    Structured data: none");
    }

    #[test]
    fn check_output_reports_missing_public_dir() {
        let lines = format_check_output(&SiteConfig::default(), false, false);
        assert_eq!(lines[1], "    (stock defaults)");
        assert!(lines.contains(&"    Public dir: public (missing)".to_string()));
        assert!(lines.last().unwrap().ends_with("routes OK"));
    }
}
