//! End-to-end tests for the `civic-site` binary.
//!
//! Each test runs the compiled binary against a throwaway project in a
//! tempdir and checks stdout plus the files it writes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_civic-site"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A project with a config, a robots.txt and the hero image only.
fn project(config: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let images = tmp.path().join("public/images");
    fs::create_dir_all(&images).unwrap();
    image::RgbImage::from_pixel(32, 18, image::Rgb([29, 78, 137]))
        .save(images.join("hero-bg.jpg"))
        .unwrap();
    fs::write(tmp.path().join("public/robots.txt"), "User-agent: *\n").unwrap();
    fs::write(tmp.path().join("config.toml"), config).unwrap();
    tmp
}

fn run(args: &[&str]) -> Output {
    bin().args(args).output().expect("failed to run civic-site")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn build(tmp: &TempDir) -> (PathBuf, String) {
    let out = tmp.path().join("dist");
    let config = tmp.path().join("config.toml");
    let text = stdout(&run(&[
        "build",
        "--config",
        path_arg(&config),
        "--output",
        path_arg(&out),
    ]));
    (out, text)
}

// =========================================================================
// build
// =========================================================================

#[test]
fn build_writes_every_page() {
    let tmp = project("");
    let (out, text) = build(&tmp);

    for file in [
        "index.html",
        "about/index.html",
        "services/index.html",
        "portfolio/index.html",
        "contact/index.html",
        "404.html",
        "assets/site.js",
        "robots.txt",
        "images/hero-bg.jpg",
    ] {
        assert!(out.join(file).exists(), "missing {file}");
    }
    assert!(text.contains("Generated"));
    assert!(text.contains("/images/team-working.jpg: skipped"));
}

#[test]
fn build_writes_team_member_pages() {
    let tmp = project("");
    let (out, _) = build(&tmp);
    let page = fs::read_to_string(out.join("team/dylan-murtagh/index.html")).unwrap();
    assert!(page.contains("Dylan Murtagh"));
    assert!(page.contains(r#"href="/about#team""#));
}

#[test]
fn build_uses_configured_origin() {
    let tmp = project("[site]\nbase_url = \"https://staging.example.ie/\"\n");
    let (out, _) = build(&tmp);
    let html = fs::read_to_string(out.join("services/index.html")).unwrap();
    assert!(html.contains(r#"<link rel="canonical" href="https://staging.example.ie/services">"#));
}

#[test]
fn build_preloads_hero_on_home_page() {
    let tmp = project("");
    let (out, _) = build(&tmp);
    let html = fs::read_to_string(out.join("index.html")).unwrap();
    assert!(html.contains(r#"rel="preload""#));
    assert!(html.contains("/images/hero-bg.jpg"));
}

#[test]
fn build_rejects_invalid_config() {
    let tmp = project("[site]\nbase_url = \"ftp://example.ie\"\n");
    let output = run(&[
        "build",
        "--config",
        path_arg(&tmp.path().join("config.toml")),
        "--output",
        path_arg(&tmp.path().join("dist")),
    ]);
    assert!(!output.status.success());
    assert!(!tmp.path().join("dist/index.html").exists());
}

#[test]
fn build_rejects_unknown_config_keys() {
    let tmp = project("colour = \"blue\"\n");
    let output = run(&["build", "--config", path_arg(&tmp.path().join("config.toml"))]);
    assert!(!output.status.success());
}

// =========================================================================
// check / routes / seo / gen-config
// =========================================================================

#[test]
fn check_reports_valid_config() {
    let tmp = project("");
    let text = stdout(&run(&["check", "--config", path_arg(&tmp.path().join("config.toml"))]));
    assert!(text.contains("config.toml"));
    assert!(text.contains("Base URL: https://publicsectoritsolutions.ie"));
    assert!(text.contains("Config is valid"));
}

#[test]
fn check_without_config_uses_stock_defaults() {
    let tmp = TempDir::new().unwrap();
    let text = stdout(&run(&["check", "--config", path_arg(&tmp.path().join("config.toml"))]));
    assert!(text.contains("(stock defaults)"));
    assert!(text.contains("Public dir: public (missing)"));
}

#[test]
fn routes_lists_pages_and_redirect() {
    let text = stdout(&run(&["routes"]));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "001 / \u{2192} index.html");
    assert!(text.contains("/contact \u{2192} contact/index.html"));
    assert!(text.contains("/team/fionn-hourican"));
    assert_eq!(*lines.last().unwrap(), "    /team/{unknown} \u{2192} redirect /about");
}

#[test]
fn seo_prints_page_metadata() {
    let text = stdout(&run(&["seo", "about"]));
    assert!(text.contains("Page: about"));
    assert!(text.contains("Title: About Us | Public Sector IT Solutions"));
    assert!(text.contains("Structured data: Organization"));
}

#[test]
fn seo_json_includes_structured_data() {
    let text = stdout(&run(&["seo", "services", "--json"]));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value["metadata"]["title"],
        "Our Services | Public Sector IT Solutions"
    );
    assert_eq!(value["structuredData"]["@type"], "Service");
}

#[test]
fn seo_unknown_page_falls_back_to_defaults() {
    let text = stdout(&run(&["seo", "nonexistent", "--json"]));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(value["structuredData"].is_null());
    assert_eq!(value["metadata"]["type"], "website");
}

#[test]
fn gen_config_output_is_loadable() {
    let text = stdout(&run(&["gen-config"]));
    let tmp = project(&text);
    let check = stdout(&run(&["check", "--config", path_arg(&tmp.path().join("config.toml"))]));
    assert!(check.contains("Config is valid"));
}
