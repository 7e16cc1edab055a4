//! `config.toml`: where the site is served from and how it looks.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! the base layer; the user file is merged on top of them table by table, so
//! a file only needs the keys it changes.
//!
//! ## Configuration Options
//!
//! ```toml
//! # Every key is optional; these are the built-in values
//!
//! public_dir = "public"       # Copied verbatim into the output root
//!
//! [site]
//! base_url = "https://publicsectoritsolutions.ie"  # Canonical URLs
//! language = "en-IE"          # <html lang>
//!
//! [images]
//! placeholder = "blur"        # Portfolio images: "blur" or "empty"
//! preload = ["/images/hero-bg.jpg", "/images/team-working.jpg"]
//!
//! [colors.light]
//! background = "#ffffff"
//! surface = "#f4f6f9"
//! text = "#0f172a"
//! text_muted = "#5b6475"
//! border = "#dde2ea"
//! primary = "#1d4e89"
//! primary_text = "#ffffff"
//!
//! [colors.dark]
//! background = "#0b1220"
//! surface = "#131c2e"
//! text = "#e6ebf2"
//! text_muted = "#9aa4b5"
//! border = "#26324a"
//! primary = "#5b9be0"
//! primary_text = "#0b1220"
//!
//! [processing]
//! max_processes = 4           # Max render threads (omit for auto = CPU cores)
//! ```
//!
//! A key the structs below do not declare is a load error.

use crate::content::images::CRITICAL_IMAGES;
use crate::responsive::Placeholder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory whose contents are copied into the output root
    /// (images, favicon, robots.txt). Relative to the config file.
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
    /// Canonical origin and document language.
    pub site: SiteSection,
    /// `[colors.light]` and `[colors.dark]`.
    pub colors: ColorConfig,
    /// Image loading behavior.
    pub images: ImagesConfig,
    /// Parallel rendering settings.
    pub processing: ProcessingConfig,
}

fn default_public_dir() -> String {
    "public".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            public_dir: default_public_dir(),
            site: SiteSection::default(),
            colors: ColorConfig::default(),
            images: ImagesConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Checks values serde cannot: URL scheme, non-blank strings, preload paths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.site.base_url;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Validation(
                "site.base_url must start with http:// or https://".into(),
            ));
        }
        if self.site.language.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.language must not be empty".into(),
            ));
        }
        if let Some(bad) = self.images.preload.iter().find(|p| !p.starts_with('/')) {
            return Err(ConfigError::Validation(format!(
                "images.preload entries must be site-absolute paths, got {bad:?}"
            )));
        }
        if self.public_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "public_dir must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Canonical origin and document language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Origin used for canonical links. A trailing slash is ignored.
    pub base_url: String,
    /// Value of `<html lang>`.
    pub language: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_url: "https://publicsectoritsolutions.ie".to_string(),
            language: "en-IE".to_string(),
        }
    }
}

impl SiteSection {
    /// `base_url` without a trailing slash, ready to prefix a route path.
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Image loading behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Loading placeholder for portfolio project images.
    pub placeholder: Placeholder,
    /// Critical images read at build time and preloaded on the home page.
    pub preload: Vec<String>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            placeholder: Placeholder::Blur,
            preload: CRITICAL_IMAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Parallel rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of render threads.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Render threads to use: all cores, or `max_processes` if that is lower.
/// Never less than one.
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism().map_or(1, |n| n.get());
    match config.max_processes {
        Some(limit) => limit.clamp(1, cores),
        None => cores,
    }
}

/// Palettes emitted as CSS custom properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// One palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Cards, tinted sections, the footer.
    pub surface: String,
    pub text: String,
    /// Secondary copy, breadcrumbs, captions.
    pub text_muted: String,
    pub border: String,
    /// Buttons, active nav item, brand mark.
    pub primary: String,
    /// Text drawn on `primary`.
    pub primary_text: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#f4f6f9".to_string(),
            text: "#0f172a".to_string(),
            text_muted: "#5b6475".to_string(),
            border: "#dde2ea".to_string(),
            primary: "#1d4e89".to_string(),
            primary_text: "#ffffff".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0b1220".to_string(),
            surface: "#131c2e".to_string(),
            text: "#e6ebf2".to_string(),
            text_muted: "#9aa4b5".to_string(),
            border: "#26324a".to_string(),
            primary: "#5b9be0".to_string(),
            primary_text: "#0b1220".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Built-in defaults as a TOML table: the layer every user file lands on.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Deep-merges `overlay` into `base`. Tables merge per key; any other
/// overlay value (arrays included) replaces the base value outright.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut merged), toml::Value::Table(changes)) => {
            for (key, value) in changes {
                let value = match merged.remove(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => value,
                };
                merged.insert(key, value);
            }
            toml::Value::Table(merged)
        }
        (_, replacement) => replacement,
    }
}

/// Reads `path` as untyped TOML. `None` when the file is absent.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(toml::from_str(&text)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Layers `overlay` (if any) on `base`, then types and validates the result.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let layered = match overlay {
        Some(user) => merge_toml(base, user),
        None => base,
    };
    let config: SiteConfig = layered.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the given file.
///
/// A missing file yields the stock defaults. Otherwise user values are
/// merged on top of the defaults, unknown keys are rejected, and the
/// result is validated.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# civic-site Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# Directory copied verbatim into the output root (images, favicon, robots.txt).
# Relative to this file.
public_dir = "public"

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
# Origin for canonical links. A trailing slash is ignored.
base_url = "https://publicsectoritsolutions.ie"
# Document language (<html lang>).
language = "en-IE"

# ---------------------------------------------------------------------------
# Images
# ---------------------------------------------------------------------------
[images]
# Loading placeholder for portfolio project images: "blur" or "empty".
placeholder = "blur"
# Critical images. Each is read at build time; the ones that exist and
# decode are preloaded on the home page. Missing files are logged and skipped.
preload = ["/images/hero-bg.jpg", "/images/team-working.jpg"]

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
surface = "#f4f6f9"       # Cards, tinted sections, footer
text = "#0f172a"
text_muted = "#5b6475"    # Secondary copy, breadcrumbs
border = "#dde2ea"
primary = "#1d4e89"       # Buttons, active nav item
primary_text = "#ffffff"  # Text on primary

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0b1220"
surface = "#131c2e"
text = "#e6ebf2"
text_muted = "#9aa4b5"
border = "#26324a"
primary = "#5b9be0"
primary_text = "#0b1220"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel render threads.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}
    }}
}}"#,
        light = scheme_properties(&colors.light, "    "),
        dark = scheme_properties(&colors.dark, "        "),
    )
}

fn scheme_properties(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("--color-bg", &scheme.background),
        ("--color-surface", &scheme.surface),
        ("--color-text", &scheme.text),
        ("--color-text-muted", &scheme.text_muted),
        ("--color-border", &scheme.border),
        ("--color-primary", &scheme.primary),
        ("--color-primary-text", &scheme.primary_text),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}
