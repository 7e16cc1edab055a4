//! Responsive image wrapper.
//!
//! Every image on the site goes through [`ResponsiveImage`], which carries a
//! tiny load state machine:
//!
//! ```text
//!            on_load
//! Loading ───────────▶ Loaded
//!    │
//!    └───────────────▶ Errored
//!            on_error
//! ```
//!
//! Both outcomes are terminal: once an image has loaded or failed, later
//! events are ignored and nothing is retried. A new source means a new
//! [`ResponsiveImage`].
//!
//! The generated HTML always starts in `Loading`. The markup for `Errored` is
//! shipped inside a `<template>` next to the `<img>` so that `static/site.js`
//! can apply the same transition in the browser without knowing how the
//! fallback looks.
//!
//! ## Source sets
//!
//! [`srcset`] emits a `1x`/`2x` pair that points both densities at the same
//! file. There is no multi-resolution pipeline behind it; the attribute is
//! there so one can be dropped in later without touching the templates.

use maud::{Markup, html};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Used when a descriptor carries no `sizes` hint.
pub const DEFAULT_SIZES: &str = "(max-width: 768px) 100vw, (max-width: 1200px) 50vw, 33vw";

/// What to show while the image is still loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placeholder {
    /// A muted box with a spinner that cross-fades into the image.
    Blur,
    /// Nothing; the image fades in on its own.
    #[default]
    Empty,
}

/// Describes one image as a page wants it rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDescriptor<'a> {
    pub source: &'a str,
    pub alt: &'a str,
    pub sizes: Option<&'a str>,
    /// Eager vs. lazy network priority. A hint only.
    pub eager: bool,
    pub placeholder: Placeholder,
}

impl<'a> ImageDescriptor<'a> {
    pub const fn new(source: &'a str, alt: &'a str) -> Self {
        Self {
            source,
            alt,
            sizes: None,
            eager: false,
            placeholder: Placeholder::Empty,
        }
    }

    pub const fn with_sizes(self, sizes: &'a str) -> Self {
        Self {
            sizes: Some(sizes),
            ..self
        }
    }

    pub const fn eager(self) -> Self {
        Self {
            eager: true,
            ..self
        }
    }

    pub const fn with_placeholder(self, placeholder: Placeholder) -> Self {
        Self {
            placeholder,
            ..self
        }
    }

    pub fn sizes_or_default(&self) -> &'a str {
        self.sizes.unwrap_or(DEFAULT_SIZES)
    }

    pub fn loading_attr(&self) -> &'static str {
        if self.eager { "eager" } else { "lazy" }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageLoadState {
    #[default]
    Loading,
    Loaded,
    Errored,
}

impl ImageLoadState {
    pub fn on_load(self) -> Self {
        match self {
            Self::Loading => Self::Loaded,
            terminal => terminal,
        }
    }

    pub fn on_error(self) -> Self {
        match self {
            Self::Loading => Self::Errored,
            terminal => terminal,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// Value of the `data-image-state` attribute; the browser script uses the
    /// same names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Errored => "errored",
        }
    }
}

/// Build the `srcset` attribute for a source: the same file at 1x and 2x.
pub fn srcset(source: &str) -> String {
    format!("{source} 1x, {source} 2x")
}

/// An image descriptor together with its current load state.
#[derive(Debug, Clone)]
pub struct ResponsiveImage<'a> {
    descriptor: ImageDescriptor<'a>,
    state: ImageLoadState,
    class: Option<&'a str>,
}

impl<'a> ResponsiveImage<'a> {
    pub fn new(descriptor: ImageDescriptor<'a>) -> Self {
        Self {
            descriptor,
            state: ImageLoadState::Loading,
            class: None,
        }
    }

    /// Extra class for the outer wrapper (layout is the caller's business).
    pub fn with_class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn state(&self) -> ImageLoadState {
        self.state
    }

    pub fn on_load(&mut self) {
        self.state = self.state.on_load();
    }

    pub fn on_error(&mut self) {
        self.state = self.state.on_error();
    }

    fn wrapper_class(&self, base: &str) -> String {
        match self.class {
            Some(extra) => format!("{base} {extra}"),
            None => base.to_string(),
        }
    }

    /// Render the image for its current state.
    pub fn render(&self) -> Markup {
        if self.state == ImageLoadState::Errored {
            return self.render_fallback();
        }

        let d = &self.descriptor;
        let loading = self.state == ImageLoadState::Loading;
        let show_placeholder = loading && d.placeholder == Placeholder::Blur;
        let img_class = if loading { "is-loading" } else { "is-loaded" };

        html! {
            div class=(self.wrapper_class("responsive-image")) data-image-state=(self.state.as_str()) {
                @if show_placeholder {
                    div.image-placeholder aria-hidden="true" {
                        span.spinner {}
                    }
                }
                img
                    src=(d.source)
                    srcset=(srcset(d.source))
                    sizes=(d.sizes_or_default())
                    alt=(d.alt)
                    loading=(d.loading_attr())
                    decoding="async"
                    class=(img_class);
                @if loading {
                    template.image-fallback-template {
                        (self.render_fallback())
                    }
                }
            }
        }
    }

    fn render_fallback(&self) -> Markup {
        let alt = self.descriptor.alt;
        html! {
            div class=(self.wrapper_class("responsive-image image-fallback"))
                data-image-state="errored"
                role="img"
                aria-label={ "Failed to load image: " (alt) } {
                div.image-fallback-body {
                    div.image-fallback-title { "Image not available" }
                    div.image-fallback-alt { (alt) }
                }
            }
        }
    }
}

// ============================================================================
// Critical image preload
// ============================================================================

/// A critical image that was found and decoded far enough to read its size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadedImage {
    pub source: String,
    pub width: u32,
    pub height: u32,
}

/// Reads the dimensions of the critical images under `public_dir` in parallel.
///
/// Best effort: a missing or unreadable image is logged and skipped, never
/// reported to the caller. The survivors keep their input order and become
/// `<link rel="preload">` hints on the home page.
pub fn preload_critical_images(public_dir: &Path, sources: &[String]) -> Vec<PreloadedImage> {
    sources
        .par_iter()
        .filter_map(|source| match read_dimensions(public_dir, source) {
            Ok(image) => {
                debug!(source = %image.source, width = image.width, height = image.height, "preloaded");
                Some(image)
            }
            Err(err) => {
                warn!(source = %source, error = %err, "failed to preload critical image");
                None
            }
        })
        .collect()
}

fn read_dimensions(public_dir: &Path, source: &str) -> Result<PreloadedImage, image::ImageError> {
    let path = public_dir.join(source.trim_start_matches('/'));
    let (width, height) = image::image_dimensions(&path)?;
    Ok(PreloadedImage {
        source: source.to_string(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PHOTO: ImageDescriptor<'static> = ImageDescriptor::new("/images/a.jpg", "A city hall");

    // =========================================================================
    // State machine
    // =========================================================================

    #[test]
    fn starts_loading() {
        assert_eq!(ImageLoadState::default(), ImageLoadState::Loading);
        assert!(!ImageLoadState::Loading.is_terminal());
    }

    #[test]
    fn loading_transitions() {
        assert_eq!(ImageLoadState::Loading.on_load(), ImageLoadState::Loaded);
        assert_eq!(ImageLoadState::Loading.on_error(), ImageLoadState::Errored);
    }

    #[test]
    fn terminal_states_ignore_events() {
        assert_eq!(ImageLoadState::Loaded.on_error(), ImageLoadState::Loaded);
        assert_eq!(ImageLoadState::Errored.on_load(), ImageLoadState::Errored);
        assert!(ImageLoadState::Loaded.is_terminal());
        assert!(ImageLoadState::Errored.is_terminal());
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    #[test]
    fn srcset_repeats_source_for_both_densities() {
        assert_eq!(srcset("/images/a.jpg"), "/images/a.jpg 1x, /images/a.jpg 2x");
    }

    #[test]
    fn failed_image_shows_fallback_with_alt() {
        let mut image = ResponsiveImage::new(PHOTO);
        image.on_error();
        let html = image.render().into_string();

        assert!(html.contains("Image not available"));
        assert!(html.contains("A city hall"));
        assert!(html.contains(r#"aria-label="Failed to load image: A city hall""#));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn loaded_image_is_fully_opaque() {
        let mut image = ResponsiveImage::new(PHOTO.with_placeholder(Placeholder::Blur));
        image.on_load();
        let html = image.render().into_string();

        assert!(html.contains(r#"class="is-loaded""#));
        assert!(!html.contains("is-loading"));
        assert!(!html.contains("image-placeholder"));
        assert!(!html.contains("<template"));
    }

    #[test]
    fn error_after_load_keeps_image() {
        let mut image = ResponsiveImage::new(PHOTO);
        image.on_load();
        image.on_error();
        assert_eq!(image.state(), ImageLoadState::Loaded);
    }

    #[test]
    fn loading_with_blur_renders_placeholder() {
        let image = ResponsiveImage::new(PHOTO.with_placeholder(Placeholder::Blur));
        let html = image.render().into_string();
        assert!(html.contains("image-placeholder"));
        assert!(html.contains(r#"class="is-loading""#));
    }

    #[test]
    fn loading_with_empty_placeholder_has_none() {
        let html = ResponsiveImage::new(PHOTO).render().into_string();
        assert!(!html.contains("image-placeholder"));
    }

    #[test]
    fn loading_ships_fallback_template() {
        let html = ResponsiveImage::new(PHOTO).render().into_string();
        assert!(html.contains("image-fallback-template"));
        assert!(html.contains("Image not available"));
    }

    #[test]
    fn eager_flag_maps_to_loading_attribute() {
        let lazy = ResponsiveImage::new(PHOTO).render().into_string();
        assert!(lazy.contains(r#"loading="lazy""#));

        let eager = ResponsiveImage::new(PHOTO.eager()).render().into_string();
        assert!(eager.contains(r#"loading="eager""#));
    }

    #[test]
    fn sizes_default_and_override() {
        let html = ResponsiveImage::new(PHOTO).render().into_string();
        assert!(html.contains(DEFAULT_SIZES));

        let html = ResponsiveImage::new(PHOTO.with_sizes("100vw"))
            .render()
            .into_string();
        assert!(html.contains(r#"sizes="100vw""#));
    }

    #[test]
    fn wrapper_class_is_appended() {
        let html = ResponsiveImage::new(PHOTO)
            .with_class("hero-image")
            .render()
            .into_string();
        assert!(html.contains(r#"class="responsive-image hero-image""#));
    }

    #[test]
    fn alt_text_is_escaped() {
        let desc = ImageDescriptor::new("/x.jpg", "<b>bold</b>");
        let mut image = ResponsiveImage::new(desc);
        image.on_error();
        let html = image.render().into_string();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    // =========================================================================
    // Preload
    // =========================================================================

    #[test]
    fn preload_reads_dimensions_and_skips_missing() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("images")).unwrap();
        image::RgbImage::new(8, 6)
            .save(tmp.path().join("images/hero.png"))
            .unwrap();

        let sources = vec![
            "/images/missing.jpg".to_string(),
            "/images/hero.png".to_string(),
        ];
        let preloaded = preload_critical_images(tmp.path(), &sources);

        assert_eq!(
            preloaded,
            vec![PreloadedImage {
                source: "/images/hero.png".to_string(),
                width: 8,
                height: 6,
            }]
        );
    }

    #[test]
    fn preload_swallows_corrupt_files() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("broken.png"), b"not a png").unwrap();
        let preloaded = preload_critical_images(tmp.path(), &["/broken.png".to_string()]);
        assert!(preloaded.is_empty());
    }
}
