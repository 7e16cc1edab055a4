//! Image descriptors shared by several pages.

use crate::responsive::{ImageDescriptor, Placeholder};

/// `sizes` hint for images laid out in the three-column project grid.
pub const GRID_SIZES: &str = "(max-width: 768px) 100vw, (max-width: 1200px) 50vw, 33vw";

pub const HERO: ImageDescriptor<'static> = ImageDescriptor::new(
    "/images/hero-bg.jpg",
    "Modern government office with digital technology",
)
.with_sizes("100vw")
.eager();

pub const TEAM_WORKING: ImageDescriptor<'static> = ImageDescriptor::new(
    "/images/team-working.jpg",
    "Professional team collaborating on government IT solutions",
)
.with_sizes("(max-width: 768px) 100vw, 50vw")
.with_placeholder(Placeholder::Blur);

/// Images fetched ahead of first paint on the home page.
///
/// Overridable through `images.preload` in `config.toml`.
pub const CRITICAL_IMAGES: &[&str] = &[HERO.source, TEAM_WORKING.source];

/// Project screenshot with the grid `sizes` hint and a blur placeholder.
pub const fn project_image(source: &'static str, alt: &'static str) -> ImageDescriptor<'static> {
    ImageDescriptor::new(source, alt)
        .with_sizes(GRID_SIZES)
        .with_placeholder(Placeholder::Blur)
}
