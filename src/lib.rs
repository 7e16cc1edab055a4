//! # civic-site
//!
//! Static site generator for the Public Sector IT Solutions marketing
//! website. All copy is compiled into the binary; a build renders every route
//! to plain HTML, writes a fingerprinted stylesheet and a small vanilla
//! script, and copies the public directory.
//!
//! # Architecture
//!
//! ```text
//! content ─▶ seo ─▶ head ─▶ pages ─▶ generate ─▶ dist/
//!                            ▲
//!               layout ──────┤
//!               responsive ──┘
//! ```
//!
//! Pages are rendered independently and in parallel. Each render mounts its
//! metadata into its own [`head::Head`] and releases it when done.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Company info, services, projects, team, image descriptors, page copy |
//! | [`seo`] | Per-page metadata resolution and schema.org structured data |
//! | [`head`] | Managed `<head>` elements with upsert semantics and a scoped mount guard |
//! | [`responsive`] | Image load state machine, responsive `<img>` markup, critical-image preload |
//! | [`layout`] | Navigation, mobile menu, breadcrumb, footer, base document |
//! | [`pages`] | One template per route plus `404.html` |
//! | [`routes`] | Route table, path resolution, output paths |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`generate`] | Writes the whole site to an output directory |
//! | [`types`] | Shared records (`NavItem`, `BreadcrumbItem`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Browser Behavior as Rust State
//!
//! The interactive parts of the site (image load/error, mobile menu,
//! breadcrumb anchors, the unknown-team-member redirect) are small state
//! types in Rust. Their initial state renders the HTML, and `static/site.js`
//! applies the same transitions in the browser. The script never builds
//! markup of its own: error fallbacks ship in `<template>` elements.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Malformed templates are a build error and all interpolation
//! is auto-escaped.

pub mod config;
pub mod content;
pub mod generate;
pub mod head;
pub mod layout;
pub mod output;
pub mod pages;
pub mod responsive;
pub mod routes;
pub mod seo;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
