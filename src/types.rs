//! Shared types used by the layout chrome, the page templates and the router.
//!
//! These are plain records; all behavior lives in [`crate::layout`] and
//! [`crate::routes`].

/// A top-level navigation entry.
///
/// The list is static and compared against the current path for
/// active-state highlighting (see [`crate::layout::is_active`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// One step of a breadcrumb trail.
///
/// The last item usually has no `href` and renders as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: Option<String>,
}

impl BreadcrumbItem {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}
