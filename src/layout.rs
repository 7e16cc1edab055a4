//! Shared page chrome: navigation, mobile menu, breadcrumb, footer and the
//! base HTML document.
//!
//! The interactive pieces (mobile menu, breadcrumb anchors) are modeled as
//! small state types here. The rendered markup is derived from those types,
//! and `static/site.js` applies the same transitions in the browser.

use crate::content::company::COMPANY;
use crate::responsive::PreloadedImage;
use crate::types::{BreadcrumbItem, NavItem};
use maud::{DOCTYPE, Markup, html};

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", path: "/" },
    NavItem { label: "About Us", path: "/about" },
    NavItem { label: "Services", path: "/services" },
    NavItem { label: "Portfolio", path: "/portfolio" },
    NavItem { label: "Contact", path: "/contact" },
];

pub const LEGAL_LINKS: &[&str] = &[
    "Privacy Policy",
    "Terms of Service",
    "Accessibility Statement",
    "GDPR Compliance",
];

pub const MAIN_CONTENT_ID: &str = "main-content";
pub const MOBILE_MENU_ID: &str = "mobile-menu";

/// Exact path match. `/about` is not active on `/about/team`.
pub fn is_active(current_path: &str, item_path: &str) -> bool {
    current_path == item_path
}

// ============================================================================
// Mobile menu
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    RouteChanged,
    Escape,
    ItemSelected,
}

/// Open/closed state of the mobile navigation panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Apply one event. Returns `true` if the state changed.
    pub fn apply(&mut self, event: MenuEvent) -> bool {
        let next = match event {
            MenuEvent::Toggle => !self.open,
            MenuEvent::RouteChanged | MenuEvent::ItemSelected => false,
            MenuEvent::Escape if self.open => false,
            MenuEvent::Escape => self.open,
        };
        let changed = next != self.open;
        self.open = next;
        changed
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    pub fn toggle_label(self) -> &'static str {
        if self.open { "Close menu" } else { "Open menu" }
    }
}

// ============================================================================
// Breadcrumb
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreadcrumbAction {
    /// Same page: smooth-scroll to the element with this id, if any.
    ScrollTo(String),
    Navigate(String),
}

/// Decide what clicking a breadcrumb link does when the browser is at
/// `current_path`.
///
/// Paths compare with trailing slashes ignored, since pages are served
/// from `x/index.html` and may be reached as `/x/`. An empty path before
/// the `#` means the current page.
pub fn breadcrumb_click(href: &str, current_path: &str) -> BreadcrumbAction {
    match href.split_once('#') {
        Some((path, fragment))
            if path.is_empty() || trim_slash(path) == trim_slash(current_path) =>
        {
            BreadcrumbAction::ScrollTo(fragment.to_string())
        }
        _ => BreadcrumbAction::Navigate(href.to_string()),
    }
}

fn trim_slash(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

// ============================================================================
// HTML Components
// ============================================================================

/// Site-wide values the base document needs beyond the page itself.
#[derive(Debug, Clone, Copy)]
pub struct Chrome<'a> {
    pub language: &'a str,
    pub stylesheet: &'a str,
    pub script: &'a str,
    pub year: &'a str,
}

/// Everything one page contributes to the base document.
pub struct PageShell<'a> {
    pub current_path: &'a str,
    /// Rendered managed head elements (see [`crate::head`]).
    pub head: Markup,
    pub canonical: Option<&'a str>,
    pub preloads: &'a [PreloadedImage],
    pub content: Markup,
}

pub fn base_document(chrome: &Chrome<'_>, page: PageShell<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(chrome.language) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                (page.head)
                @if let Some(canonical) = page.canonical {
                    link rel="canonical" href=(canonical);
                }
                @for image in page.preloads {
                    link rel="preload" as="image" href=(image.source);
                }
                link rel="stylesheet" href=(chrome.stylesheet);
                script src=(chrome.script) defer {}
            }
            body {
                div.site {
                    (skip_link())
                    header role="banner" {
                        (render_nav(page.current_path, MobileMenu::default()))
                    }
                    main id=(MAIN_CONTENT_ID) role="main" tabindex="-1" {
                        (page.content)
                    }
                    footer role="contentinfo" {
                        (render_footer(chrome.year))
                    }
                }
            }
        }
    }
}

fn skip_link() -> Markup {
    html! {
        a.skip-link href={ "#" (MAIN_CONTENT_ID) } { "Skip to main content" }
    }
}

/// Sticky top navigation with desktop links and the mobile panel.
pub fn render_nav(current_path: &str, menu: MobileMenu) -> Markup {
    html! {
        nav.site-nav role="navigation" aria-label="Main navigation" {
            div.container.nav-bar {
                a.brand href="/" aria-label={ (COMPANY.name) " - Home" } {
                    span.brand-mark aria-hidden="true" { "IT" }
                    span.brand-name { (COMPANY.name) }
                }
                div.nav-desktop {
                    @for item in NAV_ITEMS {
                        (render_nav_link(item, current_path, false))
                    }
                    (profile_button())
                }
                button.menu-toggle type="button"
                    aria-label=(menu.toggle_label())
                    aria-expanded=(menu.aria_expanded())
                    aria-controls=(MOBILE_MENU_ID) {
                    span.menu-icon aria-hidden="true" {}
                }
            }
            div.container.nav-mobile id=(MOBILE_MENU_ID) role="menu"
                aria-label="Mobile navigation menu" hidden[!menu.is_open()] {
                @for item in NAV_ITEMS {
                    (render_nav_link(item, current_path, true))
                }
                (profile_button())
            }
        }
    }
}

fn render_nav_link(item: &NavItem, current_path: &str, in_menu: bool) -> Markup {
    let active = is_active(current_path, item.path);
    let class = if active { "nav-link active" } else { "nav-link" };
    html! {
        a class=(class) href=(item.path)
            role=[in_menu.then_some("menuitem")]
            aria-current=[active.then_some("page")] {
            (item.label)
        }
    }
}

fn profile_button() -> Markup {
    html! {
        button.button.outline.profile-button type="button" aria-label="Download company profile" {
            "Company Profile"
        }
    }
}

/// Breadcrumb trail. Items without an `href` render as plain text.
pub fn render_breadcrumb(items: &[BreadcrumbItem]) -> Markup {
    html! {
        nav.breadcrumb aria-label="Breadcrumb" {
            ol {
                @for (idx, item) in items.iter().enumerate() {
                    li {
                        @if idx > 0 {
                            span.separator aria-hidden="true" { "›" }
                        }
                        @match &item.href {
                            Some(href) => {
                                a href=(href) data-breadcrumb-link { (item.label) }
                            }
                            None => {
                                span aria-current="page" { (item.label) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_footer(year: &str) -> Markup {
    html! {
        div.site-footer {
            div.container.footer-grid {
                div {
                    div.brand {
                        span.brand-mark aria-hidden="true" { "IT" }
                        span.brand-name { (COMPANY.name) }
                    }
                    p.muted { "Delivering reliable IT services to Irish public sector organisations." }
                    p.muted.small { (COMPANY.registration) }
                }
                div {
                    h3 { "Quick Links" }
                    ul {
                        @for item in NAV_ITEMS {
                            li { a href=(item.path) { (item.label) } }
                        }
                    }
                }
                div {
                    h3 { "Legal" }
                    ul {
                        @for label in LEGAL_LINKS {
                            li { a href="#" { (label) } }
                        }
                    }
                }
            }
            p.container.copyright {
                "© " (year) " " (COMPANY.name) ". All rights reserved."
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
