//! Route table and path resolution.
//!
//! | Path | Output file |
//! |------|-------------|
//! | `/` | `index.html` |
//! | `/about` | `about/index.html` |
//! | `/services` | `services/index.html` |
//! | `/portfolio` | `portfolio/index.html` |
//! | `/contact` | `contact/index.html` |
//! | `/team/{id}` | `team/{id}/index.html` |
//!
//! A team path whose id matches no member redirects to `/about`. Since the
//! site is static, that redirect is also carried by `404.html` for paths
//! that were never generated.

use crate::content::{TeamMember, find_member, team::TEAM};
use crate::seo::StructuredDataKind;
use std::path::PathBuf;

pub const TEAM_PREFIX: &str = "/team/";
pub const UNKNOWN_MEMBER_REDIRECT: &str = "/about";
pub const NOT_FOUND_FILE: &str = "404.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Services,
    Portfolio,
    Contact,
    TeamMember(&'static TeamMember),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Page(Route),
    Redirect(&'static str),
    NotFound,
}

impl Route {
    /// Every route the site generates, top-level pages first.
    pub fn all() -> Vec<Route> {
        let mut routes = vec![
            Route::Home,
            Route::About,
            Route::Services,
            Route::Portfolio,
            Route::Contact,
        ];
        routes.extend(TEAM.iter().map(Route::TeamMember));
        routes
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Services => "/services".to_string(),
            Route::Portfolio => "/portfolio".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::TeamMember(member) => format!("{TEAM_PREFIX}{}", member.id),
        }
    }

    /// Output file relative to the site root.
    pub fn output_path(&self) -> PathBuf {
        let path = self.path();
        let dir = path.trim_start_matches('/');
        if dir.is_empty() {
            PathBuf::from("index.html")
        } else {
            PathBuf::from(dir).join("index.html")
        }
    }

    /// Key into [`crate::seo::resolve`]. Team pages have no base record.
    pub fn seo_key(&self) -> Option<&'static str> {
        match self {
            Route::Home => Some("home"),
            Route::About => Some("about"),
            Route::Services => Some("services"),
            Route::Portfolio => Some("portfolio"),
            Route::Contact => Some("contact"),
            Route::TeamMember(_) => None,
        }
    }

    /// The schema.org record embedded in the page, if any.
    pub fn structured_data(&self) -> Option<StructuredDataKind> {
        match self {
            Route::Home | Route::About | Route::Contact => Some(StructuredDataKind::Organization),
            Route::Services => Some(StructuredDataKind::Service),
            Route::Portfolio => Some(StructuredDataKind::Article),
            Route::TeamMember(_) => None,
        }
    }

    /// Look up a top-level route by its SEO page key.
    pub fn from_seo_key(key: &str) -> Option<Route> {
        Route::all().into_iter().find(|r| r.seo_key() == Some(key))
    }
}

/// Resolve a request path. Query strings, fragments and a trailing slash
/// are ignored.
pub fn resolve(path: &str) -> Resolution {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    match path {
        "/" => Resolution::Page(Route::Home),
        "/about" => Resolution::Page(Route::About),
        "/services" => Resolution::Page(Route::Services),
        "/portfolio" => Resolution::Page(Route::Portfolio),
        "/contact" => Resolution::Page(Route::Contact),
        _ => match path.strip_prefix(TEAM_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => match find_member(id) {
                Some(member) => Resolution::Page(Route::TeamMember(member)),
                None => Resolution::Redirect(UNKNOWN_MEMBER_REDIRECT),
            },
            _ => Resolution::NotFound,
        },
    }
}
