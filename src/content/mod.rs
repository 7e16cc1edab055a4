//! Content store: the static, immutable data every page is rendered from.
//!
//! Nothing here has behavior beyond lookup. Records borrow `'static` strings
//! so the whole store lives in the binary's read-only data.
//!
//! | Module | Holds |
//! |--------|-------|
//! | [`company`] | Company identity, contact details, home/about/contact copy |
//! | [`services`] | Service offerings and the delivery approach |
//! | [`projects`] | Portfolio demonstration projects |
//! | [`team`] | Team members (the authoritative team list) |
//! | [`images`] | Image descriptors and the critical-image preload list |

pub mod company;
pub mod images;
pub mod projects;
pub mod services;
pub mod team;

use crate::responsive::ImageDescriptor;

pub use team::find_member;

/// Company identity used by the chrome, the contact page and structured data.
#[derive(Debug, Clone, Copy)]
pub struct CompanyInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    /// Same number in E.164-ish form for `tel:` links and schema.org.
    pub phone_intl: &'static str,
    pub address: Address,
    pub social: SocialLinks,
    pub registration: &'static str,
    pub founded: &'static str,
    pub logo: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Address {
    pub street: &'static str,
    pub city: &'static str,
    pub county: &'static str,
    pub postcode: &'static str,
    pub country: &'static str,
    /// ISO 3166-1 alpha-2
    pub country_code: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLinks {
    pub linkedin: &'static str,
    pub twitter: &'static str,
    pub website: &'static str,
}

/// A titled card: core services on the home page, values, selling points.
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline figure such as "24/7 Technical Support".
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// One numbered phase of the delivery approach.
#[derive(Debug, Clone, Copy)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub image: ImageDescriptor<'static>,
    pub problem: &'static str,
    pub solution: &'static str,
    pub technologies: &'static [&'static str],
    pub outcome: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    /// URL slug used by the `/team/{id}` route.
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    /// Portrait path; members without one render their initials.
    pub image: Option<&'static str>,
    pub initials: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub linkedin: Option<&'static str>,
    pub experience: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub education: &'static [&'static str],
    /// Empty when the member lists none; the section is then omitted.
    pub certifications: &'static [&'static str],
}
