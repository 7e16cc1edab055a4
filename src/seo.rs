//! SEO metadata resolution and schema.org structured data.
//!
//! [`resolve`] maps a page key plus optional overrides to a complete
//! [`PageMetadata`] record. Layers are applied field by field, later wins:
//!
//! ```text
//! site default  <  per-page base  <  caller overrides
//! ```
//!
//! Keyword lists are replaced wholesale, never merged element-wise. An
//! unknown page key is not an error: the site default comes back unchanged.
//!
//! [`structured_data`] builds the JSON-LD object embedded in each page's
//! head. It switches on the kind name and returns `None` for anything it
//! does not recognise.

use crate::content::company::COMPANY;
use serde::Serialize;
use serde_json::{Value, json};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// `og:type` of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    #[default]
    Website,
    Article,
    Service,
}

impl PageType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
            Self::Service => "service",
        }
    }
}

/// Fully resolved metadata for one page.
///
/// `title` and `description` are never empty: the site default provides
/// both and empty overrides are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub kind: PageType,
}

/// Caller-supplied overrides; `None` fields leave the lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub kind: Option<PageType>,
}

impl PageOverrides {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn kind(mut self, kind: PageType) -> Self {
        self.kind = Some(kind);
        self
    }

    fn apply(&self, meta: &mut PageMetadata) {
        if let Some(title) = self.title.as_ref().filter(|t| !t.is_empty()) {
            meta.title = title.clone();
        }
        if let Some(description) = self.description.as_ref().filter(|d| !d.is_empty()) {
            meta.description = description.clone();
        }
        if let Some(keywords) = &self.keywords {
            meta.keywords = Some(keywords.clone());
        }
        if let Some(image) = &self.image {
            meta.image = Some(image.clone());
        }
        if let Some(url) = &self.url {
            meta.url = Some(url.clone());
        }
        if let Some(kind) = self.kind {
            meta.kind = kind;
        }
    }
}

// ============================================================================
// Per-page base records
// ============================================================================

struct PageSeo {
    key: &'static str,
    title: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
}

const DEFAULT_TITLE: &str = "Public Sector IT Solutions | Government Digital Transformation Ireland";
const DEFAULT_DESCRIPTION: &str = "Leading provider of IT solutions and digital transformation services for \
the Irish public sector. Specializing in government technology, cloud migration, and citizen services.";
const DEFAULT_KEYWORDS: &[&str] = &[
    "public sector IT",
    "government technology",
    "digital transformation",
    "Ireland",
    "cloud migration",
    "cybersecurity",
    "citizen services",
    "government consulting",
];
const DEFAULT_IMAGE: &str = "/images/og-image.jpg";

const PAGE_SEO: &[PageSeo] = &[
    PageSeo {
        key: "home",
        title: DEFAULT_TITLE,
        description: DEFAULT_DESCRIPTION,
        keywords: &[
            "public sector IT",
            "government technology",
            "digital transformation",
            "Ireland",
        ],
    },
    PageSeo {
        key: "about",
        title: "About Us | Public Sector IT Solutions",
        description: "Learn about our team of experts specializing in public sector digital transformation. \
15+ years of experience delivering innovative IT solutions for Irish government organizations.",
        keywords: &["about", "team", "experience", "public sector experts", "Ireland"],
    },
    PageSeo {
        key: "services",
        title: "Our Services | Public Sector IT Solutions",
        description: "Comprehensive IT services for the public sector including digital transformation, \
cloud migration, cybersecurity, and citizen service platforms. Government-focused solutions.",
        keywords: &[
            "services",
            "digital transformation",
            "cloud migration",
            "cybersecurity",
            "citizen services",
        ],
    },
    PageSeo {
        key: "portfolio",
        title: "Portfolio & Case Studies | Public Sector IT Solutions",
        description: "Explore our public sector demonstration projects including messaging platforms, admin \
dashboards, cloud migrations and secure document portals. Proven approaches for government clients.",
        keywords: &[
            "portfolio",
            "case studies",
            "projects",
            "government clients",
            "success stories",
        ],
    },
    PageSeo {
        key: "contact",
        title: "Contact Us | Public Sector IT Solutions",
        description: "Get in touch with our public sector IT experts. Based in Dublin, Ireland. Contact us \
for government digital transformation and IT consulting services.",
        keywords: &["contact", "Dublin", "Ireland", "consultation", "government IT"],
    },
];

/// Page keys that have a base record.
pub fn page_keys() -> impl Iterator<Item = &'static str> {
    PAGE_SEO.iter().map(|p| p.key)
}

/// The site-wide default record.
pub fn default_metadata() -> PageMetadata {
    PageMetadata {
        title: DEFAULT_TITLE.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
        keywords: Some(to_strings(DEFAULT_KEYWORDS)),
        image: Some(DEFAULT_IMAGE.to_string()),
        url: None,
        kind: PageType::Website,
    }
}

/// Resolve the metadata for `page_key`, applying `overrides` last.
pub fn resolve(page_key: &str, overrides: Option<&PageOverrides>) -> PageMetadata {
    let mut meta = default_metadata();
    if let Some(base) = PAGE_SEO.iter().find(|p| p.key == page_key) {
        meta.title = base.title.to_string();
        meta.description = base.description.to_string();
        meta.keywords = Some(to_strings(base.keywords));
    }
    if let Some(overrides) = overrides {
        overrides.apply(&mut meta);
    }
    meta
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Structured data
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuredDataKind {
    Organization,
    Service,
    Article,
}

/// Fields a structured-data record takes from the entity it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySummary<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a PageMetadata> for EntitySummary<'a> {
    fn from(meta: &'a PageMetadata) -> Self {
        Self {
            title: &meta.title,
            description: &meta.description,
        }
    }
}

impl StructuredDataKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "organization" => Some(Self::Organization),
            "service" => Some(Self::Service),
            "article" => Some(Self::Article),
            _ => None,
        }
    }

    /// Build the schema.org record. Organization ignores the payload.
    pub fn build(self, payload: &EntitySummary<'_>) -> Value {
        let base_url = COMPANY.social.website;
        let logo = format!("{base_url}{}", COMPANY.logo);
        match self {
            Self::Organization => json!({
                "@context": SCHEMA_CONTEXT,
                "@type": "Organization",
                "name": COMPANY.name,
                "description": COMPANY.description,
                "url": base_url,
                "logo": logo,
                "contactPoint": {
                    "@type": "ContactPoint",
                    "telephone": COMPANY.phone_intl,
                    "contactType": "customer service",
                    "email": COMPANY.email,
                },
                "address": {
                    "@type": "PostalAddress",
                    "streetAddress": COMPANY.address.street,
                    "addressLocality": COMPANY.address.city,
                    "addressRegion": COMPANY.address.county,
                    "postalCode": COMPANY.address.postcode,
                    "addressCountry": COMPANY.address.country_code,
                },
                "sameAs": [COMPANY.social.linkedin, COMPANY.social.twitter],
            }),
            Self::Service => json!({
                "@context": SCHEMA_CONTEXT,
                "@type": "Service",
                "name": payload.title,
                "description": payload.description,
                "provider": {
                    "@type": "Organization",
                    "name": COMPANY.name,
                },
                "serviceType": "IT Consulting",
                "areaServed": COMPANY.address.country,
            }),
            Self::Article => json!({
                "@context": SCHEMA_CONTEXT,
                "@type": "Article",
                "headline": payload.title,
                "description": payload.description,
                "author": {
                    "@type": "Organization",
                    "name": COMPANY.name,
                },
                "publisher": {
                    "@type": "Organization",
                    "name": COMPANY.name,
                    "logo": {
                        "@type": "ImageObject",
                        "url": logo,
                    },
                },
            }),
        }
    }
}

/// Build structured data for a kind given by name.
///
/// Returns `None` for unrecognised kinds.
pub fn structured_data(kind: &str, payload: &EntitySummary<'_>) -> Option<Value> {
    StructuredDataKind::parse(kind).map(|k| k.build(payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> EntitySummary<'static> {
        EntitySummary {
            title: "Cloud Migration",
            description: "Moving workloads",
        }
    }

    // =========================================================================
    // resolve
    // =========================================================================

    #[test]
    fn every_page_key_resolves_non_empty() {
        for key in page_keys() {
            let meta = resolve(key, None);
            assert!(!meta.title.is_empty(), "{key} has empty title");
            assert!(!meta.description.is_empty(), "{key} has empty description");
        }
    }

    #[test]
    fn page_keys_cover_all_static_routes() {
        let keys: Vec<_> = page_keys().collect();
        assert_eq!(keys, vec!["home", "about", "services", "portfolio", "contact"]);
    }

    #[test]
    fn unknown_key_returns_default_unchanged() {
        assert_eq!(resolve("unknown-key", None), default_metadata());
    }

    #[test]
    fn title_override_changes_only_title() {
        let base = resolve("about", None);
        let overridden = resolve("about", Some(&PageOverrides::default().title("X")));

        assert_eq!(overridden.title, "X");
        assert_eq!(
            PageMetadata {
                title: base.title.clone(),
                ..overridden
            },
            base
        );
    }

    #[test]
    fn page_base_inherits_default_image_and_type() {
        let meta = resolve("services", None);
        assert_eq!(meta.image.as_deref(), Some(DEFAULT_IMAGE));
        assert_eq!(meta.kind, PageType::Website);
        assert_eq!(meta.url, None);
    }

    #[test]
    fn page_base_replaces_keywords_wholesale() {
        let meta = resolve("about", None);
        let keywords = meta.keywords.unwrap();
        assert_eq!(keywords.len(), 5);
        assert!(!keywords.contains(&"cybersecurity".to_string()));
    }

    #[test]
    fn keyword_override_replaces_not_merges() {
        let meta = resolve("home", Some(&PageOverrides::default().keywords(["only"])));
        assert_eq!(meta.keywords, Some(vec!["only".to_string()]));
    }

    #[test]
    fn overrides_apply_to_unknown_keys() {
        let overrides = PageOverrides::default()
            .title("Team")
            .url("https://example.ie/team/x")
            .kind(PageType::Article);
        let meta = resolve("team", Some(&overrides));
        assert_eq!(meta.title, "Team");
        assert_eq!(meta.description, DEFAULT_DESCRIPTION);
        assert_eq!(meta.url.as_deref(), Some("https://example.ie/team/x"));
        assert_eq!(meta.kind, PageType::Article);
    }

    #[test]
    fn empty_overrides_cannot_blank_title_or_description() {
        let overrides = PageOverrides::default().title("").description("");
        let meta = resolve("contact", Some(&overrides));
        assert_eq!(meta, resolve("contact", None));
    }

    #[test]
    fn metadata_serializes_type_field() {
        let json = serde_json::to_value(resolve("home", None)).unwrap();
        assert_eq!(json["type"], "website");
        assert!(json.get("url").is_none());
    }

    // =========================================================================
    // structured_data
    // =========================================================================

    #[test]
    fn unknown_kind_yields_none() {
        assert!(structured_data("person", &summary()).is_none());
        assert!(structured_data("", &summary()).is_none());
        assert!(structured_data("Organization", &summary()).is_none());
    }

    #[test]
    fn organization_record() {
        let data = structured_data("organization", &summary()).unwrap();
        assert_eq!(data["@context"], "https://schema.org");
        assert_eq!(data["@type"], "Organization");
        assert_eq!(data["name"], COMPANY.name);
        assert_eq!(data["address"]["addressCountry"], "IE");
        assert_eq!(data["sameAs"].as_array().unwrap().len(), 2);
        assert!(data["logo"].as_str().unwrap().ends_with("/images/logo.png"));
    }

    #[test]
    fn service_record_uses_payload() {
        let data = structured_data("service", &summary()).unwrap();
        assert_eq!(data["@type"], "Service");
        assert_eq!(data["name"], "Cloud Migration");
        assert_eq!(data["description"], "Moving workloads");
        assert_eq!(data["provider"]["name"], COMPANY.name);
        assert_eq!(data["areaServed"], "Ireland");
    }

    #[test]
    fn article_record_uses_payload() {
        let data = structured_data("article", &summary()).unwrap();
        assert_eq!(data["@type"], "Article");
        assert_eq!(data["headline"], "Cloud Migration");
        assert_eq!(data["publisher"]["logo"]["@type"], "ImageObject");
    }

    #[test]
    fn summary_from_metadata() {
        let meta = resolve("portfolio", None);
        let summary = EntitySummary::from(&meta);
        assert_eq!(summary.title, meta.title);
        assert_eq!(summary.description, meta.description);
    }
}
