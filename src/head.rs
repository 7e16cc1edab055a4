//! Document head synchronization.
//!
//! The `<head>` elements a page controls are an explicit, closed set of
//! [`HeadKey`]s. A [`Head`] stores at most one value per key, so applying
//! the same [`PageMetadata`] twice cannot create duplicates: every write is
//! an upsert.
//!
//! ## Managed elements
//!
//! | Key | Element |
//! |-----|---------|
//! | `Title` | `<title>` |
//! | `Description`, `Keywords` | `<meta name="…">` |
//! | `OgTitle`, `OgDescription`, `OgType`, `OgImage` | `<meta property="og:…">` |
//! | `TwitterCard`, `TwitterTitle`, `TwitterDescription` | `<meta name="twitter:…">` |
//! | `StructuredData` | `<script type="application/ld+json">` |
//!
//! `Keywords` and `OgImage` are only written when the metadata carries them.
//!
//! ## Ownership of the structured-data script
//!
//! [`Head::mount`] returns a [`MountedHead`] guard. The guard owns the
//! structured-data script it wrote and removes it when dropped, whichever
//! way the scope is left. Title and meta tags stay in place; the next page
//! to mount overwrites them.

use crate::seo::PageMetadata;
use maud::{Markup, PreEscaped, html};
use serde_json::Value;
use std::collections::BTreeMap;
use std::ops::Deref;

/// Twitter card style used for every page.
pub const TWITTER_CARD: &str = "summary_large_image";

/// One managed head element. Declaration order is render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadKey {
    Title,
    Description,
    Keywords,
    OgTitle,
    OgDescription,
    OgType,
    OgImage,
    TwitterCard,
    TwitterTitle,
    TwitterDescription,
    StructuredData,
}

/// How a key is addressed in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadTag {
    Title,
    /// `<meta name="…">`
    MetaName(&'static str),
    /// `<meta property="…">`
    MetaProperty(&'static str),
    JsonLd,
}

impl HeadKey {
    pub const ALL: [HeadKey; 11] = [
        HeadKey::Title,
        HeadKey::Description,
        HeadKey::Keywords,
        HeadKey::OgTitle,
        HeadKey::OgDescription,
        HeadKey::OgType,
        HeadKey::OgImage,
        HeadKey::TwitterCard,
        HeadKey::TwitterTitle,
        HeadKey::TwitterDescription,
        HeadKey::StructuredData,
    ];

    pub fn tag(self) -> HeadTag {
        match self {
            Self::Title => HeadTag::Title,
            Self::Description => HeadTag::MetaName("description"),
            Self::Keywords => HeadTag::MetaName("keywords"),
            Self::OgTitle => HeadTag::MetaProperty("og:title"),
            Self::OgDescription => HeadTag::MetaProperty("og:description"),
            Self::OgType => HeadTag::MetaProperty("og:type"),
            Self::OgImage => HeadTag::MetaProperty("og:image"),
            Self::TwitterCard => HeadTag::MetaName("twitter:card"),
            Self::TwitterTitle => HeadTag::MetaName("twitter:title"),
            Self::TwitterDescription => HeadTag::MetaName("twitter:description"),
            Self::StructuredData => HeadTag::JsonLd,
        }
    }

    /// CSS selector that locates this element in a rendered document.
    pub fn selector(self) -> String {
        match self.tag() {
            HeadTag::Title => "title".to_string(),
            HeadTag::MetaName(name) => format!(r#"meta[name="{name}"]"#),
            HeadTag::MetaProperty(property) => format!(r#"meta[property="{property}"]"#),
            HeadTag::JsonLd => r#"script[type="application/ld+json"]"#.to_string(),
        }
    }

    pub fn is_open_graph(self) -> bool {
        matches!(self.tag(), HeadTag::MetaProperty(p) if p.starts_with("og:"))
    }

    pub fn is_twitter(self) -> bool {
        matches!(self.tag(), HeadTag::MetaName(n) if n.starts_with("twitter:"))
    }
}

/// The managed part of a document head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Head {
    entries: BTreeMap<HeadKey, String>,
}

impl Head {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: HeadKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: HeadKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Keys currently present, in render order.
    pub fn keys(&self) -> impl Iterator<Item = HeadKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or overwrite one element. Returns `true` if the head changed.
    pub fn upsert(&mut self, key: HeadKey, content: impl Into<String>) -> bool {
        let content = content.into();
        if self.get(key) == Some(content.as_str()) {
            return false;
        }
        self.entries.insert(key, content);
        true
    }

    pub fn remove(&mut self, key: HeadKey) -> Option<String> {
        self.entries.remove(&key)
    }

    /// Bring the head in line with `meta` and optional structured data.
    ///
    /// Returns how many elements were created or changed; a repeat call with
    /// the same input returns 0.
    pub fn sync(&mut self, meta: &PageMetadata, structured: Option<&Value>) -> usize {
        let mut changed = 0;
        let mut put = |head: &mut Self, key, content: String| {
            if head.upsert(key, content) {
                changed += 1;
            }
        };

        put(self, HeadKey::Title, meta.title.clone());
        put(self, HeadKey::Description, meta.description.clone());
        if let Some(keywords) = &meta.keywords {
            put(self, HeadKey::Keywords, keywords.join(", "));
        }

        put(self, HeadKey::OgTitle, meta.title.clone());
        put(self, HeadKey::OgDescription, meta.description.clone());
        put(self, HeadKey::OgType, meta.kind.as_str().to_string());
        if let Some(image) = &meta.image {
            put(self, HeadKey::OgImage, image.clone());
        }

        put(self, HeadKey::TwitterCard, TWITTER_CARD.to_string());
        put(self, HeadKey::TwitterTitle, meta.title.clone());
        put(self, HeadKey::TwitterDescription, meta.description.clone());

        if let Some(data) = structured {
            put(self, HeadKey::StructuredData, data.to_string());
        }
        changed
    }

    /// Synchronize and hand back a guard that owns the structured-data
    /// script for as long as the page stays mounted.
    pub fn mount(&mut self, meta: &PageMetadata, structured: Option<&Value>) -> MountedHead<'_> {
        self.sync(meta, structured);
        MountedHead {
            head: self,
            owns_script: structured.is_some(),
        }
    }

    pub fn render(&self) -> Markup {
        html! {
            @for (key, content) in &self.entries {
                (render_entry(*key, content))
            }
        }
    }
}

fn render_entry(key: HeadKey, content: &str) -> Markup {
    match key.tag() {
        HeadTag::Title => html! { title { (content) } },
        HeadTag::MetaName(name) => html! { meta name=(name) content=(content); },
        HeadTag::MetaProperty(property) => html! { meta property=(property) content=(content); },
        HeadTag::JsonLd => html! {
            script type="application/ld+json" { (PreEscaped(escape_script_json(content))) }
        },
    }
}

/// `<` only occurs inside JSON strings, where the `\u003c` escape decodes
/// to the same text and cannot close the surrounding `<script>`.
fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

/// A page's hold on the head. See the module docs.
#[derive(Debug)]
pub struct MountedHead<'h> {
    head: &'h mut Head,
    owns_script: bool,
}

impl MountedHead<'_> {
    /// Re-synchronize after the page's metadata or structured data changed.
    ///
    /// The owned script is upserted in place and only removed when the new
    /// input has no structured data, so an identical resync returns 0.
    pub fn resync(&mut self, meta: &PageMetadata, structured: Option<&Value>) -> usize {
        let mut changed = 0;
        if structured.is_none() && self.owns_script {
            self.release();
            changed += 1;
        }
        changed += self.head.sync(meta, structured);
        if structured.is_some() {
            self.owns_script = true;
        }
        changed
    }

    fn release(&mut self) {
        if self.owns_script {
            self.head.remove(HeadKey::StructuredData);
            self.owns_script = false;
        }
    }
}

impl Deref for MountedHead<'_> {
    type Target = Head;

    fn deref(&self) -> &Head {
        self.head
    }
}

impl Drop for MountedHead<'_> {
    fn drop(&mut self) {
        self.release();
    }
}
