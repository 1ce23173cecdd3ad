//! Site/Page Record model - the JSON content document that drives a skin
//!
//! The record is loosely typed on purpose: known fields are deserialized into
//! `Option`s and everything else lands in an order-preserving `extra` map so
//! placeholder substitution can see keys the model never heard of.

mod media;
mod menu;

pub use media::{MediaFile, MediaRef, Slot};
pub use menu::{MenuItem, SubmenuItem};

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors at the record loading boundary
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("could not read record file: {0}")]
    Io(#[from] std::io::Error),

    #[error("record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record root must be a JSON object")]
    NotAnObject,
}

/// The site-level record from `data.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteRecord {
    // Identity
    pub name: Option<String>,
    pub url: Option<String>,
    pub template: Option<String>,
    pub language_code: Option<String>,

    // SEO flags
    pub allow_indexing: bool,
    pub redirect_404s_to_homepage: bool,
    pub use_www_version: bool,

    // Unified copy fields
    pub site_name: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_badge: Option<String>,
    pub cta_text: Option<String>,
    pub logo_url: Option<String>,
    pub accent_color: Option<String>,
    pub tagline: Option<String>,
    pub features_list: Option<String>,
    pub footer_text: Option<String>,
    pub popup_text: Option<String>,

    // Color theme
    pub main_background: Option<String>,
    pub secondary_background: Option<String>,
    pub button_background: Option<String>,
    pub button_text: Option<String>,
    pub text_color: Option<String>,
    pub color_highlight_text: Option<String>,

    // Rich text content with inline {{tokens}}
    pub content: Option<String>,

    // Raw HTML injected into <head>, passed through verbatim
    pub html_head: Option<String>,

    // Repeatable components
    #[serde(rename = "Slots")]
    pub slots: Option<Vec<Slot>>,
    pub header_menu: Option<Vec<MenuItem>>,
    pub footer_menu: Option<Vec<MenuItem>>,

    // Per-slug pages
    pub pages: Vec<PageRecord>,

    // Export metadata
    #[serde(rename = "_generated_at")]
    pub generated_at: Option<String>,
    #[serde(rename = "_version")]
    pub version: Option<String>,

    /// Any other top-level fields, in document order
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A per-slug page inside the record's `pages` collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRecord {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,

    // SEO
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub html_head: Option<String>,

    // Hero
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_badge: Option<String>,
    pub hero_image: Option<MediaRef>,

    // CTA
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,

    pub accent_color: Option<String>,
    pub tagline: Option<String>,
    pub features_list: Option<String>,
    pub footer_text: Option<String>,
    pub popup_text: Option<String>,

    pub sections: Vec<ContentSection>,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A layout-variant content block on a slug page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSection {
    pub id: Option<i64>,
    pub heading: Option<String>,
    pub text: Option<String>,
    pub image: Option<MediaRef>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub layout: Option<String>,
}

/// A loaded record: the typed view plus the raw document
///
/// The raw `Value` is kept so placeholder lookup covers every top-level key,
/// including the ones only present in `extra`.
#[derive(Debug, Clone)]
pub struct Record {
    pub site: SiteRecord,
    raw: Value,
}

impl Record {
    /// Load and parse the record from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RecordError> {
        let text = fs::read_to_string(path.as_ref())?;
        let value: Value = serde_json::from_str(&text)?;
        Self::from_value(value)
    }

    /// Build a record from an already-parsed JSON document
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        if !value.is_object() {
            return Err(RecordError::NotAnObject);
        }
        let site: SiteRecord = serde_json::from_value(value.clone())?;
        Ok(Self { site, raw: value })
    }

    /// Look up a top-level field by name for placeholder substitution
    ///
    /// Null values count as absent so tokens referencing them pass through.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.raw.get(name).filter(|v| !v.is_null())
    }

    /// Iterate the record's top-level fields in document order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.raw
            .as_object()
            .into_iter()
            .flatten()
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Find a page by its slug field
    pub fn find_page(&self, slug: &str) -> Option<&PageRecord> {
        self.site
            .pages
            .iter()
            .find(|p| p.slug.as_deref() == Some(slug))
    }
}

impl PageRecord {
    /// The slug this page is emitted under, sanitized for use as a path
    /// segment. `None` when the record carries no usable slug.
    pub fn output_slug(&self) -> Option<String> {
        let raw = self.slug.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        let sanitized = slug::slugify(raw);
        if sanitized.is_empty() {
            None
        } else {
            Some(sanitized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_minimal_record() {
        let record = Record::from_value(json!({
            "name": "Nova Casino",
            "url": "https://nova.example",
            "language_code": "en",
            "allow_indexing": true,
        }))
        .unwrap();

        assert_eq!(record.site.name.as_deref(), Some("Nova Casino"));
        assert!(record.site.allow_indexing);
        assert!(!record.site.redirect_404s_to_homepage);
        assert!(record.site.pages.is_empty());
    }

    #[test]
    fn test_extra_fields_preserved_in_order() {
        let record = Record::from_value(json!({
            "name": "Nova",
            "zeta": 1,
            "alpha": "two",
            "beta": true,
        }))
        .unwrap();

        let keys: Vec<&str> = record.site.extra.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "beta"]);
    }

    #[test]
    fn test_field_lookup_sees_typed_and_extra_keys() {
        let record = Record::from_value(json!({
            "name": "Nova",
            "bonus_code": "SPIN200",
            "empty": null,
        }))
        .unwrap();

        assert_eq!(record.field("name"), Some(&json!("Nova")));
        assert_eq!(record.field("bonus_code"), Some(&json!("SPIN200")));
        assert_eq!(record.field("empty"), None);
        assert_eq!(record.field("missing"), None);
    }

    #[test]
    fn test_non_object_root_rejected() {
        assert!(matches!(
            Record::from_value(json!([1, 2, 3])),
            Err(RecordError::NotAnObject)
        ));
    }

    #[test]
    fn test_find_page_by_slug() {
        let record = Record::from_value(json!({
            "name": "Nova",
            "pages": [
                {"title": "Bonuses", "slug": "bonuses"},
                {"title": "Terms", "slug": "terms"},
            ],
        }))
        .unwrap();

        assert_eq!(
            record.find_page("terms").and_then(|p| p.title.as_deref()),
            Some("Terms")
        );
        assert!(record.find_page("nope").is_none());
    }

    #[test]
    fn test_output_slug_sanitizes() {
        let page = PageRecord {
            slug: Some("Free Spins!".to_string()),
            ..Default::default()
        };
        assert_eq!(page.output_slug().as_deref(), Some("free-spins"));

        let empty = PageRecord {
            slug: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(empty.output_slug(), None);

        let missing = PageRecord::default();
        assert_eq!(missing.output_slug(), None);
    }
}
