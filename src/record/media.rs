//! Media references and slot entries
//!
//! Logo fields arrive in three shapes depending on how the upstream CMS
//! serialized them: a bare URL string, a single media object, or a list of
//! media objects. The ambiguity is collapsed once at the data boundary into
//! `MediaRef` instead of at every use site.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A media descriptor object carrying a URL
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaFile {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub formats: Option<Value>,
}

/// A logo/image reference in one of its accepted shapes
///
/// Anything that matches none of the three shapes falls into `Other` and
/// resolves to an empty URL. Malformed references never fail the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaRef {
    Url(String),
    Single(MediaFile),
    List(Vec<MediaFile>),
    Other(Value),
}

impl MediaRef {
    /// Extract the usable URL, empty string when there is none
    pub fn first_url(&self) -> &str {
        match self {
            MediaRef::Url(url) => url,
            MediaRef::Single(file) => file.url.as_deref().unwrap_or(""),
            MediaRef::List(files) => files
                .first()
                .and_then(|f| f.url.as_deref())
                .unwrap_or(""),
            MediaRef::Other(_) => "",
        }
    }
}

/// A slot entry from the record's `Slots` collection
///
/// The upstream export capitalizes `Name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Slot {
    pub id: Option<i64>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    pub logo: Option<MediaRef>,
    pub link: Option<String>,
}

impl Slot {
    /// The logo URL, empty string for absent or malformed references
    pub fn logo_url(&self) -> &str {
        self.logo.as_ref().map(MediaRef::first_url).unwrap_or("")
    }

    /// Display name, falling back to a positional label
    pub fn display_name(&self, index: usize) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Slot {}", index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn media_ref(value: Value) -> MediaRef {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_string_shape() {
        let logo = media_ref(json!("http://x/a.png"));
        assert_eq!(logo.first_url(), "http://x/a.png");
    }

    #[test]
    fn test_single_object_shape() {
        let logo = media_ref(json!({"url": "http://x/a.png"}));
        assert_eq!(logo.first_url(), "http://x/a.png");
    }

    #[test]
    fn test_list_shape_uses_first_element() {
        let logo = media_ref(json!([
            {"url": "http://x/a.png"},
            {"url": "http://x/b.png"},
        ]));
        assert_eq!(logo.first_url(), "http://x/a.png");
    }

    #[test]
    fn test_empty_shapes_fall_back_to_empty_string() {
        assert_eq!(media_ref(json!({})).first_url(), "");
        assert_eq!(media_ref(json!([])).first_url(), "");
        assert_eq!(media_ref(json!(42)).first_url(), "");
    }

    #[test]
    fn test_slot_without_logo() {
        let slot: Slot = serde_json::from_value(json!({"Name": "Gem Rush"})).unwrap();
        assert_eq!(slot.logo_url(), "");
        assert_eq!(slot.display_name(0), "Gem Rush");
    }

    #[test]
    fn test_slot_display_name_fallback() {
        let slot = Slot::default();
        assert_eq!(slot.display_name(4), "Slot 5");

        let blank: Slot = serde_json::from_value(json!({"Name": "  "})).unwrap();
        assert_eq!(blank.display_name(0), "Slot 1");
    }

    #[test]
    fn test_slot_capitalized_name_field() {
        let slot: Slot = serde_json::from_value(json!({
            "id": 7,
            "Name": "Lucky 777",
            "logo": [{"url": "http://cdn/lucky.png"}],
            "link": "https://play.example/lucky",
        }))
        .unwrap();
        assert_eq!(slot.name.as_deref(), Some("Lucky 777"));
        assert_eq!(slot.logo_url(), "http://cdn/lucky.png");
    }
}
