//! `{{name}}` placeholder substitution
//!
//! Tokens whose trimmed name resolves to a non-null record field are replaced
//! by the field's string form; everything else passes through unchanged,
//! braces included. The output is not re-scanned, so inserted values that
//! happen to contain `{{` survive as literal text.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::Value;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{([^}]+)\}\}").unwrap();
}

/// Substitute placeholder tokens in `text` using `lookup` for field access
pub fn substitute<'a, F>(text: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a Value>,
{
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            let name = caps[1].trim();
            match lookup(name) {
                Some(value) if !value.is_null() => stringify(value),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// String form of a field value: strings verbatim, scalars coerced,
/// arrays/objects via their JSON representation
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lookup_in<'a>(doc: &'a Value) -> impl Fn(&str) -> Option<&'a Value> + 'a {
        move |name| doc.get(name).filter(|v| !v.is_null())
    }

    #[test]
    fn test_known_field_replaced_once() {
        let doc = json!({"name": "Nova"});
        assert_eq!(
            substitute("Hello {{name}}!", lookup_in(&doc)),
            "Hello Nova!"
        );
    }

    #[test]
    fn test_unknown_field_passes_through() {
        let doc = json!({});
        assert_eq!(substitute("{{missing}}", lookup_in(&doc)), "{{missing}}");
    }

    #[test]
    fn test_name_trimmed_before_lookup() {
        let doc = json!({"bonus": "200%"});
        assert_eq!(substitute("Get {{ bonus }} now", lookup_in(&doc)), "Get 200% now");
    }

    #[test]
    fn test_null_counts_as_missing() {
        let doc = json!({"gone": null});
        assert_eq!(substitute("{{gone}}", lookup_in(&doc)), "{{gone}}");
    }

    #[test]
    fn test_scalar_coercion() {
        let doc = json!({"spins": 200, "active": true});
        assert_eq!(
            substitute("{{spins}} spins: {{active}}", lookup_in(&doc)),
            "200 spins: true"
        );
    }

    #[test]
    fn test_object_uses_default_stringification() {
        let doc = json!({"meta": {"a": 1}});
        assert_eq!(substitute("{{meta}}", lookup_in(&doc)), r#"{"a":1}"#);
    }

    #[test]
    fn test_multiple_tokens_and_surrounding_text() {
        let doc = json!({"name": "Nova", "cta": "Play"});
        assert_eq!(
            substitute("<p>{{name}}</p><a>{{cta}}</a>", lookup_in(&doc)),
            "<p>Nova</p><a>Play</a>"
        );
    }

    #[test]
    fn test_inserted_braces_not_rescanned() {
        let doc = json!({"raw": "literal {{name"});
        // A value containing `{{` must survive; the dangling token it forms
        // with trailing text has no closing braces and is left alone.
        assert_eq!(
            substitute("{{raw}} tail", lookup_in(&doc)),
            "literal {{name tail"
        );
    }

    #[test]
    fn test_unclosed_token_left_alone() {
        let doc = json!({"name": "Nova"});
        assert_eq!(substitute("{{name", lookup_in(&doc)), "{{name");
    }
}
