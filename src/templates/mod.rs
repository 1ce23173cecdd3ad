//! Built-in skin templates using the Tera template engine
//!
//! All skin markup is embedded directly in the binary. Autoescaping is
//! disabled: the record's rich text and head fragments are opaque,
//! already-sanitized HTML, and attribute values go through the `attr`
//! filter explicitly.

use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers::html_escape;

/// Static stylesheet for the homepage skin
pub const HOME_CSS: &str = include_str!("skin/home.css");

/// Static stylesheet for slug pages
pub const PAGE_CSS: &str = include_str!("skin/page.css");

/// Static stylesheet for the 404 page
pub const NOT_FOUND_CSS: &str = include_str!("skin/not_found.css");

/// Template renderer with the embedded skin
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all skin templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // The record's content and html_head are injected verbatim;
        // escaping is opt-in via the attr filter
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("home.html", include_str!("skin/home.html")),
            ("page.html", include_str!("skin/page.html")),
            ("not_found.html", include_str!("skin/not_found.html")),
            ("redirect.html", include_str!("skin/redirect.html")),
            // Partials
            (
                "partials/head.html",
                include_str!("skin/partials/head.html"),
            ),
            ("partials/nav.html", include_str!("skin/partials/nav.html")),
            (
                "partials/slots.html",
                include_str!("skin/partials/slots.html"),
            ),
            (
                "partials/bonuses.html",
                include_str!("skin/partials/bonuses.html"),
            ),
            (
                "partials/footer.html",
                include_str!("skin/partials/footer.html"),
            ),
            (
                "partials/popup.html",
                include_str!("skin/partials/popup.html"),
            ),
        ])?;

        tera.register_filter("attr", attr_filter);

        Ok(Self { tera })
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: escape a value for use inside an HTML attribute
fn attr_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("attr", "value", String, value);
    Ok(tera::Value::String(html_escape(&s)))
}
