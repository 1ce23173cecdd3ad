//! Theme tokens - record colors resolved into the CSS custom-property block
//!
//! The skin stylesheets are static; every color flows through the `:root`
//! variables emitted here. Two derived values carry a hex opacity suffix,
//! which only works when the token is a 6-digit hex color - arbitrary CSS
//! color syntax is passed through as-is and skips the suffix.

use serde::Serialize;

use crate::record::SiteRecord;
use crate::resolve::defaults;

/// Resolved color tokens for one render
#[derive(Debug, Clone, Serialize)]
pub struct ThemeTokens {
    pub background: String,
    pub secondary: String,
    pub button_background: String,
    pub button_text: String,
    pub text: String,
    pub highlight: String,
}

impl ThemeTokens {
    /// Resolve tokens from the record, defaulting each independently
    pub fn resolve(site: &SiteRecord) -> Self {
        Self {
            background: pick(site.main_background.as_deref(), defaults::MAIN_BACKGROUND),
            secondary: pick(
                site.secondary_background.as_deref(),
                defaults::SECONDARY_BACKGROUND,
            ),
            button_background: pick(
                site.button_background.as_deref(),
                defaults::BUTTON_BACKGROUND,
            ),
            button_text: pick(site.button_text.as_deref(), defaults::BUTTON_TEXT),
            text: pick(site.text_color.as_deref(), defaults::TEXT_COLOR),
            // accent_color is the older export name for the same token
            highlight: site
                .color_highlight_text
                .as_deref()
                .filter(|s| !s.is_empty())
                .or(site.accent_color.as_deref().filter(|s| !s.is_empty()))
                .unwrap_or(defaults::COLOR_HIGHLIGHT_TEXT)
                .to_string(),
        }
    }

    /// The `:root { ... }` block interpolated into every page head
    pub fn css_vars(&self) -> String {
        format!(
            ":root {{\n  \
             --background: {background};\n  \
             --foreground: {text};\n  \
             --card: {secondary};\n  \
             --primary: {highlight};\n  \
             --primary-foreground: {button_text};\n  \
             --secondary: {secondary};\n  \
             --muted: {background};\n  \
             --muted-foreground: {muted_fg};\n  \
             --border: {border};\n  \
             --radius: 0.5rem;\n  \
             --button-bg: {button_bg};\n  \
             --button-text: {button_text};\n}}\n",
            background = self.background,
            text = self.text,
            secondary = self.secondary,
            highlight = self.highlight,
            button_text = self.button_text,
            button_bg = self.button_background,
            muted_fg = with_alpha(&self.text, "cc"),
            border = with_alpha(&self.secondary, "33"),
        )
    }
}

fn pick(value: Option<&str>, default: &str) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Append a hex alpha suffix to 6-digit hex colors, pass others through
fn with_alpha(color: &str, alpha: &str) -> String {
    let is_hex6 = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if is_hex6 {
        format!("{}{}", color, alpha)
    } else {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use serde_json::json;

    #[test]
    fn test_defaults_applied_per_token() {
        let record = Record::from_value(json!({"main_background": "#000000"})).unwrap();
        let tokens = ThemeTokens::resolve(&record.site);
        assert_eq!(tokens.background, "#000000");
        assert_eq!(tokens.secondary, defaults::SECONDARY_BACKGROUND);
        assert_eq!(tokens.highlight, defaults::COLOR_HIGHLIGHT_TEXT);
    }

    #[test]
    fn test_accent_color_backs_highlight() {
        let record = Record::from_value(json!({"accent_color": "#ff0000"})).unwrap();
        assert_eq!(ThemeTokens::resolve(&record.site).highlight, "#ff0000");

        let record = Record::from_value(json!({
            "accent_color": "#ff0000",
            "color_highlight_text": "#00ff00",
        }))
        .unwrap();
        assert_eq!(ThemeTokens::resolve(&record.site).highlight, "#00ff00");
    }

    #[test]
    fn test_css_vars_block() {
        let record = Record::from_value(json!({
            "main_background": "#111111",
            "text_color": "#eeeeee",
        }))
        .unwrap();
        let css = ThemeTokens::resolve(&record.site).css_vars();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--background: #111111;"));
        assert!(css.contains("--muted-foreground: #eeeeeecc;"));
        assert!(css.contains("--border: #2d374833;"));
        assert!(css.trim_end().ends_with('}'));
    }

    #[test]
    fn test_non_hex_color_skips_alpha_suffix() {
        assert_eq!(with_alpha("rgb(1,2,3)", "cc"), "rgb(1,2,3)");
        assert_eq!(with_alpha("#abc", "cc"), "#abc");
        assert_eq!(with_alpha("#aabbcc", "33"), "#aabbcc33");
    }
}
