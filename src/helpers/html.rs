//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Escape XML special characters (sitemap output)
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Robots meta content for regular pages
pub fn robots_content(allow_indexing: bool) -> &'static str {
    if allow_indexing {
        "index,follow"
    } else {
        "noindex,nofollow"
    }
}

/// Robots meta content for the 404 page - never indexed, follow only
/// when the site is indexable at all
pub fn not_found_robots(allow_indexing: bool) -> &'static str {
    if allow_indexing {
        "noindex,follow"
    } else {
        "noindex,nofollow"
    }
}
