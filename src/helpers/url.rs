//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::record::SiteRecord;

/// Characters escaped inside a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Canonical site base URL without a trailing slash
///
/// The host's `www.` prefix is normalized to match the record's
/// `use_www_version` flag. Records without a URL fall back to `/`-relative
/// links, signalled by an empty base.
pub fn site_base_url(site: &SiteRecord) -> String {
    let url = match site.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => return String::new(),
    };
    let url = url.trim_end_matches('/');

    let (scheme, rest) = match url.split_once("://") {
        Some((scheme, rest)) => (scheme, rest),
        None => ("https", url),
    };
    let (host, path) = match rest.split_once('/') {
        Some((host, path)) => (host, format!("/{}", path)),
        None => (rest, String::new()),
    };

    let host = if site.use_www_version {
        if host.starts_with("www.") {
            host.to_string()
        } else {
            format!("www.{}", host)
        }
    } else {
        host.strip_prefix("www.").unwrap_or(host).to_string()
    };

    format!("{}://{}{}", scheme, host, path)
}

/// Absolute URL of a slug page
pub fn page_url(base: &str, slug: &str) -> String {
    format!("{}/{}/", base, encode_path_segment(slug))
}

/// Percent-encode a single path segment
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Whether a link target leaves the site
pub fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//")
}
