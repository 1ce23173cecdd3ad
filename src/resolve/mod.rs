//! Content Resolver - turns a raw record into render-ready display fields
//!
//! Every display field is resolved through the same fixed chain: the
//! page-specific value if present and non-empty, else the site-level
//! equivalent, else a hardcoded literal default. Fields resolve
//! independently; a miss on one never affects another. There is no error
//! path here - malformed or absent input degrades to defaults.

pub mod defaults;
pub mod vars;

use serde::Serialize;

use crate::record::{MediaRef, MenuItem, PageRecord, Record, SiteRecord, Slot};

/// A slot ready for the template layer
#[derive(Debug, Clone, Serialize)]
pub struct SlotView {
    pub name: String,
    pub logo_url: String,
    pub link: String,
}

/// A content section ready for the template layer
#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub heading: String,
    pub text_html: String,
    pub image_url: String,
    pub cta_text: String,
    pub cta_link: String,
    pub layout: String,
}

/// Resolves display fields for one render
///
/// Site-level renders use [`Resolver::new`]; slug-page renders use
/// [`Resolver::for_page`] so page values take precedence.
pub struct Resolver<'a> {
    record: &'a Record,
    page: Option<&'a PageRecord>,
}

impl<'a> Resolver<'a> {
    pub fn new(record: &'a Record) -> Self {
        Self { record, page: None }
    }

    pub fn for_page(record: &'a Record, page: &'a PageRecord) -> Self {
        Self {
            record,
            page: Some(page),
        }
    }

    fn site(&self) -> &SiteRecord {
        &self.record.site
    }

    /// page -> site -> literal default, each candidate skipped when empty
    fn resolve_text(
        &self,
        page_value: impl Fn(&PageRecord) -> Option<&str>,
        site_value: Option<&str>,
        default: &str,
    ) -> String {
        self.page
            .and_then(|p| non_empty(page_value(p)))
            .or_else(|| non_empty(site_value))
            .unwrap_or(default)
            .to_string()
    }

    pub fn site_name(&self) -> String {
        non_empty(self.site().site_name.as_deref())
            .or_else(|| non_empty(self.site().name.as_deref()))
            .unwrap_or(defaults::SITE_NAME)
            .to_string()
    }

    pub fn hero_title(&self) -> String {
        // A page's own title is its page-specific hero fallback
        self.page
            .and_then(|p| non_empty(p.hero_title.as_deref()).or_else(|| non_empty(p.title.as_deref())))
            .or_else(|| non_empty(self.site().hero_title.as_deref()))
            .unwrap_or(defaults::HERO_TITLE)
            .to_string()
    }

    pub fn hero_subtitle(&self) -> String {
        self.resolve_text(
            |p| p.hero_subtitle.as_deref(),
            self.site().hero_subtitle.as_deref(),
            defaults::HERO_SUBTITLE,
        )
    }

    pub fn hero_badge(&self) -> String {
        self.resolve_text(
            |p| p.hero_badge.as_deref(),
            self.site().hero_badge.as_deref(),
            defaults::HERO_BADGE,
        )
    }

    pub fn cta_text(&self) -> String {
        self.resolve_text(
            |p| p.cta_text.as_deref(),
            self.site().cta_text.as_deref(),
            defaults::CTA_TEXT,
        )
    }

    pub fn tagline(&self) -> String {
        self.resolve_text(
            |p| p.tagline.as_deref(),
            self.site().tagline.as_deref(),
            defaults::TAGLINE,
        )
    }

    pub fn popup_text(&self) -> String {
        self.resolve_text(
            |p| p.popup_text.as_deref(),
            self.site().popup_text.as_deref(),
            defaults::POPUP_TEXT,
        )
    }

    pub fn footer_text(&self) -> String {
        let default = if self.page.is_some() {
            defaults::page_footer_text(&self.site_name())
        } else {
            defaults::footer_text(&self.site_name())
        };
        self.resolve_text(
            |p| p.footer_text.as_deref(),
            self.site().footer_text.as_deref(),
            &default,
        )
    }

    pub fn language_code(&self) -> String {
        non_empty(self.site().language_code.as_deref())
            .unwrap_or("en")
            .to_string()
    }

    /// Raw head fragment, passed through verbatim
    pub fn html_head(&self) -> String {
        self.resolve_text(
            |p| p.html_head.as_deref(),
            self.site().html_head.as_deref(),
            "",
        )
    }

    /// SEO title without the site-name suffix; templates append ` | name`
    pub fn seo_title(&self) -> String {
        match self.page {
            Some(page) => non_empty(page.seo_title.as_deref())
                .or_else(|| non_empty(page.title.as_deref()))
                .unwrap_or("")
                .to_string(),
            None => String::new(),
        }
    }

    pub fn seo_description(&self) -> String {
        self.page
            .and_then(|p| non_empty(p.seo_description.as_deref()))
            .unwrap_or("")
            .to_string()
    }

    /// The rich-text content blob with placeholders substituted,
    /// empty when the record carries no content
    pub fn content_html(&self) -> String {
        let content = self
            .page
            .and_then(|p| non_empty(p.content.as_deref()))
            .or_else(|| non_empty(self.site().content.as_deref()));
        match content {
            Some(text) => self.substitute(text),
            None => String::new(),
        }
    }

    /// Substitute `{{name}}` tokens against the record's top-level fields
    pub fn substitute(&self, text: &str) -> String {
        vars::substitute(text, |name| self.record.field(name))
    }

    /// Feature bullet lines from `features_list`, one per non-empty line
    pub fn features(&self) -> Vec<String> {
        let list = self
            .page
            .and_then(|p| non_empty(p.features_list.as_deref()))
            .or_else(|| non_empty(self.site().features_list.as_deref()));
        match list {
            Some(text) => text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Header navigation, falling back to the fixed default anchors
    pub fn header_menu(&self) -> Vec<MenuItem> {
        menu_or_default(self.site().header_menu.as_deref(), defaults::header_menu)
    }

    /// Footer links, falling back to the fixed default set
    pub fn footer_menu(&self) -> Vec<MenuItem> {
        menu_or_default(self.site().footer_menu.as_deref(), defaults::footer_menu)
    }

    /// Slot entries in input order, placeholder list when absent or empty
    pub fn slots(&self) -> Vec<SlotView> {
        let slots: Vec<Slot> = match self.site().slots.as_deref() {
            Some(slots) if !slots.is_empty() => slots.to_vec(),
            _ => defaults::slots(),
        };
        slots
            .iter()
            .enumerate()
            .map(|(i, slot)| SlotView {
                name: slot.display_name(i),
                logo_url: slot.logo_url().to_string(),
                link: non_empty(slot.link.as_deref()).unwrap_or("#").to_string(),
            })
            .collect()
    }

    /// Content sections for a slug page, substituted and flattened for markup
    pub fn sections(&self) -> Vec<SectionView> {
        let Some(page) = self.page else {
            return Vec::new();
        };
        page.sections
            .iter()
            .map(|section| SectionView {
                heading: section.heading.clone().unwrap_or_default(),
                text_html: section
                    .text
                    .as_deref()
                    .map(|t| self.substitute(t))
                    .unwrap_or_default(),
                image_url: section
                    .image
                    .as_ref()
                    .map(MediaRef::first_url)
                    .unwrap_or("")
                    .to_string(),
                cta_text: section.cta_text.clone().unwrap_or_default(),
                cta_link: section.cta_link.clone().unwrap_or_default(),
                layout: non_empty(section.layout.as_deref())
                    .unwrap_or("text-left")
                    .to_string(),
            })
            .collect()
    }
}

/// Present-and-non-empty filter used by every chain step
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn menu_or_default(menu: Option<&[MenuItem]>, default: fn() -> Vec<MenuItem>) -> Vec<MenuItem> {
    match menu {
        Some(items) if !items.is_empty() => items.to_vec(),
        _ => default(),
    }
}
