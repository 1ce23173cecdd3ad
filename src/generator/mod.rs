//! Generator module - renders the record into static HTML files

use anyhow::Result;
use std::fs;

use serde::Serialize;
use tera::Context;
use walkdir::WalkDir;

use crate::helpers;
use crate::record::{PageRecord, Record};
use crate::resolve::{defaults, Resolver};
use crate::templates::{self, TemplateRenderer};
use crate::theme::ThemeTokens;
use crate::Skinforge;

/// A header link to a sibling slug page
#[derive(Debug, Clone, Serialize)]
struct PageNav {
    title: String,
    href: String,
}

/// Static skin generator
pub struct Generator {
    app: Skinforge,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(app: &Skinforge) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        Ok(Self {
            app: app.clone(),
            renderer,
        })
    }

    /// Generate the entire site from one record
    pub fn generate(&self, record: &Record) -> Result<()> {
        fs::create_dir_all(&self.app.public_dir)?;

        self.copy_static_assets()?;
        self.generate_home(record)?;
        self.generate_pages(record)?;
        self.generate_not_found(record)?;
        self.generate_robots(record)?;
        self.generate_sitemap(record)?;

        Ok(())
    }

    /// Context keys shared by the home and slug skins
    fn base_context(&self, record: &Record, resolver: &Resolver) -> Context {
        let theme = ThemeTokens::resolve(&record.site);

        let mut context = Context::new();
        context.insert("language_code", &resolver.language_code());
        context.insert("site_name", &resolver.site_name());
        context.insert(
            "robots",
            helpers::robots_content(record.site.allow_indexing),
        );
        context.insert("html_head", &resolver.html_head());
        context.insert("theme_css", &theme.css_vars());
        context.insert("footer_text", &resolver.footer_text());
        context
    }

    /// Render the homepage skin to `index.html`
    fn generate_home(&self, record: &Record) -> Result<()> {
        let resolver = Resolver::new(record);

        let mut context = self.base_context(record, &resolver);
        context.insert("page_title", &resolver.site_name());
        context.insert("seo_description", "");
        context.insert("skin_css", templates::HOME_CSS);
        context.insert("logo_url", &record.site.logo_url.clone().unwrap_or_default());
        context.insert("hero_badge", &resolver.hero_badge());
        context.insert("hero_title", &resolver.hero_title());
        context.insert("hero_subtitle", &resolver.hero_subtitle());
        context.insert("tagline", &resolver.tagline());
        context.insert("features", &resolver.features());
        context.insert("cta_text", &resolver.cta_text());
        context.insert("header_menu", &resolver.header_menu());
        context.insert("footer_menu", &resolver.footer_menu());
        context.insert("slots", &resolver.slots());
        context.insert("bonuses", &defaults::bonuses());
        context.insert("content_html", &resolver.content_html());
        context.insert("popup_text", &resolver.popup_text());

        let html = self.renderer.render("home.html", &context)?;
        let output_path = self.app.public_dir.join("index.html");
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(())
    }

    /// Render every entry of the record's page collection under its slug
    fn generate_pages(&self, record: &Record) -> Result<()> {
        let site_pages: Vec<PageNav> = record
            .site
            .pages
            .iter()
            .filter_map(|p| {
                let slug = p.output_slug()?;
                Some(PageNav {
                    title: page_nav_title(p, &slug),
                    href: format!("/{}/", slug),
                })
            })
            .collect();

        for page in &record.site.pages {
            let Some(slug) = page.output_slug() else {
                tracing::warn!("Skipping page without a usable slug: {:?}", page.title);
                continue;
            };

            let resolver = Resolver::for_page(record, page);

            let mut context = self.base_context(record, &resolver);
            context.insert("page_title", &page_title(&resolver));
            context.insert("seo_description", &resolver.seo_description());
            context.insert("skin_css", templates::PAGE_CSS);
            context.insert("site_pages", &site_pages);
            context.insert(
                "hero_image_url",
                page.hero_image
                    .as_ref()
                    .map(|m| m.first_url())
                    .unwrap_or(""),
            );
            // Hero badge/subtitle render only when the page itself sets them
            context.insert(
                "hero_badge",
                &page.hero_badge.clone().unwrap_or_default(),
            );
            context.insert("hero_title", &resolver.hero_title());
            context.insert(
                "hero_subtitle",
                &page.hero_subtitle.clone().unwrap_or_default(),
            );
            context.insert("cta_text", &page.cta_text.clone().unwrap_or_default());
            context.insert("cta_link", &page.cta_link.clone().unwrap_or_default());
            context.insert("content_html", &resolver.content_html());
            context.insert("sections", &resolver.sections());

            let html = self.renderer.render("page.html", &context)?;
            let output_path = self.app.public_dir.join(&slug).join("index.html");
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_path, html)?;
            tracing::debug!("Generated page: {:?}", output_path);
        }

        Ok(())
    }

    /// Render `404.html`, as a meta-refresh redirect when the record asks
    fn generate_not_found(&self, record: &Record) -> Result<()> {
        let resolver = Resolver::new(record);
        let site_name = resolver.site_name();

        let html = if record.site.redirect_404s_to_homepage {
            let mut context = Context::new();
            context.insert("page_title", &format!("Redirecting... | {}", site_name));
            self.renderer.render("redirect.html", &context)?
        } else {
            let mut context = Context::new();
            context.insert("language_code", &resolver.language_code());
            context.insert(
                "page_title",
                &format!("404 - Page Not Found | {}", site_name),
            );
            context.insert(
                "robots",
                helpers::not_found_robots(record.site.allow_indexing),
            );
            context.insert("skin_css", templates::NOT_FOUND_CSS);
            self.renderer.render("not_found.html", &context)?
        };

        let output_path = self.app.public_dir.join("404.html");
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(())
    }

    /// Write `robots.txt` from the indexing flag
    fn generate_robots(&self, record: &Record) -> Result<()> {
        let base = helpers::site_base_url(&record.site);

        let mut robots = String::from("User-agent: *\n");
        if record.site.allow_indexing {
            robots.push_str("Allow: /\n");
        } else {
            robots.push_str("Disallow: /\n");
        }
        if !base.is_empty() {
            robots.push_str(&format!("\nSitemap: {}/sitemap.xml\n", base));
        }

        fs::write(self.app.public_dir.join("robots.txt"), robots)?;
        Ok(())
    }

    /// Write `sitemap.xml` listing the homepage and every slug page
    fn generate_sitemap(&self, record: &Record) -> Result<()> {
        let base = helpers::site_base_url(&record.site);
        if base.is_empty() {
            tracing::debug!("Record has no url, skipping sitemap");
            return Ok(());
        }

        let lastmod = record
            .site
            .generated_at
            .as_deref()
            .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339());

        let mut sitemap = String::new();
        sitemap.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        sitemap.push('\n');
        sitemap.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        sitemap.push('\n');

        let mut push_entry = |loc: &str| {
            sitemap.push_str("  <url>\n");
            sitemap.push_str(&format!("    <loc>{}</loc>\n", helpers::escape_xml(loc)));
            sitemap.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
            sitemap.push_str("  </url>\n");
        };

        push_entry(&format!("{}/", base));
        for page in &record.site.pages {
            if let Some(slug) = page.output_slug() {
                push_entry(&helpers::page_url(&base, &slug));
            }
        }

        sitemap.push_str("</urlset>\n");

        fs::write(self.app.public_dir.join("sitemap.xml"), sitemap)?;
        tracing::debug!("Generated sitemap.xml");

        Ok(())
    }

    /// Copy everything under the static directory verbatim
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.app.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() {
                let relative = path.strip_prefix(static_dir)?;
                let dest = self.app.public_dir.join(relative);
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(path, &dest)?;
            }
        }

        Ok(())
    }
}

/// Full `<title>` text for a slug page
fn page_title(resolver: &Resolver) -> String {
    let seo_title = resolver.seo_title();
    let site_name = resolver.site_name();
    if seo_title.is_empty() {
        site_name
    } else {
        format!("{} | {}", seo_title, site_name)
    }
}

/// Label for a page in the header navigation
fn page_nav_title(page: &PageRecord, slug: &str) -> String {
    match page.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => slug.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn app_in(dir: &std::path::Path) -> Skinforge {
        Skinforge::new(dir).unwrap()
    }

    fn record(value: serde_json::Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[test]
    fn test_generate_writes_all_outputs() {
        let dir = tempdir().unwrap();
        let app = app_in(dir.path());
        let generator = Generator::new(&app).unwrap();

        let record = record(json!({
            "name": "Nova Casino",
            "url": "https://nova.example",
            "allow_indexing": true,
            "content": "<p>Welcome to {{name}}</p>",
            "pages": [
                {"title": "Bonuses", "slug": "bonuses", "content": "<p>All bonuses</p>"},
                {"title": "No slug page"},
            ],
        }));

        generator.generate(&record).unwrap();

        let public = dir.path().join("public");
        let index = fs::read_to_string(public.join("index.html")).unwrap();
        assert!(index.contains("Nova Casino"));
        assert!(index.contains("<p>Welcome to Nova Casino</p>"));
        assert!(index.contains(r#"content="index,follow""#));

        let bonuses = fs::read_to_string(public.join("bonuses/index.html")).unwrap();
        assert!(bonuses.contains("<title>Bonuses | Nova Casino</title>"));
        assert!(bonuses.contains("<p>All bonuses</p>"));

        // The page without a slug is skipped, everything else is emitted
        assert!(public.join("404.html").exists());
        assert!(public.join("robots.txt").exists());
        assert!(public.join("sitemap.xml").exists());
    }

    #[test]
    fn test_home_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let app = app_in(dir.path());
        let generator = Generator::new(&app).unwrap();

        generator.generate(&record(json!({}))).unwrap();

        let index = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
        assert!(index.contains("LuckySpin"));
        assert!(index.contains("Get 200% Bonus"));
        assert!(index.contains("Play Now"));
        assert!(index.contains("Gem Rush"));
        assert!(index.contains(r#"content="noindex,nofollow""#));
        // Default anchors when no menu is configured
        assert!(index.contains(r##"href="#slots""##));
    }

    #[test]
    fn test_not_found_page_variants() {
        let dir = tempdir().unwrap();
        let app = app_in(dir.path());
        let generator = Generator::new(&app).unwrap();

        generator
            .generate(&record(json!({"name": "Nova"})))
            .unwrap();
        let not_found = fs::read_to_string(dir.path().join("public/404.html")).unwrap();
        assert!(not_found.contains("404 - Page Not Found | Nova"));
        assert!(not_found.contains("Go to Homepage"));
        assert!(!not_found.contains("http-equiv=\"refresh\""));

        generator
            .generate(&record(json!({
                "name": "Nova",
                "redirect_404s_to_homepage": true,
            })))
            .unwrap();
        let redirect = fs::read_to_string(dir.path().join("public/404.html")).unwrap();
        assert!(redirect.contains(r#"http-equiv="refresh" content="0;url=/""#));
        assert!(redirect.contains("Redirecting... | Nova"));
    }

    #[test]
    fn test_robots_txt_follows_indexing_flag() {
        let dir = tempdir().unwrap();
        let app = app_in(dir.path());
        let generator = Generator::new(&app).unwrap();

        generator
            .generate(&record(json!({
                "url": "https://nova.example",
                "allow_indexing": true,
            })))
            .unwrap();
        let robots = fs::read_to_string(dir.path().join("public/robots.txt")).unwrap();
        assert!(robots.contains("Allow: /"));
        assert!(robots.contains("Sitemap: https://nova.example/sitemap.xml"));

        generator
            .generate(&record(json!({"allow_indexing": false})))
            .unwrap();
        let robots = fs::read_to_string(dir.path().join("public/robots.txt")).unwrap();
        assert!(robots.contains("Disallow: /"));
        assert!(!robots.contains("Sitemap:"));
    }

    #[test]
    fn test_sitemap_lists_slug_pages() {
        let dir = tempdir().unwrap();
        let app = app_in(dir.path());
        let generator = Generator::new(&app).unwrap();

        generator
            .generate(&record(json!({
                "url": "https://nova.example",
                "_generated_at": "2024-06-01T12:00:00+00:00",
                "pages": [{"title": "Terms", "slug": "terms"}],
            })))
            .unwrap();

        let sitemap = fs::read_to_string(dir.path().join("public/sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://nova.example/</loc>"));
        assert!(sitemap.contains("<loc>https://nova.example/terms/</loc>"));
        assert!(sitemap.contains("<lastmod>2024-06-01T12:00:00+00:00</lastmod>"));
    }

    #[test]
    fn test_static_assets_copied() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("static/img")).unwrap();
        fs::write(dir.path().join("static/img/logo.png"), b"png").unwrap();

        let app = app_in(dir.path());
        let generator = Generator::new(&app).unwrap();
        generator.generate(&record(json!({}))).unwrap();

        assert!(dir.path().join("public/img/logo.png").exists());
    }

    #[test]
    fn test_menu_and_submenu_markup() {
        let dir = tempdir().unwrap();
        let app = app_in(dir.path());
        let generator = Generator::new(&app).unwrap();

        generator
            .generate(&record(json!({
                "header_menu": [
                    {"label": "Games", "url": "/games", "submenu": [
                        {"label": "Live", "url": "/games/live", "open_in_new_tab": true},
                    ]},
                ],
            })))
            .unwrap();

        let index = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
        assert!(index.contains(r#"href="/games""#));
        assert!(index.contains("menu-arrow"));
        assert!(index.contains(r#"href="/games/live" target="_blank" rel="noopener noreferrer""#));
    }
}
