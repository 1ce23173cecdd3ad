//! Initialize a new skin site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Default tool configuration written by `init`
const CONFIG_TEMPLATE: &str = r#"# Skinforge Configuration

# Path of the JSON record that drives the skin
data_file: data.json

# Output directory
public_dir: public

# Assets copied verbatim into the output
static_dir: static
"#;

/// Starter record with one of everything
const DATA_TEMPLATE: &str = r##"{
  "name": "LuckySpin",
  "site_name": "LuckySpin",
  "url": "https://example.com",
  "language_code": "en",
  "allow_indexing": false,
  "redirect_404s_to_homepage": false,
  "use_www_version": false,
  "hero_title": "Get 200% Bonus",
  "hero_subtitle": "Up to €1,000 + 100 Free Spins",
  "hero_badge": "🎰 Welcome Bonus",
  "cta_text": "Play Now",
  "tagline": "Start your winning journey today!",
  "main_background": "#1a202c",
  "secondary_background": "#2d3748",
  "button_background": "#f59e0b",
  "button_text": "#1a202c",
  "text_color": "#f7fafc",
  "color_highlight_text": "#f59e0b",
  "content": "<h2>Welcome to {{site_name}}</h2><p>Edit the content field in data.json.</p>",
  "header_menu": [
    { "label": "Home", "url": "#home" },
    { "label": "Slots", "url": "#slots" }
  ],
  "footer_menu": [
    { "label": "Terms & Conditions", "url": "#" }
  ],
  "Slots": [
    { "Name": "Gem Rush", "logo": "", "link": "#" }
  ],
  "pages": [
    {
      "title": "Bonuses",
      "slug": "bonuses",
      "seo_description": "All current bonuses",
      "content": "<p>Bonus terms go here.</p>"
    }
  ]
}
"##;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("static"))?;

    let config_path = target_dir.join("skinforge.yml");
    if !config_path.exists() {
        fs::write(&config_path, CONFIG_TEMPLATE)?;
    }

    let data_path = target_dir.join("data.json");
    if !data_path.exists() {
        fs::write(&data_path, DATA_TEMPLATE)?;
    }

    tracing::info!("Initialized site in {:?}", target_dir);

    Ok(())
}
