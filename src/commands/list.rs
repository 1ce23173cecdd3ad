//! List record content

use anyhow::Result;
use serde_json::Value;

use crate::record::MenuItem;
use crate::Skinforge;

/// List record content by type
pub fn run(app: &Skinforge, content_type: &str) -> Result<()> {
    let record = app.load_record()?;

    match content_type {
        "page" | "pages" => {
            println!("Pages ({}):", record.site.pages.len());
            for page in &record.site.pages {
                let slug = page
                    .output_slug()
                    .map(|s| format!("/{}/", s))
                    .unwrap_or_else(|| "(no slug)".to_string());
                println!(
                    "  {} - {} [{} sections]",
                    slug,
                    page.title.as_deref().unwrap_or("Untitled"),
                    page.sections.len()
                );
            }
        }
        "slot" | "slots" => {
            let slots = record.site.slots.as_deref().unwrap_or_default();
            println!("Slots ({}):", slots.len());
            for (i, slot) in slots.iter().enumerate() {
                let logo = slot.logo_url();
                println!(
                    "  {} [{}]",
                    slot.display_name(i),
                    if logo.is_empty() { "no logo" } else { logo }
                );
            }
        }
        "menu" | "menus" => {
            print_menu("Header menu", record.site.header_menu.as_deref());
            print_menu("Footer menu", record.site.footer_menu.as_deref());
        }
        "field" | "fields" => {
            let fields: Vec<_> = record.fields().collect();
            println!("Fields ({}):", fields.len());
            for (name, value) in fields {
                println!("  {} ({})", name, type_name(value));
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: page, slot, menu, field",
                content_type
            );
        }
    }

    Ok(())
}

fn print_menu(label: &str, menu: Option<&[MenuItem]>) {
    let items = menu.unwrap_or_default();
    println!("{} ({}):", label, items.len());
    for item in items {
        println!("  {} -> {}", item.label, item.url);
        for sub in &item.submenu {
            println!("    {} -> {}", sub.label, sub.url);
        }
    }
}

fn type_name(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "bool".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(items) => format!("array[{}]", items.len()),
        Value::Object(_) => "object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_name() {
        assert_eq!(type_name(&json!("x")), "string");
        assert_eq!(type_name(&json!(3)), "number");
        assert_eq!(type_name(&json!([1, 2])), "array[2]");
        assert_eq!(type_name(&json!({"a": 1})), "object");
    }
}
