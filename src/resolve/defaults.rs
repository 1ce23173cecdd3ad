//! Documented literal defaults for every display field
//!
//! These are the values a skin falls back to when neither the page nor the
//! site record carries a usable value. Keep them in one place so the
//! resolution chain stays data-free.

use serde::Serialize;

use crate::record::{MenuItem, Slot};

pub const SITE_NAME: &str = "LuckySpin";
pub const HERO_TITLE: &str = "Get 200% Bonus";
pub const HERO_SUBTITLE: &str = "Up to €1,000 + 100 Free Spins";
pub const HERO_BADGE: &str = "🎰 Welcome Bonus";
pub const CTA_TEXT: &str = "Play Now";
pub const TAGLINE: &str =
    "Start your winning journey today with the best welcome offer in online gaming!";
pub const POPUP_TEXT: &str = "🎁 Welcome Bonus: 100% up to $500 + 200 Free Spins!";

pub const MAIN_BACKGROUND: &str = "#1a202c";
pub const SECONDARY_BACKGROUND: &str = "#2d3748";
pub const BUTTON_BACKGROUND: &str = "#f59e0b";
pub const BUTTON_TEXT: &str = "#1a202c";
pub const TEXT_COLOR: &str = "#f7fafc";
pub const COLOR_HIGHLIGHT_TEXT: &str = "#f59e0b";

/// Homepage footer fallback
pub fn footer_text(site_name: &str) -> String {
    format!(
        "© 2024 {}. All rights reserved. Gambling can be addictive. Play responsibly.",
        site_name
    )
}

/// Slug-page footer fallback
pub fn page_footer_text(site_name: &str) -> String {
    format!("© 2024 {}. All rights reserved.", site_name)
}

/// Placeholder slot list shown when the record carries none
pub fn slots() -> Vec<Slot> {
    const NAMES: [&str; 8] = [
        "Gem Rush",
        "Pharaoh's Gold",
        "Lucky 777",
        "Wild West",
        "Dragon's Fire",
        "Ocean Treasure",
        "Cosmic Slots",
        "Viking Fortune",
    ];
    NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Slot {
            id: Some(i as i64 + 1),
            name: Some((*name).to_string()),
            logo: None,
            link: Some("#".to_string()),
        })
        .collect()
}

/// Default header navigation anchors, in fixed order
pub fn header_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::link("Home", "#home"),
        MenuItem::link("Slots", "#slots"),
        MenuItem::link("Bonuses", "#bonuses"),
        MenuItem::link("About", "#about"),
    ]
}

/// Default footer links, in fixed order
pub fn footer_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::link("About Us", "#"),
        MenuItem::link("Terms & Conditions", "#"),
        MenuItem::link("Responsible Gambling", "#"),
    ]
}

/// A promo card in the bonuses strip
#[derive(Debug, Clone, Serialize)]
pub struct BonusCard {
    pub name: &'static str,
    pub bonus: &'static str,
    pub gradient: &'static str,
}

/// The fixed bonus card set
pub fn bonuses() -> Vec<BonusCard> {
    vec![
        BonusCard {
            name: "LuckySpin",
            bonus: "200% Welcome Bonus",
            gradient: "linear-gradient(135deg, #fbbf24 0%, #f59e0b 100%)",
        },
        BonusCard {
            name: "GoldenBet",
            bonus: "100 Free Spins",
            gradient: "linear-gradient(135deg, #f59e0b 0%, #ea580c 100%)",
        },
        BonusCard {
            name: "RoyalWin",
            bonus: "500% First Deposit",
            gradient: "linear-gradient(135deg, #a855f7 0%, #ec4899 100%)",
        },
        BonusCard {
            name: "JackpotCity",
            bonus: "No Wagering Bonus",
            gradient: "linear-gradient(135deg, #ef4444 0%, #f43f5e 100%)",
        },
        BonusCard {
            name: "SpinPalace",
            bonus: "50 Free Spins Daily",
            gradient: "linear-gradient(135deg, #10b981 0%, #14b8a6 100%)",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menus_fixed_order() {
        let labels: Vec<String> = header_menu().into_iter().map(|m| m.label).collect();
        assert_eq!(labels, vec!["Home", "Slots", "Bonuses", "About"]);

        let footer: Vec<String> = footer_menu().into_iter().map(|m| m.label).collect();
        assert_eq!(
            footer,
            vec!["About Us", "Terms & Conditions", "Responsible Gambling"]
        );
    }

    #[test]
    fn test_default_slots() {
        let slots = slots();
        assert_eq!(slots.len(), 8);
        assert_eq!(slots[0].name.as_deref(), Some("Gem Rush"));
        assert_eq!(slots[0].logo_url(), "");
        assert_eq!(slots[7].link.as_deref(), Some("#"));
    }

    #[test]
    fn test_footer_text_embeds_site_name() {
        assert!(footer_text("Nova").starts_with("© 2024 Nova."));
        assert_eq!(page_footer_text("Nova"), "© 2024 Nova. All rights reserved.");
    }
}
