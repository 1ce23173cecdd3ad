//! Navigation menu entries

use serde::{Deserialize, Serialize};

/// A top-level menu entry, optionally grouping a submenu
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    pub id: Option<i64>,
    pub label: String,
    pub url: String,
    pub open_in_new_tab: bool,
    pub submenu: Vec<SubmenuItem>,
}

/// A nested entry inside a menu group
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmenuItem {
    pub id: Option<i64>,
    pub label: String,
    pub url: String,
    pub open_in_new_tab: bool,
}

impl MenuItem {
    /// Plain link entry
    pub fn link(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
            ..Default::default()
        }
    }

    /// Whether this entry renders as an expandable group
    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }
}
