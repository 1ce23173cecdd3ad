//! skinforge: a fast static site generator for data-driven landing page skins
//!
//! A single JSON record (site copy, theme colors, menus, slot lists, pages)
//! is resolved against documented defaults and rendered through an embedded
//! Tera skin into a set of static HTML pages.

pub mod commands;
pub mod config;
pub mod generator;
pub mod helpers;
pub mod record;
pub mod resolve;
pub mod server;
pub mod templates;
pub mod theme;

use anyhow::Result;
use std::path::Path;

use record::Record;

/// The main skinforge application
#[derive(Clone)]
pub struct Skinforge {
    /// Tool configuration
    pub config: config::ToolConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Path of the JSON record
    pub data_path: std::path::PathBuf,
    /// Output directory
    pub public_dir: std::path::PathBuf,
    /// Verbatim asset directory
    pub static_dir: std::path::PathBuf,
}

impl Skinforge {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("skinforge.yml");

        let config = if config_path.exists() {
            config::ToolConfig::load(&config_path)?
        } else {
            config::ToolConfig::default()
        };

        let data_path = base_dir.join(&config.data_file);
        let public_dir = base_dir.join(&config.public_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Ok(Self {
            config,
            base_dir,
            data_path,
            public_dir,
            static_dir,
        })
    }

    /// Load the record once for a render
    pub fn load_record(&self) -> Result<Record> {
        Ok(Record::load(&self.data_path)?)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
