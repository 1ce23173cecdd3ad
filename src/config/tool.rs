//! Tool configuration (skinforge.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Generator configuration
///
/// Everything about the rendered output comes from the record itself; this
/// file only locates the inputs and the output directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Path of the JSON record, relative to the base directory
    pub data_file: String,

    /// Output directory
    pub public_dir: String,

    /// Directory of assets copied verbatim into the output
    pub static_dir: String,

    /// Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            data_file: "data.json".to_string(),
            public_dir: "public".to_string(),
            static_dir: "static".to_string(),
            extra: HashMap::new(),
        }
    }
}

impl ToolConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ToolConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
