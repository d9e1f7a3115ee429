use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML site config, for keeping the data location and output
/// layout next to the page instead of on the command line.
///
/// ```toml
/// data_url = "https://example.com/data.json"
/// output_path = "./public"
/// output_file = "index.html"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteFileConfig {
    pub data_url: Option<String>,
    pub output_path: Option<String>,
    pub output_file: Option<String>,
}

impl SiteFileConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}
