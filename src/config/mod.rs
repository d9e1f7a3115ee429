pub mod file;
pub mod storage;

use crate::config::file::SiteFileConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_data_location, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "folio-site")]
#[command(about = "Renders a portfolio page from a JSON data document")]
pub struct CliConfig {
    /// Location of the data document: an http(s) URL or a local path.
    #[arg(long, default_value = "data.json")]
    pub data_url: String,

    #[arg(long, default_value = "./public")]
    pub output_path: String,

    #[arg(long, default_value = "index.html")]
    pub output_file: String,

    /// Optional TOML site config; any value set there takes precedence
    /// over the matching flag.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Folds the optional site config file into the flag values. A key
    /// present in the file wins outright, flags included: clap cannot tell
    /// a defaulted flag from an explicit one, so the file is defined as the
    /// stronger source rather than guessing.
    pub fn merged(mut self) -> Result<Self> {
        if let Some(path) = &self.config {
            let file = SiteFileConfig::load(path)?;
            if let Some(data_url) = file.data_url {
                self.data_url = data_url;
            }
            if let Some(output_path) = file.output_path {
                self.output_path = output_path;
            }
            if let Some(output_file) = file.output_file {
                self.output_file = output_file;
            }
        }
        Ok(self)
    }

    pub fn is_remote(&self) -> bool {
        self.data_url.starts_with("http://") || self.data_url.starts_with("https://")
    }
}

impl ConfigProvider for CliConfig {
    fn data_url(&self) -> &str {
        &self.data_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_data_location("data_url", &self.data_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_path("output_file", &self.output_file)?;
        Ok(())
    }
}
