//! Site Configuration
//!
//! Brand and contact details plus a few runtime switches, compiled in from
//! `assets/site.json`.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

const SITE_JSON: &str = include_str!("../assets/site.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown log level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,
    pub address: Vec<String>,
    pub phone: String,
    pub email: String,
    pub opening_hours: Vec<String>,
    /// off, error, warn, info, debug, trace
    pub log_level: String,
    pub custom_cursor: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "The Hipsters".to_string(),
            tagline: "Everyday with Coffee".to_string(),
            address: Vec::new(),
            phone: String::new(),
            email: String::new(),
            opening_hours: Vec::new(),
            log_level: "info".to_string(),
            custom_cursor: true,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.level_filter()?;
        Ok(config)
    }

    /// Embedded config, or defaults when it does not parse
    pub fn load() -> (Self, Option<ConfigError>) {
        match Self::from_json(SITE_JSON) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
