use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ProspectError;

pub const DEFAULT_LOCATION: &str = "India";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub serpapi_api_key: Option<String>,
    pub google_api_key: Option<String>,
    pub serpapi_base_url: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub default_location: String,

    // Number of results requested per search
    pub profile_results: usize,
    pub news_results: usize,

    pub fetch_timeout_secs: u64,
    pub scrape_concurrency: usize,
    pub linkedin_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            serpapi_api_key: None,
            google_api_key: None,
            serpapi_base_url: "https://serpapi.com".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            gemini_model: "gemini-2.5-flash".to_string(),
            default_location: DEFAULT_LOCATION.to_string(),
            profile_results: 10,
            news_results: 5,
            fetch_timeout_secs: 30,
            scrape_concurrency: 1,
            linkedin_only: false,
        }
    }
}

/// API keys that must be present before any request is issued.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub serpapi_api_key: String,
    pub google_api_key: String,
}

impl Config {
    /// Loads an optional TOML file, then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw).map_err(|e| ProspectError::InvalidConfig {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("SERPAPI_API_KEY").filter(|k| !k.is_empty()) {
            self.serpapi_api_key = Some(key);
        }
        if let Some(key) = lookup("GOOGLE_API_KEY").filter(|k| !k.is_empty()) {
            self.google_api_key = Some(key);
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.gemini_model = model;
        }
        if let Some(secs) = lookup("FETCH_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            self.fetch_timeout_secs = secs;
        }
        if let Some(n) = lookup("SCRAPE_CONCURRENCY").and_then(|s| s.parse().ok()) {
            self.scrape_concurrency = n;
        }
        if let Some(flag) = lookup("LINKEDIN_ONLY").and_then(|s| s.parse().ok()) {
            self.linkedin_only = flag;
        }
    }

    pub fn require_keys(&self) -> Result<Credentials, ProspectError> {
        let serpapi_api_key = self
            .serpapi_api_key
            .clone()
            .ok_or(ProspectError::MissingApiKey("SERPAPI_API_KEY"))?;
        let google_api_key = self
            .google_api_key
            .clone()
            .ok_or(ProspectError::MissingApiKey("GOOGLE_API_KEY"))?;

        Ok(Credentials {
            serpapi_api_key,
            google_api_key,
        })
    }
}
