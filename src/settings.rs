use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Map};
use serde::Deserialize;

use crate::collection::DEFAULT_CONCURRENCY;

pub const DEFAULT_LISTING_URL: &str =
    "https://www.nasa.gov/ochmo/hsa-standards/ochmo-technical-briefs/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const SETTINGS_FILE: &str = "ochmo";
const ENV_PREFIX: &str = "OCHMO";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub listing_url: String,
    pub limit: Option<usize>,
    pub concurrency: usize,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            limit: None,
            concurrency: DEFAULT_CONCURRENCY,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("ochmo_scraper/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then `./ochmo.toml` if present, then `OCHMO_*` env vars.
    pub fn load() -> Result<Self> {
        Self::load_from(SETTINGS_FILE, None)
    }

    /// `vars` stands in for the process environment when given.
    pub fn load_from(file: &str, vars: Option<Map<String, String>>) -> Result<Self> {
        Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
