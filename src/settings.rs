use std::fs;
use std::io::ErrorKind;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::paths::AppPaths;

const DEFAULT_COMIC_ENDPOINT: &str = "https://xkcd.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_comic_endpoint")]
    pub comic_endpoint: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_comic_endpoint() -> String {
    DEFAULT_COMIC_ENDPOINT.to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            comic_endpoint: default_comic_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Settings {
    pub fn load(paths: &AppPaths) -> Result<Self> {
        match fs::read_to_string(&paths.config_file) {
            Ok(raw) => Ok(toml::from_str(&raw).unwrap_or_else(|err| {
                log::warn!("Ignoring malformed {}: {err}", paths.config_file.display());
                Self::default()
            })),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => {
                log::debug!("Reading {}: {err}", paths.config_file.display());
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, paths: &AppPaths) -> Result<()> {
        let toml = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(&paths.config_file, toml).context("Failed to write settings")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
