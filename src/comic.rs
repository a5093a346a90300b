use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Metadata of a single comic as served by `info.0.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComicInfo {
    pub num: i32,
    pub title: String,
    pub safe_title: String,
    pub img: String,
    pub alt: String,
    pub year: String,
    pub month: String,
    pub day: String,
    pub link: String,
    pub news: String,
    pub transcript: String,
}

/// Source of the newest comic, consulted when no saved state is usable.
pub trait ComicInfoProvider {
    fn newest_comic(&self) -> Result<ComicInfo>;
}

impl<F> ComicInfoProvider for F
where
    F: Fn() -> Result<ComicInfo>,
{
    fn newest_comic(&self) -> Result<ComicInfo> {
        self()
    }
}

/// Number of the newest comic, or 0 when the provider cannot say.
pub fn newest_comic_number(provider: &dyn ComicInfoProvider) -> i32 {
    match provider.newest_comic() {
        Ok(info) => info.num,
        Err(err) => {
            log::debug!("Newest comic unavailable: {err:?}");
            0
        }
    }
}

pub struct XkcdClient {
    endpoint: String,
    agent: ureq::Agent,
}

impl XkcdClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            endpoint: endpoint.into(),
            agent,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.comic_endpoint.clone(), settings.request_timeout())
    }

    pub fn newest_url(&self) -> String {
        format!("{}/info.0.json", self.endpoint.trim_end_matches('/'))
    }
}

impl ComicInfoProvider for XkcdClient {
    fn newest_comic(&self) -> Result<ComicInfo> {
        let url = self.newest_url();
        log::info!("Fetching newest comic info from: {}", url);
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| anyhow!("Failed to fetch comic info: {}", e))?;
        serde_json::from_reader(response.into_reader())
            .with_context(|| format!("Invalid comic info from {url}"))
    }
}
