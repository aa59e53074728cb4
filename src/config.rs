// src/config.rs
// =============================================================================
// Settings for one crawl run.
//
// The CLI fills this struct in (see cli.rs); anything the user leaves out
// falls back to the defaults below. Deserialize plus the serde defaults let a
// partial JSON object (camelCase keys) stand in for the full settings.
// =============================================================================

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const METADATA_FILE_NAME: &str = "_url_mapping.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlConfig {
    #[serde(default = "default_seed_url")]
    pub seed_url: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Stop after this many URLs have been attempted
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Pause after every processed URL, success or failure
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Write the metadata index after this many saved pages (and at the end)
    #[serde(default = "default_flush_every")]
    pub flush_every: usize,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seed_url: default_seed_url(),
            output_dir: default_output_dir(),
            max_pages: default_max_pages(),
            request_delay_ms: default_request_delay_ms(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            flush_every: default_flush_every(),
        }
    }
}

impl CrawlConfig {
    /// Checks the settings and returns the parsed seed URL.
    pub fn validate(&self) -> Result<Url> {
        let seed = Url::parse(&self.seed_url)
            .map_err(|e| anyhow!("Invalid seed URL '{}': {}", self.seed_url, e))?;

        if !matches!(seed.scheme(), "http" | "https") {
            return Err(anyhow!("Seed URL must be http or https: {}", self.seed_url));
        }
        if seed.host_str().is_none() {
            return Err(anyhow!("Seed URL has no host: {}", self.seed_url));
        }
        if self.max_pages == 0 {
            return Err(anyhow!("max pages must be at least 1"));
        }
        if self.flush_every == 0 {
            return Err(anyhow!("flush interval must be at least 1"));
        }

        Ok(seed)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.output_dir.join(METADATA_FILE_NAME)
    }
}

fn default_seed_url() -> String {
    String::from("https://torahweb.org")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("ScrapedHTML")
}

fn default_max_pages() -> usize {
    100
}

fn default_request_delay_ms() -> u64 {
    1_000
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!(
        "{}/{} (+polite same-site crawler)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

fn default_flush_every() -> usize {
    1
}
