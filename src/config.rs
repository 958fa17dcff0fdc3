//! Configuration handling for the site

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default delay before the mail-compose fallback reports success
const DEFAULT_FALLBACK_DELAY_MS: u64 = 1000;
/// Default lifetime of the success and error panels
const DEFAULT_PANEL_TIMEOUT_SECS: u64 = 10;

/// Credentials for the transactional email service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailServiceConfig {
    pub service_id: String,
    pub template_id: String,
    /// Public key of the account, sent as `user_id`
    pub public_key: String,
    /// Override of the API base URL
    pub endpoint: Option<String>,
}

/// User configuration for the site
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Transactional email service; the mail-compose fallback is used without it
    pub email_service: Option<EmailServiceConfig>,
    /// Delay before the mail-compose fallback resolves, in milliseconds
    pub fallback_delay_ms: Option<u64>,
    /// How long feedback panels stay on screen, in seconds
    pub panel_timeout_secs: Option<u64>,
}

impl SiteConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "worldsedgewellness", "wellness-contact")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: SiteConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_delay_ms.unwrap_or(DEFAULT_FALLBACK_DELAY_MS))
    }

    pub fn panel_timeout(&self) -> Duration {
        Duration::from_secs(self.panel_timeout_secs.unwrap_or(DEFAULT_PANEL_TIMEOUT_SECS))
    }
}
