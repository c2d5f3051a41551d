//! App Configuration
//!
//! Settings are fixed at build time; overrides come from `HELPDESK_API_URL`
//! and `HELPDESK_LOG` when the wasm bundle is compiled.

use std::time::Duration;

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:7070";
pub const DEFAULT_NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
    /// How long an inline error stays on screen
    pub notice_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            log_level: LevelFilter::Info,
            notice_timeout: DEFAULT_NOTICE_TIMEOUT,
        }
    }
}

impl AppConfig {
    /// Configuration baked in by the build
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("HELPDESK_API_URL"), option_env!("HELPDESK_LOG"))
    }

    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.to_string();
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse().ok()) {
            config.log_level = level;
        }
        config
    }
}
