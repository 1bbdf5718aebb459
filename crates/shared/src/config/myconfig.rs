use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_KEY_FILE: &str = "analytics_auth.json";
pub const DEFAULT_SCOPE: &str = "https://www.googleapis.com/auth/analytics.readonly";
pub const DEFAULT_REPORTING_URL: &str =
    "https://analyticsreporting.googleapis.com/v4/reports:batchGet";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub is_dev: bool,
    pub log_dir: PathBuf,
    pub http_timeout: Duration,
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    pub key_file: PathBuf,
    pub scopes: Vec<String>,
    pub reporting_url: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_dev = match lookup("DEV_MODE").as_deref() {
            None | Some("") | Some("false") | Some("0") => false,
            Some("true") | Some("1") => true,
            Some(other) => {
                return Err(anyhow!("DEV_MODE must be 'true' or 'false', got '{other}'"));
            }
        };

        let log_dir = lookup("LOG_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                if is_dev {
                    PathBuf::from("./logs")
                } else {
                    PathBuf::from("/var/log/app")
                }
            });

        let http_timeout_secs = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("HTTP_TIMEOUT_SECS must be a valid u64 integer")?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };
        if http_timeout_secs == 0 {
            return Err(anyhow!("HTTP_TIMEOUT_SECS must be greater than zero"));
        }

        Ok(Self {
            is_dev,
            log_dir,
            http_timeout: Duration::from_secs(http_timeout_secs),
            analytics: AnalyticsConfig::from_lookup(&lookup)?,
        })
    }
}

impl AnalyticsConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key_file = lookup("ANALYTICS_KEY_FILE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_KEY_FILE.to_string());

        let scopes: Vec<String> = lookup("ANALYTICS_SCOPES")
            .unwrap_or_else(|| DEFAULT_SCOPE.to_string())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if scopes.is_empty() {
            return Err(anyhow!("ANALYTICS_SCOPES must name at least one scope"));
        }

        let reporting_url = lookup("ANALYTICS_REPORTING_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REPORTING_URL.to_string());

        Ok(Self {
            key_file: PathBuf::from(key_file),
            scopes,
            reporting_url,
        })
    }

    pub fn scope(&self) -> String {
        self.scopes.join(" ")
    }
}
