//! Application configuration management.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file by the binary before `Config::from_env` runs:
//!
//! - `TALENTSHEET_SHEET_URL`: full CSV export URL, or
//! - `TALENTSHEET_SHEET_ID`: Google Sheet id, expanded to its export URL
//! - `TALENTSHEET_LISTEN_ADDR` (default `127.0.0.1:5000`)
//! - `TALENTSHEET_CACHE_SECS` (default 60)
//! - `TALENTSHEET_REQUEST_TIMEOUT_SECS` (default 30)
//! - `TALENTSHEET_SHEET_HAS_HEADER` (default true)
//! - `TALENTSHEET_REVIEWER`: name shown in page headers
//! - `TALENTSHEET_LOG_DIR`: enables a daily log file in this directory

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};

use crate::api::client::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::api::SheetClient;
use crate::cache::DEFAULT_CACHE_SECS;

/// Prefix shared by every variable
const ENV_PREFIX: &str = "TALENTSHEET_";

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_REVIEWER: &str = "reviewer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub sheet_url: String,
    pub listen_addr: SocketAddr,
    pub cache_secs: i64,
    pub request_timeout_secs: u64,
    pub sheet_has_header: bool,
    pub reviewer: String,
    pub log_dir: Option<PathBuf>,
    cache_window: chrono::Duration,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which receives full variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(&format!("{}{}", ENV_PREFIX, key))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let sheet_url = match (get("SHEET_URL"), get("SHEET_ID")) {
            (Some(url), _) => url,
            (None, Some(id)) => SheetClient::google_export_url(&id),
            (None, None) => bail!(
                "No sheet configured: set {0}SHEET_URL or {0}SHEET_ID",
                ENV_PREFIX
            ),
        };

        let cache_secs: i64 = parse_var("CACHE_SECS", get("CACHE_SECS"), DEFAULT_CACHE_SECS)?;
        if cache_secs < 0 {
            bail!("{}CACHE_SECS must not be negative", ENV_PREFIX);
        }
        let cache_window = chrono::Duration::try_seconds(cache_secs)
            .ok_or_else(|| anyhow!("{}CACHE_SECS is too large: {}", ENV_PREFIX, cache_secs))?;

        Ok(Self {
            sheet_url,
            listen_addr: parse_var(
                "LISTEN_ADDR",
                get("LISTEN_ADDR"),
                SocketAddr::from_str(DEFAULT_LISTEN_ADDR)?,
            )?,
            cache_secs,
            request_timeout_secs: parse_var(
                "REQUEST_TIMEOUT_SECS",
                get("REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            sheet_has_header: match get("SHEET_HAS_HEADER") {
                Some(v) => parse_bool(&v)
                    .ok_or_else(|| anyhow!("{}SHEET_HAS_HEADER: expected a boolean, got {:?}", ENV_PREFIX, v))?,
                None => true,
            },
            reviewer: get("REVIEWER").unwrap_or_else(|| DEFAULT_REVIEWER.to_string()),
            log_dir: get("LOG_DIR").map(PathBuf::from),
            cache_window,
        })
    }

    pub fn cache_window(&self) -> chrono::Duration {
        self.cache_window
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_var<T>(key: &str, value: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(v) => v
            .parse()
            .with_context(|| format!("Invalid value for {}{}: {:?}", ENV_PREFIX, key, v)),
        None => Ok(default),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (format!("{}{}", ENV_PREFIX, k), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("SHEET_URL", "https://example.com/sheet.csv")]).unwrap();
        assert_eq!(config.sheet_url, "https://example.com/sheet.csv");
        assert_eq!(config.listen_addr, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.cache_secs, 60);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.sheet_has_header);
        assert_eq!(config.reviewer, "reviewer");
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn test_sheet_id_builds_export_url() {
        let config = load(&[("SHEET_ID", "abc")]).unwrap();
        assert_eq!(
            config.sheet_url,
            "https://docs.google.com/spreadsheets/d/abc/export?format=csv"
        );
    }

    #[test]
    fn test_url_wins_over_id() {
        let config = load(&[("SHEET_ID", "abc"), ("SHEET_URL", "http://x/y.csv")]).unwrap();
        assert_eq!(config.sheet_url, "http://x/y.csv");
    }

    #[test]
    fn test_missing_sheet_is_an_error() {
        let err = load(&[("SHEET_URL", "  ")]).unwrap_err();
        assert!(err.to_string().contains("No sheet configured"));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SHEET_URL", "http://x/y.csv"),
            ("LISTEN_ADDR", "0.0.0.0:8080"),
            ("CACHE_SECS", "5"),
            ("REQUEST_TIMEOUT_SECS", "3"),
            ("SHEET_HAS_HEADER", "no"),
            ("REVIEWER", "kim"),
            ("LOG_DIR", "/tmp/logs"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.cache_window(), chrono::Duration::seconds(5));
        assert_eq!(config.request_timeout_secs, 3);
        assert!(!config.sheet_has_header);
        assert_eq!(config.reviewer, "kim");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
    }

    #[test]
    fn test_invalid_values() {
        assert!(load(&[("SHEET_URL", "u"), ("CACHE_SECS", "soon")]).is_err());
        assert!(load(&[("SHEET_URL", "u"), ("CACHE_SECS", "-1")]).is_err());
        let err = load(&[("SHEET_URL", "u"), ("CACHE_SECS", "99999999999999999")]).unwrap_err();
        assert!(err.to_string().contains("TALENTSHEET_CACHE_SECS"));
        assert!(load(&[("SHEET_URL", "u"), ("LISTEN_ADDR", "nowhere")]).is_err());
        assert!(load(&[("SHEET_URL", "u"), ("SHEET_HAS_HEADER", "maybe")]).is_err());
    }
}
