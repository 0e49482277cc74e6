use std::fs;
use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use summarizer_engine::{FetchSettings, SheetsSettings, DEFAULT_RANGE, DEFAULT_SHEETS_API_BASE};
use thiserror::Error;

/// Points at a RON config file; overrides the default lookup.
pub const CONFIG_ENV_VAR: &str = "SUMMARIZER_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "summarizer.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config file {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("{var} must be a whole number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Server configuration: defaults, then an optional RON file, then environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    pub spreadsheet_id: Option<String>,
    pub sheet_range: String,
    pub sheets_api_base: String,
    pub access_token: Option<String>,
    /// Where the live view fetches from; defaults to this server's own endpoint.
    pub companies_url: Option<String>,
    pub request_timeout_ms: u64,
    pub step_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            log_level: "info".to_string(),
            log_file: None,
            spreadsheet_id: None,
            sheet_range: DEFAULT_RANGE.to_string(),
            sheets_api_base: DEFAULT_SHEETS_API_BASE.to_string(),
            access_token: None,
            companies_url: None,
            request_timeout_ms: 30_000,
            step_delay_ms: 2_000,
        }
    }
}

impl AppConfig {
    /// Loads from the process environment and working directory.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
        let file = match explicit {
            Some(path) => Some(path),
            None if fallback.is_file() => Some(fallback),
            None => None,
        };
        Self::load_from(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Loads from an optional file, then applies overrides from `env`.
    pub fn load_from(
        file: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(path) => Self::read_file(path)?,
            None => Self::default(),
        };
        config.apply_env(env)?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        let text = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = text("BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = text("LOG_LEVEL") {
            self.log_level = value;
        }
        if let Some(value) = text("LOG_FILE") {
            self.log_file = Some(PathBuf::from(value));
        }
        if let Some(value) = text("SPREADSHEET_ID") {
            self.spreadsheet_id = Some(value);
        }
        if let Some(value) = text("SHEET_RANGE") {
            self.sheet_range = value;
        }
        if let Some(value) = text("SHEETS_API_BASE") {
            self.sheets_api_base = value;
        }
        if let Some(value) = text("SHEETS_ACCESS_TOKEN") {
            self.access_token = Some(value);
        }
        if let Some(value) = text("COMPANIES_URL") {
            self.companies_url = Some(value);
        }
        if let Some(value) = text("REQUEST_TIMEOUT_MS") {
            self.request_timeout_ms = parse_number("REQUEST_TIMEOUT_MS", value)?;
        }
        if let Some(value) = text("STEP_DELAY_MS") {
            self.step_delay_ms = parse_number("STEP_DELAY_MS", value)?;
        }
        Ok(())
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            ..FetchSettings::default()
        }
    }

    pub fn sheets_settings(&self) -> SheetsSettings {
        SheetsSettings {
            api_base: self.sheets_api_base.clone(),
            spreadsheet_id: self.spreadsheet_id.clone(),
            range: self.sheet_range.clone(),
            access_token: self.access_token.clone(),
            fetch: self.fetch_settings(),
        }
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    /// The configured companies URL, or this server's own endpoint at `local_addr`.
    pub fn companies_url(&self, local_addr: SocketAddr) -> String {
        if let Some(url) = &self.companies_url {
            return url.clone();
        }
        let mut addr = local_addr;
        if addr.ip().is_unspecified() {
            addr.set_ip(std::net::Ipv4Addr::LOCALHOST.into());
        }
        format!("http://{addr}/api/companies")
    }
}

fn parse_number(var: &'static str, value: String) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { var, value })
}
