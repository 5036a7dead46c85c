//! Runtime configuration.
//!
//! Every setting has a built-in default, so the binary runs with no
//! environment at all. Variables only override.

use std::path::PathBuf;

use crate::domain::{InvalidTimeStyle, TimeStyle};
use crate::idsjmk::IdsjmkConfig;

/// Stop queried when `BUS_STOP_NAME` is not set.
pub const DEFAULT_STOP_NAME: &str = "Kartouzská";

pub const STOP_NAME_VAR: &str = "BUS_STOP_NAME";
pub const BASE_URL_VAR: &str = "IDSJMK_BASE_URL";
pub const TIMEOUT_VAR: &str = "IDSJMK_TIMEOUT_SECS";
pub const FIXTURE_VAR: &str = "DEPARTURES_FIXTURE";
pub const TIME_STYLE_VAR: &str = "DEPARTURES_TIME_STYLE";

/// Errors resolving configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Timeout was not a whole number of seconds
    #[error("IDSJMK_TIMEOUT_SECS must be a positive whole number of seconds, got {0:?}")]
    InvalidTimeout(String),

    /// Unknown time style
    #[error("DEPARTURES_TIME_STYLE: {0}")]
    InvalidTimeStyle(#[from] InvalidTimeStyle),
}

/// Settings for a single run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Stop whose departures are shown
    pub stop_name: String,
    /// API client settings
    pub api: IdsjmkConfig,
    /// Read the board from this file instead of the API
    pub fixture: Option<PathBuf>,
    /// How departure times are printed
    pub time_style: TimeStyle,
}

impl AppConfig {
    /// Create a config for the given stop with all other settings default.
    pub fn new(stop_name: impl Into<String>) -> Self {
        Self {
            stop_name: stop_name.into(),
            api: IdsjmkConfig::new(),
            fixture: None,
            time_style: TimeStyle::default(),
        }
    }

    /// Read a board from a file instead of the network.
    pub fn with_fixture(mut self, path: impl Into<PathBuf>) -> Self {
        self.fixture = Some(path.into());
        self
    }

    /// Set the time display style.
    pub fn with_time_style(mut self, style: TimeStyle) -> Self {
        self.time_style = style;
        self
    }

    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let stop_name = get(STOP_NAME_VAR).unwrap_or_else(|| DEFAULT_STOP_NAME.to_string());
        let mut config = Self::new(stop_name);

        if let Some(url) = get(BASE_URL_VAR) {
            config.api = config.api.with_base_url(url);
        }

        if let Some(raw) = get(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&secs| secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            config.api = config.api.with_timeout(secs);
        }

        if let Some(path) = get(FIXTURE_VAR) {
            config = config.with_fixture(path);
        }

        if let Some(raw) = get(TIME_STYLE_VAR) {
            config = config.with_time_style(raw.parse()?);
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_NAME)
    }
}
