use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::FixedOffset;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const CONFIG_PATH_ENV: &str = "TICK_BOARD_CONFIG";

/// Upper bound for `feed.max_value`; values are scaled by 10^4 when rounded.
pub const MAX_FEED_VALUE: f64 = 1e12;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub interval: String,
    pub utc_offset_hours: i32,
    pub time_format: String,
    pub max_value: f64,
    pub seed: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            interval: "2s".to_string(),
            utc_offset_hours: 8,
            time_format: "%H:%M:%S".to_string(),
            max_value: 100_000.0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub refresh_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Parse an interval string (e.g. "500ms", "2s", "1m", "1h") into a [`Duration`].
pub fn parse_interval(s: &str) -> Result<Duration, AppError> {
    let (num_str, unit_ms) = if let Some(n) = s.strip_suffix("ms") {
        (n, 1)
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1_000)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60_000)
    } else if let Some(n) = s.strip_suffix('h') {
        (n, 3_600_000)
    } else {
        return Err(AppError::InvalidInterval(format!(
            "'{}': expected one of ms/s/m/h suffixes",
            s
        )));
    };

    let n: u64 = num_str.parse().map_err(|_| {
        AppError::InvalidInterval(format!("'{}': quantity must be a positive integer", s))
    })?;
    if n == 0 {
        return Err(AppError::InvalidInterval(format!(
            "'{}': quantity must be > 0",
            s
        )));
    }

    n.checked_mul(unit_ms)
        .map(Duration::from_millis)
        .ok_or_else(|| AppError::InvalidInterval(format!("'{}': value is too large", s)))
}

impl FeedConfig {
    pub fn interval(&self) -> Result<Duration, AppError> {
        parse_interval(&self.interval)
    }

    pub fn utc_offset(&self) -> Result<FixedOffset, AppError> {
        if !(-23..=23).contains(&self.utc_offset_hours) {
            return Err(AppError::Config(format!(
                "feed.utc_offset_hours must be within -23..=23, got {}",
                self.utc_offset_hours
            )));
        }
        FixedOffset::east_opt(self.utc_offset_hours * 3600).ok_or_else(|| {
            AppError::Config(format!(
                "feed.utc_offset_hours {} is out of range",
                self.utc_offset_hours
            ))
        })
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.interval()?;
        self.utc_offset()?;
        if !self.max_value.is_finite() || self.max_value <= 0.0 || self.max_value > MAX_FEED_VALUE
        {
            return Err(AppError::Config(format!(
                "feed.max_value must be within (0, {}], got {}",
                MAX_FEED_VALUE, self.max_value
            )));
        }
        if self.time_format.trim().is_empty() {
            return Err(AppError::Config(
                "feed.time_format must not be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::Config(format!(
                "feed.time_format '{}' is not a valid strftime pattern",
                self.time_format
            )));
        }
        Ok(())
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, AppError> {
        let config: Config = toml::from_str(s)?;
        config.feed.validate()?;
        Ok(config)
    }

    /// Load `config/default.toml` (or `$TICK_BOARD_CONFIG`), falling back to
    /// built-in defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config
                .feed
                .validate()
                .context("built-in feed defaults are invalid")?;
            return Ok(config);
        }

        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&config_str)
            .with_context(|| format!("failed to parse {}", path.display()))
    }
}
