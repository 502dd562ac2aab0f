// src/config.rs

// 🌍 Standard library
use std::env;
use std::path::PathBuf;
use std::time::Duration;

// 📦 External crates
use thiserror::Error;

const FIXTURES_DIR_KEY: &str = "PRICELIST_FIXTURES_DIR";
const SEARCH_DEBOUNCE_KEY: &str = "PRICELIST_SEARCH_DEBOUNCE_MS";
const SIMULATED_LATENCY_KEY: &str = "PRICELIST_SIMULATED_LATENCY_MS";
const COMMAND_BUFFER_KEY: &str = "PRICELIST_COMMAND_BUFFER";

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);
pub const DEFAULT_COMMAND_BUFFER: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("❌ Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub fixtures_dir: PathBuf,
    pub search_debounce: Duration,
    pub simulated_latency: Duration,
    pub command_buffer: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fixtures_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures"),
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            simulated_latency: Duration::ZERO,
            command_buffer: DEFAULT_COMMAND_BUFFER,
        }
    }
}

impl AppConfig {
    /// Reads overrides from the process environment. Call `dotenv().ok()`
    /// first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(FIXTURES_DIR_KEY) {
            config.fixtures_dir = PathBuf::from(dir);
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, SEARCH_DEBOUNCE_KEY)? {
            config.search_debounce = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, SIMULATED_LATENCY_KEY)? {
            config.simulated_latency = Duration::from_millis(ms);
        }
        if let Some(size) = parse_var::<usize, _>(&lookup, COMMAND_BUFFER_KEY)? {
            if size == 0 {
                return Err(ConfigError::InvalidValue {
                    key: COMMAND_BUFFER_KEY,
                    value: size.to_string(),
                });
            }
            config.command_buffer = size;
        }

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
