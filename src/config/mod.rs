//! Presentation configuration persisted next to the wallet data.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::amount::LocaleFormat;

const DEFAULT_STAKING_POLL_INTERVAL_MS: u64 = 15_000;
const MIN_STAKING_POLL_INTERVAL_MS: u64 = 1_000;

/// Errors surfaced while loading or storing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config encode error: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Settings consumed by the staking and jetton screens.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WalletUiConfig {
    /// Separator conventions used when parsing typed amounts.
    pub locale: LocaleFormat,
    /// Interval between silent staking pool refreshes.
    pub staking_poll_interval_ms: u64,
}

impl Default for WalletUiConfig {
    fn default() -> Self {
        WalletUiConfig {
            locale: LocaleFormat::default(),
            staking_poll_interval_ms: DEFAULT_STAKING_POLL_INTERVAL_MS,
        }
    }
}

impl WalletUiConfig {
    /// Clamp values the screens cannot work with back into range. A grouping
    /// separator colliding with the decimal separator would make every
    /// fractional amount unparseable, so it is dropped.
    pub fn sanitized(mut self) -> Self {
        if self.staking_poll_interval_ms < MIN_STAKING_POLL_INTERVAL_MS {
            self.staking_poll_interval_ms = MIN_STAKING_POLL_INTERVAL_MS;
        }
        if self.locale.grouping_separator == Some(self.locale.decimal_separator) {
            self.locale.grouping_separator = None;
        }
        self
    }

    pub fn staking_poll_interval(&self) -> Duration {
        Duration::from_millis(self.staking_poll_interval_ms)
    }
}

/// Load the config at `path`, merging any present fields over `fallback`.
/// A missing file is not an error; the fallback is returned unchanged.
pub fn load(path: &Path, fallback: &WalletUiConfig) -> Result<WalletUiConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            #[derive(Debug, Default, Deserialize)]
            #[serde(default)]
            struct PartialConfig {
                locale: Option<LocaleFormat>,
                staking_poll_interval_ms: Option<u64>,
            }

            let overrides: PartialConfig = toml::from_str(&contents)?;

            let mut merged = fallback.clone();
            if let Some(locale) = overrides.locale {
                merged.locale = locale;
            }
            if let Some(interval) = overrides.staking_poll_interval_ms {
                merged.staking_poll_interval_ms = interval;
            }
            Ok(merged.sanitized())
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file missing; using fallback");
            Ok(fallback.clone())
        }
        Err(error) => Err(error.into()),
    }
}

/// Persist `config` (sanitized) at `path`, creating parent directories.
pub fn store(path: &Path, config: &WalletUiConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let encoded = toml::to_string_pretty(&config.clone().sanitized())?;
    fs::write(path, encoded)?;
    Ok(())
}
