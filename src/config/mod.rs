use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    currency::{CurrencyCode, CurrencyDisplay, FormatOptions, LocaleConfig, NegativeStyle},
    errors::StorageError,
};

const APP_DIR: &str = "kakeibo";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub currency: CurrencyCode,
    pub grouping_separator: char,
    pub currency_display: CurrencyDisplay,
    pub negative_style: NegativeStyle,
    pub plain_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            grouping_separator: LocaleConfig::default().grouping_separator,
            currency_display: CurrencyDisplay::Symbol,
            negative_style: NegativeStyle::Sign,
            plain_mode: false,
            data_file: None,
        }
    }
}

impl Config {
    pub fn locale(&self) -> LocaleConfig {
        LocaleConfig {
            grouping_separator: self.grouping_separator,
        }
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            currency_display: self.currency_display,
            negative_style: self.negative_style,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Resolves `<config dir>/kakeibo/config.json`, falling back to the
    /// working directory when the platform has no config dir.
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_path(base.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the config, or the defaults when no file exists yet.
    pub fn load(&self) -> Result<Config, StorageError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            debug!(path = %self.path.display(), "loaded config");
            Ok(serde_json::from_str(&data)?)
        } else {
            debug!(path = %self.path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
