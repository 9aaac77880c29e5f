// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: the remote track
//! source used by `--fetch`, stored in a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use gpxif::config::{self, Config, TrackSourceConfig};
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     track_source: Some(TrackSourceConfig {
//!         url_template: "https://example.com/gpx?from={from}&to={to}".to_string(),
//!         username: "example".to_string(),
//!         password: "password".to_string(),
//!     }),
//! };
//!
//! let path = PathBuf::from("./temp_config_dir/settings.toml");
//! config::save_to_path(&config, &path).expect("Failed to save to path");
//! let loaded = config::load_from_path(&path).expect("Failed to load from path");
//! assert_eq!(loaded, config);
//! ```

pub mod defaults;

use crate::app::paths;
use crate::error::Result;
use defaults::CONFIG_FILE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub track_source: Option<TrackSourceConfig>,
}

/// Remote GPX endpoint. `url_template` may contain `{from}` and `{to}`,
/// replaced by `YYYY-MM-DD` dates.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSourceConfig {
    pub url_template: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for TrackSourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackSourceConfig")
            .field("url_template", &self.url_template)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the config from the default location, or defaults if there is none.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Loads a config file. Unlike [`load`], a missing or invalid file is an error.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
