//! Configuration loading
//!
//! Settings are layered: built-in defaults, then an optional file, then
//! `TICKET_DESK_*` environment variables. Nested keys use a double
//! underscore, e.g. `TICKET_DESK_UI__COLOR=false`.

use crate::error::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "TICKET_DESK";
const CONFIG_FILE_STEM: &str = "ticket-desk";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    /// Filter directive used when neither `--verbose` nor `RUST_LOG` is given
    pub log_level: String,
    /// Tickets created at startup, oldest first
    pub seed: Vec<SeedTicket>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            log_level: "warn".to_string(),
            seed: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub color: bool,
    pub json: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            json: false,
        }
    }
}

/// One entry of the initial ticket set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedTicket {
    pub title: String,
    pub description: String,
}

impl Config {
    /// Load configuration from `path`, or from the user config directory
    ///
    /// An explicitly given file must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        } else if let Some(stem) = Self::default_location() {
            // Any supported extension (toml, yaml, json, ...)
            builder = builder.add_source(config::File::from(stem).required(false));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn load_or_default() -> Result<Self> {
        Self::load(None)
    }

    /// `<config dir>/ticket-desk` without extension
    pub fn default_location() -> Option<PathBuf> {
        ProjectDirs::from("", "", CONFIG_FILE_STEM)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_STEM))
    }

    /// Seed entries as `(title, description)` pairs
    pub fn seed_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.seed
            .iter()
            .map(|entry| (entry.title.as_str(), entry.description.as_str()))
    }
}
