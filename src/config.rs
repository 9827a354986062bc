// Runner configuration: defaults, optional config file, environment overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::helpers::{redact_uri_password, validate_mongodb_uri};

#[cfg(debug_assertions)]
const APP_NAME: &str = "bookshelf-query-dev";

#[cfg(not(debug_assertions))]
const APP_NAME: &str = "bookshelf-query";

const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "plp_bookstore";
pub const DEFAULT_COLLECTION: &str = "books";

pub const ENV_URI: &str = "BOOKSHELF_URI";
pub const ENV_DATABASE: &str = "BOOKSHELF_DATABASE";
pub const ENV_COLLECTION: &str = "BOOKSHELF_COLLECTION";

/// Where every operation connects. Supplied once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

/// On-disk form; any field may be left out.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    uri: Option<String>,
    database: Option<String>,
    collection: Option<String>,
}

impl RunnerConfig {
    /// Defaults, then the user config file, then `BOOKSHELF_*` environment variables.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = Self::default_file_path() {
            config.merge_file(&path)?;
        }
        config.merge_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Platform config directory entry, e.g. `~/.config/bookshelf-query/config.json`.
    pub fn default_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Overlay values from a JSON file. A missing file is not an error.
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: ConfigFile = serde_json::from_str(&data)
            .with_context(|| format!("Failed to deserialize {}", path.display()))?;

        self.overlay(file.uri, file.database, file.collection);
        Ok(())
    }

    /// Overlay values from the environment through `lookup`.
    pub fn merge_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        self.overlay(lookup(ENV_URI), lookup(ENV_DATABASE), lookup(ENV_COLLECTION));
    }

    /// Overlay explicit values, typically command-line flags.
    pub fn overlay(
        &mut self,
        uri: Option<String>,
        database: Option<String>,
        collection: Option<String>,
    ) {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        if let Some(uri) = non_empty(uri) {
            self.uri = uri;
        }
        if let Some(database) = non_empty(database) {
            self.database = database;
        }
        if let Some(collection) = non_empty(collection) {
            self.collection = collection;
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_mongodb_uri(&self.uri).context("Invalid connection URI")?;
        Ok(())
    }

    /// Connection target safe for log output.
    pub fn display_target(&self) -> String {
        format!("{} {}.{}", redact_uri_password(&self.uri), self.database, self.collection)
    }
}
