//! Configuration to acknowledge tool preferences as well as set defaults.
//!
//! Specifically, we try to find a daily-summary.toml, and if present we load settings from there.
//! This controls which files count as notes, where aggregation settings are persisted and which
//! fenced block language triggers a summary. Aggregation settings themselves live in the vault
//! (see [`crate::settings`]).

use facet::Facet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Facet, Clone)]
/// Tool preferences loaded from daily-summary.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes that mark a file as a note.
    pub file_extensions: Vec<String>,
    #[facet(default = ".daily-summary/data.json".to_string())]
    /// Settings file location, relative to the vault root.
    pub settings_file: String,
    #[facet(default = "daily-summary".to_string())]
    /// Info string language of summary blocks.
    pub block_language: String,
}

impl Config {
    #[must_use]
    /// Load configuration from daily-summary.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        Self::load_from(Path::new("daily-summary.toml"))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults when absent or invalid.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }

    #[must_use]
    /// Settings file location for a vault rooted at `vault`.
    pub fn settings_path(&self, vault: &Path) -> PathBuf {
        vault.join(&self.settings_file)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
