//! Persisted aggregation settings.
//!
//! Settings live in a JSON file inside the vault and are loaded once when the tool starts and
//! saved after every edit. The template is stored as a vault path and re-resolved against the
//! document store on load, so a template note that has since been deleted loads as "no template".

use crate::error::{Error, Result};
use crate::vault::DocumentStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[allow(clippy::unnecessary_wraps)]
fn default_search_folder() -> Option<String> {
    Some("/".to_string())
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// User-editable configuration of the aggregator.
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Vault path of the note used as the per-section template.
    pub template: Option<String>,
    #[serde(default = "default_search_folder")]
    /// Path prefix a note must start with to be searched; `None` searches everything.
    pub search_folder: Option<String>,
    #[serde(default)]
    /// Tag setting kept for compatibility; aggregation does not filter on it.
    pub search_tag: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template: None,
            search_folder: default_search_folder(),
            search_tag: None,
        }
    }
}

impl Settings {
    #[must_use]
    /// Prefix candidate notes are matched against.
    pub fn search_prefix(&self) -> &str {
        self.search_folder.as_deref().unwrap_or("")
    }

    /// Point the template at `path`, or clear it when `path` is empty or names no note.
    pub fn set_template<S: DocumentStore + ?Sized>(&mut self, store: &S, path: &str) {
        self.template = if path.is_empty() {
            None
        } else {
            store.resolve(path)
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A batch of settings changes, applied together before a single save.
pub struct SettingsEdit {
    /// New template note path; empty clears it.
    pub template: Option<String>,
    /// Drop the template so sections render raw.
    pub clear_template: bool,
    /// New search folder prefix.
    pub search_folder: Option<String>,
    /// New search tag.
    pub search_tag: Option<String>,
}

impl SettingsEdit {
    /// Apply every requested change to `settings`. A template path is resolved against `store`;
    /// `clear_template` wins over `template`.
    pub fn apply<S: DocumentStore + ?Sized>(&self, settings: &mut Settings, store: &S) {
        if let Some(template) = &self.template {
            settings.set_template(store, template);
            if !template.is_empty() && settings.template.is_none() {
                warn!(template = %template, "no note at template path, template cleared");
            }
        }
        if self.clear_template {
            settings.template = None;
        }
        if let Some(folder) = &self.search_folder {
            settings.search_folder = Some(folder.clone());
        }
        if let Some(tag) = &self.search_tag {
            settings.search_tag = Some(tag.clone());
        }
    }
}

/// JSON file holding [`Settings`].
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    #[must_use]
    /// Settings stored at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    /// Location of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, defaulting missing fields and a missing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not valid JSON.
    pub fn load<S: DocumentStore + ?Sized>(&self, store: &S) -> Result<Settings> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(e) => return Err(Error::io(&self.path, e)),
        };

        let mut settings: Settings =
            serde_json::from_str(&contents).map_err(|source| Error::Settings {
                path: self.path.clone(),
                source,
            })?;

        if let Some(template) = settings.template.take() {
            settings.template = store.resolve(&template);
            if settings.template.is_none() {
                warn!(template = %template, "configured template not found in vault");
            }
        }

        Ok(settings)
    }

    /// Write settings, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json).map_err(|e| Error::io(&self.path, e))?;
        debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod tests;
