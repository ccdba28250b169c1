//! Cross-note aggregation of same-titled sections.
//!
//! Given a title, every note under the search folder (other than the note doing the asking) is
//! parsed and its sections with exactly that title are collected in order, then rendered through
//! the template and joined into one text.

use crate::error::Result;
use crate::section::{parse_sections, Section};
use crate::settings::Settings;
use crate::template::{apply_template, TemplateSource};
use crate::vault::{vault_path, DocumentStore};
use tracing::{debug, warn};

/// Collects matching sections from a document store according to the current settings.
pub struct Aggregator<'a, S: DocumentStore + ?Sized> {
    store: &'a S,
    settings: &'a Settings,
    template: TemplateSource,
}

impl<'a, S: DocumentStore + ?Sized> Aggregator<'a, S> {
    #[must_use]
    /// Aggregate over `store` using `settings`, rendering with `template`.
    pub fn new(store: &'a S, settings: &'a Settings, template: TemplateSource) -> Self {
        Self {
            store,
            settings,
            template,
        }
    }

    #[must_use]
    /// Aggregate over `store`, reading the template named in `settings`.
    pub fn from_settings(store: &'a S, settings: &'a Settings) -> Self {
        Self::new(store, settings, TemplateSource::load(store, settings))
    }

    /// Note paths to search: under the search folder and not `exclude`.
    ///
    /// `exclude` is normalised like any other vault path; an empty string excludes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be listed.
    pub fn candidates(&self, exclude: &str) -> Result<Vec<String>> {
        let prefix = self.settings.search_prefix();
        let exclude = (!exclude.is_empty()).then(|| vault_path(exclude));
        Ok(self
            .store
            .paths()?
            .into_iter()
            .filter(|path| path.starts_with(prefix) && exclude.as_ref() != Some(path))
            .collect())
    }

    /// Every section titled exactly `title`, across candidates in store order.
    ///
    /// Notes that fail to read are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be listed.
    pub fn collect(&self, title: &str, exclude: &str) -> Result<Vec<Section>> {
        let mut matches = Vec::new();
        for path in self.candidates(exclude)? {
            let text = match self.store.read(&path) {
                Ok(text) => text,
                Err(e) => {
                    warn!(path = %path, error = %e, "skipping unreadable note");
                    continue;
                }
            };
            let before = matches.len();
            matches.extend(
                parse_sections(&text)
                    .into_iter()
                    .filter(|section| section.title == title),
            );
            debug!(path = %path, found = matches.len() - before, "scanned note");
        }
        Ok(matches)
    }

    /// Rendered output lines for `title`, one per section (or the template failure line).
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be listed.
    pub fn outputs(&self, title: &str, exclude: &str) -> Result<Vec<String>> {
        let sections = self.collect(title, exclude)?;
        Ok(apply_template(&sections, &self.template))
    }

    /// Rendered output for `title`, joined with newlines.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be listed.
    pub fn render(&self, title: &str, exclude: &str) -> Result<String> {
        Ok(self.outputs(title, exclude)?.join("\n"))
    }
}

#[cfg(test)]
#[path = "tests/aggregate.rs"]
mod tests;
