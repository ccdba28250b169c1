//! Per-section template filling.
//!
//! A template is note text containing `{{title}}` and `{{content}}` placeholders. Each matching
//! section produces one filled copy; only the first occurrence of each placeholder is replaced.

use crate::section::Section;
use crate::settings::Settings;
use crate::vault::DocumentStore;
use tracing::warn;

/// Placeholder replaced by the section title.
pub const TITLE_TOKEN: &str = "{{title}}";
/// Placeholder replaced by the section content.
pub const CONTENT_TOKEN: &str = "{{content}}";
/// Sole output line when a configured template cannot be read.
pub const TEMPLATE_FAILURE: &str = "Failed to load template";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Outcome of loading the configured template.
pub enum TemplateSource {
    /// No template configured; sections render as their raw content.
    None,
    /// A template is configured but its text could not be read or was empty.
    Unreadable,
    /// Template text ready for filling.
    Text(String),
}

impl TemplateSource {
    #[must_use]
    /// Read the template named in `settings` from the store.
    pub fn load<S: DocumentStore + ?Sized>(store: &S, settings: &Settings) -> Self {
        let Some(path) = settings.template.as_deref() else {
            return Self::None;
        };
        match store.read(path) {
            Ok(text) if !text.is_empty() => Self::Text(text),
            Ok(_) => {
                warn!(template = path, "template is empty");
                Self::Unreadable
            }
            Err(e) => {
                warn!(template = path, error = %e, "failed to read template");
                Self::Unreadable
            }
        }
    }
}

#[must_use]
/// Fill `template` once for `section`, replacing the first title then the first content token.
pub fn fill(template: &str, section: &Section) -> String {
    template
        .replacen(TITLE_TOKEN, &section.title, 1)
        .replacen(CONTENT_TOKEN, &section.content, 1)
}

#[must_use]
/// Render every section through the template source.
pub fn apply_template(sections: &[Section], template: &TemplateSource) -> Vec<String> {
    match template {
        TemplateSource::None => sections.iter().map(|s| s.content.clone()).collect(),
        TemplateSource::Unreadable => vec![TEMPLATE_FAILURE.to_string()],
        TemplateSource::Text(text) => sections.iter().map(|s| fill(text, s)).collect(),
    }
}

#[cfg(test)]
#[path = "tests/template.rs"]
mod tests;
