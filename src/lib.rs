//! daily-summary: collect same-titled markdown sections from across a vault of notes.
//!
//! Notes are split into heading-delimited sections, nested subsections are folded into their
//! parents, and every section whose title matches a request is gathered from the notes under a
//! search folder and rendered through an optional `{{title}}`/`{{content}}` template.

pub mod aggregate;
pub mod block;
pub mod config;
pub mod error;
pub mod formats;
pub mod section;
pub mod settings;
pub mod template;
pub mod vault;

pub use aggregate::Aggregator;
pub use error::{Error, Result};
pub use section::{parse_sections, Section};
pub use settings::{Settings, SettingsEdit, SettingsFile};
pub use template::TemplateSource;
pub use vault::{DocumentStore, FsVault, MemoryVault};
