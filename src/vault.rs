//! Document stores: where notes come from.
//!
//! Every note is addressed by a vault path: `/`-separated, rooted at the vault with a leading
//! `/` (e.g. `/Daily/2024-05-01.md`). The search folder setting is matched against these paths as
//! a plain string prefix, so the default folder `/` covers the whole vault.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Read-only access to the notes of a vault.
pub trait DocumentStore {
    /// Enumerate the vault paths of every note, in a stable order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be listed.
    fn paths(&self) -> Result<Vec<String>>;

    /// Read the full text of the note at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the note does not exist or cannot be read.
    fn read(&self, path: &str) -> Result<String>;

    /// Normalise `path` and return it if a note exists there.
    fn resolve(&self, path: &str) -> Option<String>;
}

#[must_use]
/// Normalise a path into vault form: forward slashes and a single leading `/`.
///
/// Empty and `.` segments are dropped and `..` pops the previous segment, never climbing above
/// the vault root.
pub fn vault_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }
    format!("/{}", segments.join("/"))
}

/// Notes stored as files beneath a directory on disk.
pub struct FsVault {
    root: PathBuf,
    extensions: Vec<String>,
}

impl FsVault {
    #[must_use]
    /// Serve notes under `root` whose extension is one of `extensions`.
    pub fn new(root: impl Into<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            root: root.into(),
            extensions,
        }
    }

    #[must_use]
    /// Directory the vault is rooted at.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a vault path onto the file system.
    #[must_use]
    pub fn file_path(&self, path: &str) -> PathBuf {
        self.root.join(vault_path(path).trim_start_matches('/'))
    }

    fn is_note(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    /// Turn a command-line argument into a vault path.
    ///
    /// Accepts either a vault path or a file-system path (relative to the working directory)
    /// that lies inside the vault.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DocumentNotFound`] if the argument names no file in the vault.
    pub fn locate(&self, arg: &str) -> Result<String> {
        if let Some(path) = self.resolve(arg) {
            return Ok(path);
        }
        let not_found = || Error::DocumentNotFound(arg.to_string());
        let file = fs::canonicalize(arg).map_err(|_| not_found())?;
        let root = fs::canonicalize(&self.root).map_err(|e| Error::io(&self.root, e))?;
        let relative = file.strip_prefix(&root).map_err(|_| not_found())?;
        self.resolve(&relative.to_string_lossy()).ok_or_else(not_found)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

impl DocumentStore for FsVault {
    fn paths(&self) -> Result<Vec<String>> {
        let mut paths = Vec::new();
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_hidden(entry));
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() || !self.is_note(entry.path()) {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                paths.push(vault_path(&relative.to_string_lossy()));
            }
        }
        Ok(paths)
    }

    fn read(&self, path: &str) -> Result<String> {
        let file = self.file_path(path);
        fs::read_to_string(&file).map_err(|e| Error::io(file, e))
    }

    fn resolve(&self, path: &str) -> Option<String> {
        let normalised = vault_path(path);
        self.file_path(&normalised)
            .is_file()
            .then_some(normalised)
    }
}

#[derive(Default)]
/// Notes held in memory, in insertion order.
pub struct MemoryVault {
    notes: Vec<(String, String)>,
}

impl MemoryVault {
    #[must_use]
    /// Create an empty in-memory vault.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Builder form of [`MemoryVault::insert`].
    pub fn with(mut self, path: &str, text: &str) -> Self {
        self.insert(path, text);
        self
    }

    /// Add a note, replacing any existing note at the same path.
    pub fn insert(&mut self, path: &str, text: &str) {
        let path = vault_path(path);
        if let Some(note) = self.notes.iter_mut().find(|note| note.0 == path) {
            note.1 = text.to_string();
        } else {
            self.notes.push((path, text.to_string()));
        }
    }
}

impl DocumentStore for MemoryVault {
    fn paths(&self) -> Result<Vec<String>> {
        Ok(self.notes.iter().map(|(path, _)| path.clone()).collect())
    }

    fn read(&self, path: &str) -> Result<String> {
        let path = vault_path(path);
        self.notes
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, text)| text.clone())
            .ok_or(Error::DocumentNotFound(path))
    }

    fn resolve(&self, path: &str) -> Option<String> {
        let path = vault_path(path);
        self.notes.iter().any(|(p, _)| *p == path).then_some(path)
    }
}

/// Note paths starting with `query`, ignoring case.
///
/// A query without a leading `/` is matched against paths with their leading `/` removed, so
/// typing `daily` finds `/Daily/2024-05-01.md`.
///
/// # Errors
///
/// Returns an error if the store cannot be listed.
pub fn suggest_paths<S: DocumentStore + ?Sized>(store: &S, query: &str) -> Result<Vec<String>> {
    let query = query.to_lowercase();
    let rooted = query.starts_with('/');
    Ok(store
        .paths()?
        .into_iter()
        .filter(|path| {
            let key = if rooted {
                path.as_str()
            } else {
                path.trim_start_matches('/')
            };
            key.to_lowercase().starts_with(&query)
        })
        .collect())
}

/// Every note as a `(path, label)` pair for choosing a template; labels drop a `.md` suffix.
///
/// # Errors
///
/// Returns an error if the store cannot be listed.
pub fn template_choices<S: DocumentStore + ?Sized>(store: &S) -> Result<Vec<(String, String)>> {
    Ok(store
        .paths()?
        .into_iter()
        .map(|path| {
            let label = path.strip_suffix(".md").unwrap_or(&path).to_string();
            (path, label)
        })
        .collect())
}

#[cfg(test)]
#[path = "tests/vault.rs"]
mod tests;
