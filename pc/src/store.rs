//! Fragment stores
//!
//! A fragment store is a two-level key-value lookup: category, then fragment
//! name. [`DirectoryStore`] backs it with a directory tree on disk;
//! [`MemoryStore`] keeps everything in memory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::error::{ComposeError, Result};

/// Read-only lookup of fragment text by category and name
pub trait FragmentStore {
    /// Whether the category exists
    fn has_category(&self, category: &str) -> bool;

    /// Names of every fragment in a category, sorted
    fn fragments(&self, category: &str) -> Result<Vec<String>>;

    /// Fragment text, or `None` if the category has no such fragment
    fn get(&self, category: &str, fragment: &str) -> Result<Option<String>>;

    /// Names of every category, sorted
    fn categories(&self) -> Result<Vec<String>>;
}

/// Store backed by `{base_dir}/{category}/{fragment}.{extension}`
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    base_dir: PathBuf,
    extension: String,
}

impl DirectoryStore {
    pub fn new(base_dir: impl AsRef<Path>, extension: impl Into<String>) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let extension = extension.into();
        debug!(?base_dir, %extension, "Opened directory store");
        Self { base_dir, extension }
    }

    fn category_dir(&self, category: &str) -> PathBuf {
        self.base_dir.join(category)
    }

    /// `{category_dir}/{fragment}.{extension}`, appended as text so an
    /// absolute fragment name stays under the category directory
    fn fragment_path(&self, category: &str, fragment: &str) -> PathBuf {
        let mut path = self.category_dir(category).into_os_string();
        path.push("/");
        path.push(fragment);
        path.push(".");
        path.push(&self.extension);
        PathBuf::from(path)
    }
}

/// A category must be one plain directory name directly under the base
fn is_plain_name(category: &str) -> bool {
    let mut components = Path::new(category).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Fragment names may nest but never climb out of their category
fn escapes_category(fragment: &str) -> bool {
    Path::new(fragment)
        .components()
        .any(|c| matches!(c, Component::ParentDir))
}

impl FragmentStore for DirectoryStore {
    fn has_category(&self, category: &str) -> bool {
        is_plain_name(category) && self.category_dir(category).is_dir()
    }

    fn fragments(&self, category: &str) -> Result<Vec<String>> {
        let dir = self.category_dir(category);
        let entries = fs::read_dir(&dir).map_err(|source| ComposeError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ComposeError::Io {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.is_file()
                && path.extension().is_some_and(|e| e == self.extension.as_str())
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    fn get(&self, category: &str, fragment: &str) -> Result<Option<String>> {
        if escapes_category(fragment) {
            debug!(category, fragment, "Fragment name leaves its category");
            return Ok(None);
        }

        let path = self.fragment_path(category, fragment);
        if !path.is_file() {
            debug!(?path, "Fragment file missing");
            return Ok(None);
        }

        // Invalid UTF-8 fails as InvalidData rather than being altered
        let text = fs::read_to_string(&path).map_err(|source| ComposeError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(?path, len = text.len(), "Read fragment");
        Ok(Some(text))
    }

    fn categories(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.base_dir).map_err(|source| ComposeError::Io {
            path: self.base_dir.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ComposeError::Io {
                path: self.base_dir.clone(),
                source,
            })?;
            if entry.path().is_dir()
                && let Some(name) = entry.file_name().to_str()
            {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}

/// In-memory store, mostly for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    categories: BTreeMap<String, BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fragment, creating its category if needed
    pub fn insert(&mut self, category: impl Into<String>, fragment: impl Into<String>, text: impl Into<String>) {
        self.categories
            .entry(category.into())
            .or_default()
            .insert(fragment.into(), text.into());
    }

    /// Add an empty category
    pub fn add_category(&mut self, category: impl Into<String>) {
        self.categories.entry(category.into()).or_default();
    }

    /// Builder-style [`MemoryStore::insert`]
    pub fn with(mut self, category: &str, fragment: &str, text: &str) -> Self {
        self.insert(category, fragment, text);
        self
    }
}

impl FragmentStore for MemoryStore {
    fn has_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    fn fragments(&self, category: &str) -> Result<Vec<String>> {
        Ok(self
            .categories
            .get(category)
            .map(|frags| frags.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn get(&self, category: &str, fragment: &str) -> Result<Option<String>> {
        Ok(self
            .categories
            .get(category)
            .and_then(|frags| frags.get(fragment))
            .cloned())
    }

    fn categories(&self) -> Result<Vec<String>> {
        Ok(self.categories.keys().cloned().collect())
    }
}
