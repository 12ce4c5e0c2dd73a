use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod builtin;

pub use builtin::{album_catalog, builtin_catalog, dedications_catalog, gallery_catalog};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog item at position {position} has an empty id")]
    EmptyId { position: usize },
    #[error("duplicate catalog id: {0}")]
    DuplicateId(String),
    #[error("unknown built-in catalog: {0}")]
    UnknownBuiltin(String),
    #[error("failed to read catalog file: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse catalog file")]
    Parse(#[from] serde_json::Error),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// One fixed record of the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub location: String,
    pub year: i32,
    #[serde(default)]
    pub size: Option<u32>,
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub dedicated: Option<String>,
}

/// Ordered, immutable set of items with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if item.id.is_empty() {
                return Err(CatalogError::EmptyId { position });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn from_json(contents: &str) -> CatalogResult<Self> {
        let items: Vec<CatalogItem> = serde_json::from_str(contents)?;
        Self::new(items)
    }

    pub fn load(path: &Path) -> CatalogResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), items = catalog.len(), "loaded catalog file");
        Ok(catalog)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Display name for `id`, or the raw id when it is not in the catalog.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map_or(id, |item| item.name.as_str())
    }

    pub fn details_text(&self, id: &str) -> String {
        match self.get(id) {
            Some(item) => format!(
                "{}\n{}\nDedicated: {}\n\n{}",
                item.name,
                item.location,
                item.dedicated.as_deref().map_or_else(|| item.year.to_string(), str::to_string),
                item.description
            ),
            None => {
                tracing::debug!(id, "details requested for unknown catalog id");
                id.to_string()
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn test_item(id: &str, name: &str, year: i32, size: Option<u32>) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        location: format!("{name} location"),
        year,
        size,
        image: format!("images/{id}.jpg"),
        description: String::new(),
        dedicated: None,
    }
}
