//! Loading of the site's post index.
//!
//! The index is produced at site-generation time as a JSON array of
//! `{name, path, tag}` objects. Order in the file is the order results are
//! shown in.

use crate::catalog::error::CatalogError;
use crate::types::PostEntry;
use std::path::Path;

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum CatalogError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("invalid post index: {0}")]
        Parse(#[from] serde_json::Error),
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostCatalog {
    entries: Vec<PostEntry>,
}

impl PostCatalog {
    pub fn new(entries: Vec<PostEntry>) -> Self {
        Self { entries }
    }

    /// Parses a JSON array of posts. Any entry with a blank name or empty
    /// path fails the whole load.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<PostEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        log::debug!(
            "loaded {} posts from {}",
            catalog.entries.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn entries(&self) -> &[PostEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<PostEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests;
