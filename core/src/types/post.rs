//! Searchable post records.

use nutype::nutype;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display label of a post.
///
/// Kept verbatim: no trimming, original casing. Must contain at least one
/// non-whitespace char.
#[nutype(
    validate(predicate = |name| !name.trim().is_empty()),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PostName(String);

/// Navigation target of a post. Opaque to the search engine.
#[nutype(
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PostPath(String);

/// One searchable post as listed in the site's content index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEntry {
    pub name: PostName,
    pub path: PostPath,
    /// Carried through untouched; matching ignores it.
    #[serde(default)]
    pub tag: String,
}

#[derive(Debug, Error)]
pub enum PostEntryError {
    #[error("invalid post name: {0}")]
    InvalidName(#[from] PostNameError),

    #[error("invalid post path: {0}")]
    InvalidPath(#[from] PostPathError),
}

impl PostEntry {
    pub fn try_new(
        name: impl Into<String>,
        path: impl Into<String>,
        tag: impl Into<String>,
    ) -> Result<Self, PostEntryError> {
        Ok(Self {
            name: PostName::try_new(name.into())?,
            path: PostPath::try_new(path.into())?,
            tag: tag.into(),
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

#[cfg(test)]
mod tests;
