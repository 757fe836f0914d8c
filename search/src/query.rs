//! Search query types.

/// The full text of the search box, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part of the query that takes part in matching.
    pub(crate) fn effective(&self, trim: bool) -> &str {
        if trim { self.0.trim() } else { &self.0 }
    }
}

impl From<&str> for SearchQuery {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SearchQuery {
    fn from(text: String) -> Self {
        Self(text)
    }
}
