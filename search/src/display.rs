//! What the search widget shows for the current query.

use crate::results::SearchResults;

/// Display state derived from the query length and the match count.
///
/// Recomputed from scratch on every read; nothing carries over between
/// queries.
#[derive(Debug, Clone, Copy)]
pub enum DisplayState<'a> {
    /// Query too short; show no results section at all.
    Idle,
    /// At least one match.
    Results {
        count: usize,
        results: SearchResults<'a>,
    },
    /// Nothing matched. `query` is the text as typed, unmodified.
    Empty { query: &'a str },
}

impl<'a> DisplayState<'a> {
    pub(crate) fn resolve(
        query_chars: usize,
        min_query_chars: usize,
        raw_query: &'a str,
        results: SearchResults<'a>,
    ) -> Self {
        if query_chars < min_query_chars {
            DisplayState::Idle
        } else if results.is_empty() {
            DisplayState::Empty { query: raw_query }
        } else {
            DisplayState::Results {
                count: results.len(),
                results,
            }
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DisplayState::Idle)
    }

    /// The "no matches" message, only for [`DisplayState::Empty`].
    pub fn message(&self) -> Option<String> {
        match self {
            DisplayState::Empty { query } => Some(no_matches_message(query)),
            _ => None,
        }
    }
}

pub fn no_matches_message(query: &str) -> String {
    format!("No matches found for '{query}'.")
}
