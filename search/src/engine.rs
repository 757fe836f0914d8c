//! Search engine over a fixed list of posts.

use crate::config::SearchConfig;
use crate::display::DisplayState;
use crate::index::Index;
use crate::query::SearchQuery;
use crate::results::SearchResults;
use blogsearch_core::types::PostEntry;

/// Incremental substring search over an immutable post list.
///
/// Normalization happens once in [`SearchEngine::new`]; each
/// [`SearchEngine::set_query`] re-filters synchronously, so results read
/// afterwards always belong to the latest query.
pub struct SearchEngine {
    posts: Vec<PostEntry>,
    index: Index,
    config: SearchConfig,
    query: SearchQuery,
    /// Source positions of the current matches, ascending.
    matches: Vec<usize>,
}

/// Create operations.
impl SearchEngine {
    pub fn new(posts: Vec<PostEntry>, config: SearchConfig) -> Self {
        let index = Index::new(&posts, config.case_matching);
        let query = SearchQuery::default();
        let matches = index.matches(query.effective(config.trim_query));

        log::debug!("search engine ready with {} posts", index.len());

        Self {
            posts,
            index,
            config,
            query,
            matches,
        }
    }
}

/// Search operations.
impl SearchEngine {
    /// Replaces the query and recomputes the matches.
    ///
    /// Setting the same query again keeps the current result set.
    pub fn set_query(&mut self, query: impl Into<SearchQuery>) {
        let query = query.into();
        if query == self.query {
            return;
        }

        self.matches = self
            .index
            .matches(query.effective(self.config.trim_query));
        self.query = query;

        log::trace!(
            "query {:?} matched {} of {} posts",
            self.query.as_str(),
            self.matches.len(),
            self.posts.len()
        );
    }

    /// Posts whose name contains the query, in source order.
    ///
    /// Not gated by the display threshold: an empty query matches everything.
    pub fn current_results(&self) -> SearchResults<'_> {
        SearchResults {
            entries: &self.posts,
            matches: &self.matches,
        }
    }

    pub fn display_state(&self) -> DisplayState<'_> {
        let query_chars = self
            .query
            .effective(self.config.trim_query)
            .chars()
            .count();

        DisplayState::resolve(
            query_chars,
            self.config.min_query_chars,
            self.query.as_str(),
            self.current_results(),
        )
    }
}

/// Accessors.
impl SearchEngine {
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn entries(&self) -> &[PostEntry] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
