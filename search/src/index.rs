//! Normalized view over the source posts.

use crate::config::CaseMatching;
use blogsearch_core::types::PostEntry;

struct NormalizedEntry {
    name: String,
    /// Position of the entry in the source list.
    position: usize,
}

/// Names normalized once at construction, in source order.
pub(crate) struct Index {
    entries: Vec<NormalizedEntry>,
    case_matching: CaseMatching,
}

impl Index {
    pub(crate) fn new(posts: &[PostEntry], case_matching: CaseMatching) -> Self {
        let entries = posts
            .iter()
            .enumerate()
            .map(|(position, post)| NormalizedEntry {
                name: normalize(post.name(), case_matching),
                position,
            })
            .collect();

        Self {
            entries,
            case_matching,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns source positions of entries containing `query`, ascending.
    pub(crate) fn matches(&self, query: &str) -> Vec<usize> {
        let needle = normalize(query, self.case_matching);
        self.entries
            .iter()
            .filter(|entry| entry.name.contains(needle.as_str()))
            .map(|entry| entry.position)
            .collect()
    }
}

fn normalize(text: &str, case_matching: CaseMatching) -> String {
    match case_matching {
        CaseMatching::Insensitive => text.to_lowercase(),
        CaseMatching::Sensitive => text.to_string(),
    }
}
