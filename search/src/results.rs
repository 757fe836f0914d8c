//! Search results types.

use blogsearch_core::types::PostEntry;

/// Borrowed view of the posts matching the current query.
///
/// Entries keep their original casing and come out in source order.
#[derive(Debug, Clone, Copy)]
pub struct SearchResults<'a> {
    pub(crate) entries: &'a [PostEntry],
    pub(crate) matches: &'a [usize],
}

impl<'a> SearchResults<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a PostEntry> + 'a {
        let (entries, matches) = (self.entries, self.matches);
        matches.iter().map(move |&position| &entries[position])
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
