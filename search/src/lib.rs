//! Blog post search library.
//!
//! Live, case-insensitive substring filtering over a fixed list of posts.
//!
//! # Design
//!
//! - Post names are normalized (lowercased) once, when the engine is built.
//! - Every `set_query()` synchronously re-filters the normalized names; the
//!   result set is a stable subsequence of the input order.
//! - `display_state()` collapses the query and result count into what the
//!   widget shows: nothing, a result list, or a "no matches" message.
//!
//! # API
//!
//! - `set_query()`: Replaces the query and recomputes matches
//! - `current_results()`: Matching posts in source order
//! - `display_state()`: Idle / Results / Empty
//! - `render_html()`, `render_text()`: Format a display state

mod config;
mod display;
mod engine;
mod index;
mod query;
mod render;
mod results;

pub use config::{CaseMatching, SearchConfig};
pub use display::{DisplayState, no_matches_message};
pub use engine::SearchEngine;
pub use query::SearchQuery;
pub use render::{render_html, render_text};
pub use results::SearchResults;
