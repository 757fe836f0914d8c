//! Formatting of a display state for the page or a terminal.

use crate::display::{DisplayState, no_matches_message};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

/// Renders the widget's results section as an HTML fragment.
///
/// Labels, paths and the echoed query are escaped; `Idle` renders nothing.
pub fn render_html(state: &DisplayState<'_>) -> String {
    match state {
        DisplayState::Idle => String::new(),
        DisplayState::Results { count, results } => {
            let mut html = format!(
                "<div class=\"search-results\"><h4>Search Results: {count}</h4><ul role=\"list\">"
            );
            for post in results.iter() {
                let _ = write!(
                    html,
                    "<li><a href=\"{}\">{}</a></li>",
                    encode_double_quoted_attribute(post.path()),
                    encode_text(post.name()),
                );
            }
            html.push_str("</ul></div>");
            html
        }
        DisplayState::Empty { query } => format!(
            "<div class=\"search-empty\">{}</div>",
            encode_text(&no_matches_message(query))
        ),
    }
}

/// Renders a display state as plain text lines.
pub fn render_text(state: &DisplayState<'_>) -> String {
    match state {
        DisplayState::Idle => String::new(),
        DisplayState::Results { count, results } => {
            let mut text = format!("Search Results: {count}");
            for (n, post) in results.iter().enumerate() {
                let _ = write!(text, "\n{}. {} <{}>", n + 1, post.name(), post.path());
            }
            text
        }
        DisplayState::Empty { query } => no_matches_message(query),
    }
}
