use super::*;
use blogsearch_core::types::PostEntry;
use std::io::Cursor;

fn sample_engine() -> SearchEngine {
    let posts = vec![
        PostEntry::try_new("How to write a blog post", "/p1", "").unwrap(),
        PostEntry::try_new("AI Prompt Generator Guide", "/p2", "").unwrap(),
        PostEntry::try_new("SEO Basics", "/p3", "").unwrap(),
    ];
    SearchEngine::new(posts, SearchConfig::default())
}

fn run(input: &str, format: OutputFormat) -> String {
    let mut engine = sample_engine();
    let mut out = Vec::new();

    run_queries(&mut engine, Cursor::new(input).lines(), format, &mut out).unwrap();

    String::from_utf8(out).unwrap()
}

#[test]
fn test_run_queries_text() {
    let output = run("s\nse\nseo\nzzz\n", OutputFormat::Text);

    assert_eq!(
        output,
        "Search Results: 1\n1. SEO Basics </p3>\n\
         Search Results: 1\n1. SEO Basics </p3>\n\
         No matches found for 'zzz'.\n"
    );
}

#[test]
fn test_run_queries_idle_writes_nothing() {
    assert_eq!(run("\na\n", OutputFormat::Text), "");
}

#[test]
fn test_run_queries_html() {
    let output = run("ai", OutputFormat::Html);

    assert_eq!(
        output,
        "<div class=\"search-results\"><h4>Search Results: 1</h4><ul role=\"list\">\
         <li><a href=\"/p2\">AI Prompt Generator Guide</a></li></ul></div>\n"
    );
}

#[test]
fn test_run_queries_keeps_line_whitespace() {
    let output = run(" seo\n", OutputFormat::Text);

    assert_eq!(output, "No matches found for ' seo'.\n");
}

#[test]
fn test_load_config_without_path_is_default() {
    assert_eq!(load_config(None).unwrap(), AppConfig::default());
}

#[test]
fn test_load_config_replaces_invalid_values() {
    let tmp = tempfile::tempdir().unwrap();
    let path = AppConfig::path(tmp.path());
    std::fs::write(&path, "[search]\nmin_query_chars = 0\ntrim_query = true\n").unwrap();

    let config = load_config(Some(&path)).unwrap();

    assert_eq!(config.search.min_query_chars, 2);
    assert!(config.search.trim_query);
}
