use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

const INDEX: &str = r#"[
    {"name": "How to write a blog post", "path": "/p1", "tag": "writing"},
    {"name": "AI Prompt Generator Guide", "path": "/p2", "tag": "ai"},
    {"name": "SEO Basics", "path": "/p3"}
]"#;

#[test]
fn from_json_str_preserves_order() {
    let catalog = PostCatalog::from_json_str(INDEX).unwrap();

    let paths: Vec<&str> = catalog.entries().iter().map(|e| e.path()).collect();
    assert_eq!(paths, ["/p1", "/p2", "/p3"]);
    assert_eq!(catalog.entries()[2].tag(), "");
}

#[test]
fn from_json_str_empty_array() {
    let catalog = PostCatalog::from_json_str("[]").unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn from_json_str_rejects_blank_name() {
    let result = PostCatalog::from_json_str(r#"[{"name": " ", "path": "/x"}]"#);
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[test]
fn from_json_str_rejects_missing_name() {
    let result = PostCatalog::from_json_str(r#"[{"path": "/x", "tag": "t"}]"#);
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[test]
fn load_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(INDEX.as_bytes()).unwrap();

    let catalog = PostCatalog::load(file.path()).unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.into_entries()[1].name(), "AI Prompt Generator Guide");
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = PostCatalog::load(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(CatalogError::Io(_))));
}
