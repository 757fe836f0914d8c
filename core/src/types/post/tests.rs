use super::*;

#[test]
fn post_entry_normal_usage() {
    let entry = PostEntry::try_new("SEO Basics", "/p3", "seo").unwrap();

    assert_eq!(entry.name(), "SEO Basics");
    assert_eq!(entry.path(), "/p3");
    assert_eq!(entry.tag(), "seo");
}

#[test]
fn post_name_keeps_surrounding_whitespace() {
    let name = PostName::try_new("  Padded Title ".to_string()).unwrap();
    assert_eq!(name.as_str(), "  Padded Title ");
}

#[test]
fn post_name_rejects_empty_string() {
    let result = PostName::try_new(String::new());
    result.unwrap_err();
}

#[test]
fn post_name_rejects_whitespace_string() {
    let result = PostEntry::try_new("   ", "/p1", "");
    assert!(matches!(result, Err(PostEntryError::InvalidName(_))));
}

#[test]
fn post_path_rejects_empty_string() {
    let result = PostEntry::try_new("Title", "", "");
    assert!(matches!(result, Err(PostEntryError::InvalidPath(_))));
}

#[test]
fn post_entry_deserializes_without_tag() {
    let entry: PostEntry = serde_json::from_str(r#"{"name":"A","path":"/a"}"#).unwrap();

    assert_eq!(entry.name(), "A");
    assert_eq!(entry.tag(), "");
}

#[test]
fn post_entry_deserialize_validates_name() {
    let result = serde_json::from_str::<PostEntry>(r#"{"name":"","path":"/a","tag":"x"}"#);
    result.unwrap_err();
}

#[test]
fn post_entry_deserialize_requires_name() {
    let result = serde_json::from_str::<PostEntry>(r#"{"path":"/a","tag":"x"}"#);
    result.unwrap_err();
}
