use super::resolve_visible;
use crate::outline::Outline;
use crate::section::SectionId;
use std::collections::HashSet;

fn load(raw: &str) -> Outline {
    serde_json::from_str(raw).unwrap()
}

fn id(raw: &str) -> SectionId {
    SectionId::from(raw)
}

fn fixture() -> Outline {
    load(
        r#"{
        "a": {"label": "1 Alpha", "content": ""},
        "b": {"label": "1.1 Needle", "content": "", "parent": "a"},
        "c": {"label": "2 Gamma", "content": "tuning the gamma driver"}
    }"#,
    )
}

#[test]
fn test_match_keeps_its_ancestors_visible() {
    let visible = resolve_visible(&fixture(), "needle");
    let expected: HashSet<SectionId> = [id("a"), id("b")].into_iter().collect();
    assert_eq!(
        visible, expected,
        "the matching child and its parent stay visible, nothing else"
    );
}

#[test]
fn test_matching_parent_does_not_drag_in_children() {
    let visible = resolve_visible(&fixture(), "alpha");
    let expected: HashSet<SectionId> = [id("a")].into_iter().collect();
    assert_eq!(visible, expected);
}

#[test]
fn test_content_text_is_searched_too() {
    let visible = resolve_visible(&fixture(), "driver");
    let expected: HashSet<SectionId> = [id("c")].into_iter().collect();
    assert_eq!(visible, expected);
}

#[test]
fn test_empty_query_keeps_everything() {
    let visible = resolve_visible(&fixture(), "");
    assert_eq!(visible.len(), 3);
}

#[test]
fn test_no_matches_yields_empty_set() {
    let visible = resolve_visible(&fixture(), "zzz");
    assert!(visible.is_empty());
}

#[test]
fn test_matching_is_case_insensitive() {
    let lower = resolve_visible(&fixture(), "needle");
    let upper = resolve_visible(&fixture(), "NEEDLE");
    assert_eq!(lower, upper);
}

#[test]
fn test_numeric_prefixes_are_not_searchable() {
    // "1" appears in every label prefix but in no title or content.
    let visible = resolve_visible(&fixture(), "1");
    assert!(
        visible.is_empty(),
        "filtering on a digit must not light up the whole outline"
    );
}
