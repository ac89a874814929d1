use super::{at_depth_limit, renumber};
use crate::outline::Outline;
use crate::section::{Depth, Section, SectionId};

fn load(raw: &str) -> Outline {
    serde_json::from_str(raw).unwrap()
}

fn label_of(outline: &Outline, id: &str) -> String {
    outline.get(&SectionId::from(id)).unwrap().label.clone()
}

#[test]
fn test_renumber_closes_gaps() {
    let mut outline = load(
        r#"{
        "a": {"label": "2 Setup", "content": ""},
        "b": {"label": "5 Usage", "content": ""},
        "c": {"label": "9 FAQ", "content": ""}
    }"#,
    );
    renumber(&mut outline);

    assert_eq!(label_of(&outline, "a"), "1 Setup");
    assert_eq!(label_of(&outline, "b"), "2 Usage");
    assert_eq!(label_of(&outline, "c"), "3 FAQ");
}

#[test]
fn test_renumber_preserves_titles_containing_digits() {
    let mut outline = load(r#"{"a": {"label": "3 IPv6 setup", "content": ""}}"#);
    renumber(&mut outline);
    assert_eq!(
        label_of(&outline, "a"),
        "1 IPv6 setup",
        "only the leading prefix is rewritten"
    );
}

#[test]
fn test_renumber_rewrites_child_prefixes() {
    let mut outline = load(
        r#"{
        "parent": {"label": "4 Guide", "content": ""},
        "late": {"label": "4.2 Advanced", "content": "", "parent": "parent"},
        "early": {"label": "4.1 Basics", "content": "", "parent": "parent"}
    }"#,
    );
    renumber(&mut outline);

    assert_eq!(label_of(&outline, "parent"), "1 Guide");
    assert_eq!(label_of(&outline, "early"), "1.1 Basics");
    assert_eq!(label_of(&outline, "late"), "1.2 Advanced");
}

#[test]
fn test_renumber_places_bare_titles_last() {
    let mut outline = load(
        r#"{
        "a": {"label": "1 Alpha", "content": ""},
        "b": {"label": "2 Beta", "content": ""},
        "z": {"label": "Zeta", "content": ""}
    }"#,
    );
    renumber(&mut outline);

    assert_eq!(label_of(&outline, "a"), "1 Alpha");
    assert_eq!(label_of(&outline, "b"), "2 Beta");
    assert_eq!(
        label_of(&outline, "z"),
        "3 Zeta",
        "a freshly inserted bare title joins the end of the group"
    );
}

#[test]
fn test_renumber_sets_depth_markers() {
    let mut outline = load(
        r#"{
        "root": {"label": "1 Guide", "content": ""},
        "leaf": {"label": "1.1 Basics", "content": "", "parent": "root"}
    }"#,
    );
    renumber(&mut outline);

    assert_eq!(
        outline.get(&SectionId::from("root")).unwrap().depth,
        Depth::Root
    );
    assert_eq!(
        outline.get(&SectionId::from("leaf")).unwrap().depth,
        Depth::Child
    );
}

#[test]
fn test_renumber_never_descends_past_the_limit() {
    // A grandchild should not exist, but if one does the pass leaves it be.
    let mut outline = load(
        r#"{
        "a": {"label": "1 A", "content": ""},
        "b": {"label": "1.1 B", "content": "", "parent": "a"},
        "c": {"label": "9.9.9 C", "content": "", "parent": "b"}
    }"#,
    );
    renumber(&mut outline);

    assert_eq!(label_of(&outline, "a"), "1 A");
    assert_eq!(label_of(&outline, "b"), "1.1 B");
    assert_eq!(
        label_of(&outline, "c"),
        "9.9.9 C",
        "third-level labels are untouched"
    );
}

#[test]
fn test_at_depth_limit() {
    let mut section = Section::new("Install", None);
    assert!(!at_depth_limit(&section), "bare labels are not at the limit");

    section.label = "2 Setup".to_string();
    assert!(!at_depth_limit(&section));

    section.label = "2.1 Install".to_string();
    assert!(at_depth_limit(&section));
}
