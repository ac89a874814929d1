use super::Outline;
use crate::error::ValidationError;
use crate::section::SectionId;

#[test]
fn test_first_root_gets_number_one() {
    let mut outline = Outline::new();
    let id = outline.add_section("Getting started", None).unwrap();
    assert_eq!(outline.get(&id).unwrap().label, "1 Getting started");
}

#[test]
fn test_new_sections_append_to_their_group() {
    let mut outline = Outline::new();
    let intro = outline.add_section("Intro", None).unwrap();
    let setup = outline.add_section("Setup", None).unwrap();
    assert_eq!(outline.get(&intro).unwrap().label, "1 Intro");
    assert_eq!(outline.get(&setup).unwrap().label, "2 Setup");

    let install = outline
        .add_section("Install", Some(setup.clone()))
        .unwrap();
    assert_eq!(
        outline.get(&install).unwrap().label,
        "2.1 Install",
        "child numbering extends the parent prefix"
    );

    let upgrade = outline.add_section("Upgrade", Some(setup)).unwrap();
    assert_eq!(outline.get(&upgrade).unwrap().label, "2.2 Upgrade");
}

#[test]
fn test_add_refusals_leave_collection_unchanged() {
    let mut outline = Outline::new();
    let setup = outline.add_section("Setup", None).unwrap();
    let install = outline.add_section("Install", Some(setup)).unwrap();

    assert_eq!(
        outline.add_section("   ", None),
        Err(ValidationError::EmptyTitle)
    );
    let ghost = SectionId::from("no-such-id");
    assert_eq!(
        outline.add_section("Orphan", Some(ghost.clone())),
        Err(ValidationError::UnknownParent(ghost))
    );
    // "2.1 Install" already sits at the nesting limit.
    assert_eq!(
        outline.add_section("Too deep", Some(install)),
        Err(ValidationError::TooDeep)
    );

    assert_eq!(outline.len(), 2, "refusals must not mutate the collection");
}

#[test]
fn test_delete_cascades_one_level() {
    let mut outline = Outline::new();
    let setup = outline.add_section("Setup", None).unwrap();
    let install = outline.add_section("Install", Some(setup.clone())).unwrap();
    let upgrade = outline.add_section("Upgrade", Some(setup.clone())).unwrap();

    let removed = outline.delete_section(&setup);
    assert_eq!(removed.len(), 3);
    assert!(removed.contains(&setup));
    assert!(removed.contains(&install));
    assert!(removed.contains(&upgrade));
    assert!(outline.is_empty());
}

#[test]
fn test_delete_renumbers_survivors() {
    let mut outline = Outline::new();
    let intro = outline.add_section("Intro", None).unwrap();
    let setup = outline.add_section("Setup", None).unwrap();
    let install = outline.add_section("Install", Some(setup.clone())).unwrap();

    outline.delete_section(&intro);

    assert_eq!(
        outline.get(&setup).unwrap().label,
        "1 Setup",
        "surviving roots close the gap"
    );
    assert_eq!(
        outline.get(&install).unwrap().label,
        "1.1 Install",
        "children follow their parent's new prefix"
    );
}

#[test]
fn test_delete_unknown_id_is_a_no_op() {
    let mut outline = Outline::new();
    outline.add_section("Setup", None).unwrap();
    let removed = outline.delete_section(&SectionId::from("missing"));
    assert!(removed.is_empty());
    assert_eq!(outline.len(), 1);
}

#[test]
fn test_set_content() {
    let mut outline = Outline::new();
    let id = outline.add_section("Setup", None).unwrap();

    assert!(outline.set_content(&id, "run the installer".to_string()));
    assert_eq!(outline.get(&id).unwrap().content, "run the installer");
    assert_eq!(
        outline.get(&id).unwrap().label,
        "1 Setup",
        "content edits leave the label alone"
    );

    assert!(!outline.set_content(&SectionId::from("missing"), String::new()));
}

#[test]
fn test_wire_format_omits_parent_for_roots() {
    let mut outline = Outline::new();
    let setup = outline.add_section("Setup", None).unwrap();
    let install = outline.add_section("Install", Some(setup.clone())).unwrap();

    let value = serde_json::to_value(&outline).unwrap();
    assert!(
        value[setup.as_str()].get("parent").is_none(),
        "roots serialise without a parent key"
    );
    assert_eq!(
        value[install.as_str()]["parent"].as_str(),
        Some(setup.as_str())
    );
}

#[test]
fn test_wire_format_reads_documents_without_parent_keys() {
    let raw = r#"{
        "a1": {"label": "2 Setup", "content": "install notes"},
        "b2": {"label": "2.1 Install", "content": "", "parent": "a1"}
    }"#;
    let outline: Outline = serde_json::from_str(raw).unwrap();
    assert_eq!(outline.len(), 2);

    let root = SectionId::from("a1");
    assert_eq!(outline.get(&root).unwrap().label, "2 Setup");
    assert!(outline.get(&root).unwrap().parent.is_none());
    assert_eq!(
        outline.get(&SectionId::from("b2")).unwrap().parent,
        Some(root)
    );
}
