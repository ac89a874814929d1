use super::{compose, natural_cmp, parse, sort_key, SORT_LAST};
use std::cmp::Ordering;

#[test]
fn test_parse_prefixed_label() {
    let parsed = parse("2.1 Install");
    assert_eq!(parsed.components, vec![2, 1]);
    assert_eq!(parsed.title, "Install");

    let parsed = parse("3 Troubleshooting");
    assert_eq!(parsed.components, vec![3]);
    assert_eq!(parsed.title, "Troubleshooting");
}

#[test]
fn test_parse_bare_title() {
    let parsed = parse("Install");
    assert!(
        parsed.components.is_empty(),
        "bare titles have no prefix components"
    );
    assert_eq!(parsed.title, "Install");
}

#[test]
fn test_parse_prefix_without_space_keeps_whole_title() {
    // No whitespace after the digits, so nothing is stripped.
    let parsed = parse("2.Setup");
    assert_eq!(parsed.components, vec![2]);
    assert_eq!(parsed.title, "2.Setup");
}

#[test]
fn test_parse_empty_title_after_prefix() {
    let parsed = parse("3 ");
    assert_eq!(parsed.components, vec![3]);
    assert_eq!(parsed.title, "");
}

#[test]
fn test_compose_round_trips_through_parse() {
    let label = compose("2.1", "Install");
    assert_eq!(label, "2.1 Install");

    let parsed = parse(&label);
    assert_eq!(parsed.components, vec![2, 1]);
    assert_eq!(parsed.title, "Install");
}

#[test]
fn test_sort_key_orders_two_levels() {
    let ordered = [
        "1 Intro",
        "1.1 Basics",
        "1.2 Advanced",
        "2 Setup",
        "2.1 Install",
        "10 Appendix",
    ];
    for pair in ordered.windows(2) {
        assert!(
            sort_key(pair[0]) < sort_key(pair[1]),
            "{} should sort before {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_sort_key_unprefixed_sorts_last() {
    assert_eq!(
        sort_key("no number here").total_cmp(&SORT_LAST),
        Ordering::Equal
    );
    assert!(
        sort_key("no number here") > sort_key("99.99 text"),
        "unprefixed labels sort after every numbered label"
    );
}

#[test]
fn test_sort_key_is_total_over_equal_labels() {
    assert_eq!(
        sort_key("2.1 Install").total_cmp(&sort_key("2.1 Install")),
        Ordering::Equal
    );
}

#[test]
fn test_sort_key_levels_can_alias_at_one_hundred() {
    // Component weighting folds 1.100 onto 2; sibling groups stay far
    // smaller than 100, so the aliasing is never hit in practice.
    assert!((sort_key("1.100 deep") - sort_key("2 top")).abs() < f64::EPSILON);
}

#[test]
fn test_natural_cmp_compares_digit_runs_by_value() {
    assert_eq!(natural_cmp("2 b", "10 a"), Ordering::Less);
    assert_eq!(natural_cmp("9.9 x", "9.10 y"), Ordering::Less);
    assert_eq!(natural_cmp("10 a", "2 b"), Ordering::Greater);
}

#[test]
fn test_natural_cmp_puts_bare_titles_after_numbered() {
    assert_eq!(natural_cmp("Alpha", "2 b"), Ordering::Greater);
    assert_eq!(natural_cmp("2 b", "Alpha"), Ordering::Less);
}

#[test]
fn test_natural_cmp_ties_break_on_title_text() {
    assert_eq!(natural_cmp("2 Apple", "2 Setup"), Ordering::Less);
    assert_eq!(natural_cmp("2 Setup", "2 Setup"), Ordering::Equal);
    // Leading zeros compare by numeric value.
    assert_eq!(natural_cmp("02 a", "2 a"), Ordering::Equal);
}
