//! Label parsing and ordering for dotted-numeric section prefixes.
//!
//! A label is a single display string such as "2.1 Install": a dotted numeric
//! prefix encoding position, one space, then the user-chosen title. The store
//! keeps that string verbatim for backward compatibility, so this module is
//! the only place labels are decomposed or rebuilt; everything else works
//! with the structured parts it hands out.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Sort key assigned to labels without a parseable numeric prefix, larger
/// than any legitimate key so malformed labels sort last deterministically.
pub const SORT_LAST: f64 = f64::MAX;

// Leading dotted-numeric run: "2", "2.1", "2.1.7".
static PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)*").expect("prefix pattern compiles"));

// Prefix-strip rule for recovering the title: any digits-and-dots run
// followed by a single whitespace character.
static STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d.]+\s").expect("strip pattern compiles"));

#[derive(Clone, Debug, PartialEq, Eq)]
/// Structured view of a label: numeric prefix components plus title text.
pub struct ParsedLabel<'a> {
    /// Components of the leading dotted prefix, outermost level first; empty
    /// when the label carries no parseable prefix.
    pub components: Vec<u32>,
    /// The user-chosen title text. When the label has no digits-and-dots
    /// prefix followed by whitespace, the whole label is the title.
    pub title: &'a str,
}

#[must_use]
/// Decompose a label into its prefix components and title text.
///
/// The two rules intentionally differ, matching the stored data: the prefix
/// must be a well-formed dotted run ("2.1"), while title recovery strips any
/// digits-and-dots noise ("2..1 ") so damaged prefixes never leak into the
/// preserved title.
pub fn parse(label: &str) -> ParsedLabel<'_> {
    let components = PREFIX.find(label).map_or_else(Vec::new, |m| {
        m.as_str()
            .split('.')
            .map(|c| c.parse().unwrap_or(u32::MAX))
            .collect()
    });
    let title = STRIP.find(label).map_or(label, |m| &label[m.end()..]);
    ParsedLabel { components, title }
}

#[must_use]
/// Rebuild a label from a prefix string and title text.
pub fn compose(prefix: &str, title: &str) -> String {
    format!("{prefix} {title}")
}

#[must_use]
/// Totally ordered sort key for a label's dotted-numeric prefix.
///
/// Component `v` at level `i` contributes `v / 100^i`, which preserves
/// level-by-level ordering for the two permitted levels. Components of 100 or
/// more alias with the next level's weighting; that is a documented
/// limitation, not reachable while sibling groups stay below 100 entries.
/// Labels without a prefix map to [`SORT_LAST`].
pub fn sort_key(label: &str) -> f64 {
    let parsed = parse(label);
    if parsed.components.is_empty() {
        return SORT_LAST;
    }
    let mut key = 0.0;
    let mut scale = 1.0;
    for &component in &parsed.components {
        key += f64::from(component) / scale;
        scale *= 100.0;
    }
    key
}

#[must_use]
/// Numeric-aware comparison of raw label strings.
///
/// Digit runs compare by value ("10 b" sorts after "2 a") and everything else
/// compares bytewise, so unprefixed labels land after prefixed ones. The
/// renumber pass uses this to order siblings whose labels are transiently
/// inconsistent mid-edit, where [`sort_key`] would be too forgiving.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let lhs = digit_run(a, i);
            let rhs = digit_run(b, j);
            match compare_runs(lhs, rhs) {
                Ordering::Equal => {
                    i += lhs.len();
                    j += rhs.len();
                }
                unequal => return unequal,
            }
        } else {
            match a[i].cmp(&b[j]) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                unequal => return unequal,
            }
        }
    }
    (a.len() - i).cmp(&(b.len() - j))
}

fn digit_run(s: &[u8], start: usize) -> &[u8] {
    let mut end = start;
    while end < s.len() && s[end].is_ascii_digit() {
        end += 1;
    }
    &s[start..end]
}

// Compare digit runs by value without parsing: strip leading zeros, then
// longer runs are larger, equal lengths compare bytewise.
fn compare_runs(a: &[u8], b: &[u8]) -> Ordering {
    let a = trim_leading_zeros(a);
    let b = trim_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn trim_leading_zeros(digits: &[u8]) -> &[u8] {
    let zeros = digits.iter().take_while(|&&c| c == b'0').count();
    if zeros == digits.len() {
        // All-zero run keeps one digit so "0" still compares as a number.
        &digits[digits.len() - 1..]
    } else {
        &digits[zeros..]
    }
}

#[cfg(test)]
#[path = "tests/label.rs"]
mod tests;
