//! Renumbering pass restoring contiguous dotted prefixes after an edit.
//!
//! Sibling order is decided by natural comparison of the current labels, not
//! by the display sort key: mid-edit labels are allowed to be inconsistent
//! (a freshly inserted section still carries its bare title), and natural
//! comparison places such stragglers after their numbered siblings while
//! keeping every existing relative order intact. Each sibling group is then
//! relabeled 1..n and the pass recurses one level down with the new prefix.

use crate::label;
use crate::outline::Outline;
use crate::section::{Depth, Section, SectionId};

/// Maximum nesting depth; the renumber pass never descends past it.
pub const MAX_DEPTH: usize = 2;

#[must_use]
/// True when `parent` already carries a prefix at the maximum depth, meaning
/// nothing may be created beneath it. Callers reject such inserts up front
/// rather than letting a third level appear and silently never renumber.
pub fn at_depth_limit(parent: &Section) -> bool {
    label::parse(&parent.label).components.len() >= MAX_DEPTH
}

/// Recompute every label so each sibling group counts 1..n, roots first.
///
/// Touches only `label` and `depth`; content and ids pass through unchanged.
/// Structures nested deeper than the limit are left alone.
pub fn renumber(outline: &mut Outline) {
    renumber_group(outline, None, "", 1);
}

fn renumber_group(
    outline: &mut Outline,
    parent: Option<&SectionId>,
    prefix: &str,
    level: usize,
) {
    if level > MAX_DEPTH {
        return;
    }
    let mut siblings: Vec<(SectionId, String)> = outline
        .iter()
        .filter(|(_, section)| section.parent.as_ref() == parent)
        .map(|(id, section)| (id.clone(), section.label.clone()))
        .collect();
    siblings.sort_by(|(_, a), (_, b)| label::natural_cmp(a, b));

    for (index, (id, old_label)) in siblings.iter().enumerate() {
        let position = index + 1;
        let new_prefix = if prefix.is_empty() {
            position.to_string()
        } else {
            format!("{prefix}.{position}")
        };
        let title = label::parse(old_label).title.to_string();
        if let Some(section) = outline.get_mut(id) {
            section.label = label::compose(&new_prefix, &title);
            section.depth = if level == 1 { Depth::Root } else { Depth::Child };
        }
        renumber_group(outline, Some(id), &new_prefix, level + 1);
    }
}

#[cfg(test)]
#[path = "tests/renumber.rs"]
mod tests;
