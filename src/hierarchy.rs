//! Parent/child adjacency derived from the flat section collection.
//!
//! The outline itself stores only upward `parent` references; everything the
//! interface needs to walk downward (root list, children per section) is
//! rebuilt here on demand. The index is a throwaway snapshot: callers build
//! one after each mutation rather than patching it incrementally.

use std::collections::BTreeMap;

use crate::label;
use crate::outline::Outline;
use crate::renumber::MAX_DEPTH;
use crate::section::{Depth, SectionId};

#[derive(Debug, Default)]
/// Downward adjacency over one outline snapshot.
pub struct HierarchyIndex {
    roots: Vec<SectionId>,
    children: BTreeMap<SectionId, Vec<SectionId>>,
    parents: BTreeMap<SectionId, Option<SectionId>>,
}

impl HierarchyIndex {
    #[must_use]
    /// Group sections under their parents and order every sibling group by
    /// label sort key. Sections whose parent id is missing from the outline
    /// are surfaced as roots so they stay reachable; `repair` makes that
    /// promotion permanent.
    pub fn build(outline: &Outline) -> Self {
        let mut index = Self::default();
        for (id, section) in outline.iter() {
            let parent = section
                .parent
                .as_ref()
                .filter(|parent| outline.contains(parent));
            match parent {
                Some(parent) => index
                    .children
                    .entry(parent.clone())
                    .or_default()
                    .push(id.clone()),
                None => index.roots.push(id.clone()),
            }
            index.parents.insert(id.clone(), section.parent.clone());
        }
        sort_group(outline, &mut index.roots);
        for group in index.children.values_mut() {
            sort_group(outline, group);
        }
        index
    }

    #[must_use]
    /// Ordered children of `parent`, or the root group for `None`.
    pub fn children_of(&self, parent: Option<&SectionId>) -> &[SectionId] {
        match parent {
            None => &self.roots,
            Some(parent) => self
                .children
                .get(parent)
                .map_or(&[], Vec::as_slice),
        }
    }

    #[must_use]
    /// Chain of ancestor ids for `id`, closest parent first.
    ///
    /// The walk is capped at the depth limit, so a malformed collection with
    /// a parent cycle terminates instead of spinning; whatever was collected
    /// before the cap is returned.
    pub fn ancestors_of(&self, id: &SectionId) -> Vec<SectionId> {
        let mut chain = Vec::new();
        let mut current = id.clone();
        for _ in 0..=MAX_DEPTH {
            let Some(Some(parent)) = self.parents.get(&current) else {
                break;
            };
            if parent == id || chain.contains(parent) {
                break;
            }
            if !self.parents.contains_key(parent) {
                break;
            }
            chain.push(parent.clone());
            current = parent.clone();
        }
        chain
    }
}

/// Promote sections with dangling or cyclic parent references to roots and
/// re-derive every depth marker. Returns how many sections were demoted.
pub fn repair(outline: &mut Outline) -> usize {
    let demote: Vec<SectionId> = outline
        .iter()
        .filter(|(id, section)| {
            section.parent.as_ref().is_some_and(|parent| {
                !outline.contains(parent) || in_cycle(outline, id, parent)
            })
        })
        .map(|(id, _)| id.clone())
        .collect();
    for id in &demote {
        if let Some(section) = outline.get_mut(id) {
            section.parent = None;
        }
    }
    let ids: Vec<SectionId> = outline.ids().cloned().collect();
    for id in &ids {
        let depth = outline
            .get(id)
            .and_then(|section| section.parent.as_ref())
            .map_or(Depth::Root, |_| Depth::Child);
        if let Some(section) = outline.get_mut(id) {
            section.depth = depth;
        }
    }
    demote.len()
}

/// Whether following parent links from `start` loops back within the depth
/// cap. Walks that run past the cap without reaching a root are treated as
/// cyclic too: a well-formed collection can never need more steps.
fn in_cycle(outline: &Outline, start: &SectionId, first_parent: &SectionId) -> bool {
    let mut current = first_parent.clone();
    for _ in 0..=MAX_DEPTH {
        if current == *start {
            return true;
        }
        match outline.get(&current).and_then(|section| section.parent.clone()) {
            Some(next) => current = next,
            None => return false,
        }
    }
    true
}

fn sort_group(outline: &Outline, group: &mut [SectionId]) {
    let key = |id: &SectionId| {
        outline
            .get(id)
            .map_or(label::SORT_LAST, |section| label::sort_key(&section.label))
    };
    group.sort_by(|a, b| key(a).total_cmp(&key(b)));
}

#[cfg(test)]
#[path = "tests/hierarchy.rs"]
mod tests;
