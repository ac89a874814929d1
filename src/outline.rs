//! The shared section collection and its structural edits.
//!
//! `Outline` owns the id-to-section map every component reads. Edits follow
//! one control flow: validate, mutate in memory, renumber the whole two-level
//! tree, and let the caller persist the complete snapshot. There is no
//! partial mutation; a refused edit leaves the collection untouched.

use crate::error::ValidationError;
use crate::renumber;
use crate::section::{Section, SectionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
/// Id-keyed collection of sections, the single shared state for a session.
///
/// Iteration follows id order, which keeps the stable sorts elsewhere
/// deterministic. Serialization is the bare map, so the wire document stays
/// `{ "<uuid>": { "label": …, "content": …, "parent"?: … } }`.
pub struct Outline {
    sections: BTreeMap<SectionId, Section>,
}

impl Outline {
    #[must_use]
    /// Empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Number of sections in the collection.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    /// True when the collection holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    /// Look up a section by id.
    pub fn get(&self, id: &SectionId) -> Option<&Section> {
        self.sections.get(id)
    }

    #[must_use]
    /// True when `id` exists in the collection.
    pub fn contains(&self, id: &SectionId) -> bool {
        self.sections.contains_key(id)
    }

    /// Iterate over `(id, section)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&SectionId, &Section)> {
        self.sections.iter()
    }

    /// Iterate over ids in id order.
    pub fn ids(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.keys()
    }

    pub(crate) fn get_mut(&mut self, id: &SectionId) -> Option<&mut Section> {
        self.sections.get_mut(id)
    }

    /// Create a section with a fresh id under `parent` and renumber the tree.
    ///
    /// The new section starts with the bare trimmed title as its label. Bare
    /// titles sort after every numbered sibling, so the renumber pass places
    /// the newcomer at the end of its sibling group and assigns its prefix.
    ///
    /// # Errors
    ///
    /// Refuses empty titles, unknown parents, and parents already nested at
    /// the maximum depth, leaving the collection unchanged.
    pub fn add_section(
        &mut self,
        title: &str,
        parent: Option<SectionId>,
    ) -> Result<SectionId, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if let Some(parent_id) = &parent {
            let Some(parent_section) = self.sections.get(parent_id) else {
                return Err(ValidationError::UnknownParent(parent_id.clone()));
            };
            if renumber::at_depth_limit(parent_section) {
                return Err(ValidationError::TooDeep);
            }
        }
        let id = SectionId::new();
        self.sections.insert(id.clone(), Section::new(title, parent));
        renumber::renumber(self);
        Ok(id)
    }

    /// Remove a section and its direct children, then renumber the survivors.
    ///
    /// The cascade is exactly one level deep, which under the two-level
    /// invariant removes the whole subtree. Renumbering keeps the remaining
    /// labels gap-free. Returns the removed ids, empty when `id` is unknown.
    pub fn delete_section(&mut self, id: &SectionId) -> Vec<SectionId> {
        if self.sections.remove(id).is_none() {
            return Vec::new();
        }
        let mut removed = vec![id.clone()];
        let children: Vec<SectionId> = self
            .sections
            .iter()
            .filter(|(_, section)| section.parent.as_ref() == Some(id))
            .map(|(child_id, _)| child_id.clone())
            .collect();
        for child in children {
            self.sections.remove(&child);
            removed.push(child);
        }
        renumber::renumber(self);
        removed
    }

    /// Replace a section's content, leaving label and position untouched.
    ///
    /// Returns false when `id` does not exist.
    pub fn set_content(&mut self, id: &SectionId, content: String) -> bool {
        let Some(section) = self.sections.get_mut(id) else {
            return false;
        };
        section.content = content;
        true
    }
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
