//! Section representation for the numbered help outline.
//!
//! A section is one node of the two-level tree: a label carrying both its
//! dotted-numeric position and its title, an opaque rich-text payload the
//! ordering engine never inspects, and an optional parent reference. The
//! serialized shape matches the original store document, so parent is omitted
//! for top-level sections and the derived depth marker never hits the wire.

use crate::label;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Opaque unique identifier for a section, immutable for its lifetime.
pub struct SectionId(String);

impl SectionId {
    #[must_use]
    /// Mint a fresh identifier; collisions are negligible (UUID v4).
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    /// The identifier exactly as stored in the document keys.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for SectionId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Nesting depth marker, derived from parent links at renumber/repair time
/// rather than re-parsed out of the label string on every check.
pub enum Depth {
    /// Top-level section.
    #[default]
    Root,
    /// Nested exactly one level below a top-level section.
    Child,
}

impl Depth {
    #[must_use]
    /// Indent steps for display: 0 for roots, 1 for children.
    pub const fn indent(self) -> usize {
        match self {
            Self::Root => 0,
            Self::Child => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One node of the outline.
pub struct Section {
    /// Display string: dotted numeric prefix, one space, user-chosen title.
    pub label: String,
    /// Opaque rich-text/HTML payload; ordering never inspects it.
    pub content: String,
    /// Containing section; absent for top-level sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<SectionId>,
    /// Derived depth marker; recomputed on load and on every renumber pass.
    #[serde(skip)]
    pub depth: Depth,
}

impl Section {
    #[must_use]
    /// New empty section whose placeholder label is the bare title; the next
    /// renumber pass slots it into its sibling position.
    pub fn new(title: &str, parent: Option<SectionId>) -> Self {
        Self {
            label: title.to_string(),
            content: String::new(),
            depth: if parent.is_some() {
                Depth::Child
            } else {
                Depth::Root
            },
            parent,
        }
    }

    #[must_use]
    /// Title text of the label, with any numeric prefix stripped.
    pub fn title(&self) -> &str {
        label::parse(&self.label).title
    }
}
