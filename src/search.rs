//! Case-insensitive substring search over titles and content.
//!
//! A match keeps its whole ancestor chain visible so filtered views never
//! show a child floating without the headings that give it meaning.

use std::collections::HashSet;

use crate::hierarchy::HierarchyIndex;
use crate::label;
use crate::outline::Outline;
use crate::section::SectionId;

#[must_use]
/// Ids that remain visible for `query`: every matching section plus all of
/// its ancestors. An empty query keeps everything visible.
///
/// Matching is a lowercase substring test against the section title (the
/// label with its numeric prefix stripped) and against the content body.
/// Prefixes are excluded on purpose: searching "1" should not light up the
/// entire outline.
pub fn resolve_visible(outline: &Outline, query: &str) -> HashSet<SectionId> {
    if query.is_empty() {
        return outline.ids().cloned().collect();
    }
    let needle = query.to_lowercase();
    let index = HierarchyIndex::build(outline);
    let mut visible = HashSet::new();
    for (id, section) in outline.iter() {
        let title = label::parse(&section.label).title.to_lowercase();
        if title.contains(&needle) || section.content.to_lowercase().contains(&needle) {
            visible.insert(id.clone());
            visible.extend(index.ancestors_of(id));
        }
    }
    visible
}

#[cfg(test)]
#[path = "tests/search.rs"]
mod tests;
