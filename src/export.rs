//! Flat HTML rendering of the outline for publishing.
//!
//! Every section becomes a heading plus its raw content body, emitted in
//! label order with rules between them. Content is trusted markup authored
//! in the editor, so it passes through verbatim.

use std::fs;
use std::path::Path;

use crate::error::StoreError;
use crate::label;
use crate::outline::Outline;

#[must_use]
/// Render the whole outline as a single HTML document string.
pub fn render_html(outline: &Outline) -> String {
    let mut sections: Vec<_> = outline.iter().collect();
    sections.sort_by(|(_, a), (_, b)| {
        label::sort_key(&a.label).total_cmp(&label::sort_key(&b.label))
    });
    let body = sections
        .iter()
        .map(|(_, section)| format!("<h2>{}</h2>{}", section.label, section.content))
        .collect::<Vec<_>>()
        .join("<hr>");
    format!("<html><body>{body}</body></html>")
}

/// Render the outline and write the document to `path`.
///
/// # Errors
///
/// Fails when the file cannot be written.
pub fn export_to_file(outline: &Outline, path: &Path) -> Result<(), StoreError> {
    fs::write(path, render_html(outline))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/export.rs"]
mod tests;
