//! The core state machine bridging the section outline and the interactive views.
//!
//! Everything the interface shows is derived state: the outline is authoritative, and the
//! flattened row list the sidebar renders is rebuilt from it after every mutation. Each edit
//! follows the same path (validate, apply, persist, rebuild rows) so the store always holds
//! what the screen shows. Between input events the store is polled, which is how edits made
//! by another process show up without restarting.

use crate::error::StoreError;
use crate::export;
use crate::hierarchy::{self, HierarchyIndex};
use crate::outline::Outline;
use crate::search;
use crate::section::SectionId;
use crate::store::SectionStore;
use edtui::{EditorState, Lines};
use std::collections::HashSet;
use std::path::Path;

#[derive(PartialEq)]
/// Determines which UI screen renders and how input is interpreted.
pub enum View {
    /// Shows the section tree with navigation and a content preview.
    List,
    /// Provides a vim-like editor for the selected section's content.
    Detail,
    /// Captures vim-style command input after ':' keystroke.
    Command,
    /// Captures a line of free text for search or a new section title.
    Prompt,
    /// Asks for confirmation before a destructive operation.
    Confirm,
}

#[derive(Clone, Debug, PartialEq)]
/// What the free-text prompt is collecting input for.
pub enum Prompt {
    /// Filter term matched against titles and content.
    Search,
    /// Title for a new top-level section.
    AddRoot,
    /// Title for a new subsection under the given parent.
    AddChild(SectionId),
}

#[derive(Clone, Debug)]
/// One visible line of the section tree, in display order.
pub struct Row {
    /// Section this row stands for.
    pub id: SectionId,
    /// Nesting level, 0 for top-level sections.
    pub indent: usize,
    /// Whether the section has subsections, collapsed or not.
    pub has_children: bool,
}

/// Bridges the section outline and the interactive views, maintaining session state.
///
/// Collapse state, the search term, and the selection live here rather than in the
/// outline, so an external reload can replace the document wholesale and the view
/// settles back onto whatever survived.
pub struct AppState {
    /// The full section collection, including rows hidden by collapse or search.
    pub outline: Outline,
    /// Persistence handle; every mutation is written through immediately.
    pub store: Box<dyn SectionStore>,
    /// Flattened tree in display order, after collapse and search filtering.
    pub rows: Vec<Row>,
    /// Selected row in the section list.
    pub current_row: usize,
    /// Active UI screen determining input handling.
    pub current_view: View,
    /// Current filter term; empty means no filtering.
    pub search_term: String,
    /// Sections whose subsections are hidden in the list.
    pub collapsed: HashSet<SectionId>,
    /// Whether mutating operations are allowed this session.
    pub editable: bool,
    /// Editor buffer content when the detail view is active.
    pub editor_state: Option<EditorState>,
    /// Section the detail view is editing, pinned at entry so a store reload
    /// cannot redirect the save.
    pub editing: Option<SectionId>,
    /// Accumulates vim-style command input after ':' is pressed.
    pub command_buffer: String,
    /// Accumulates prompt input while a prompt is open.
    pub input_buffer: String,
    /// Open prompt, if any.
    pub prompt: Option<Prompt>,
    /// Section awaiting delete confirmation.
    pub pending_delete: Option<SectionId>,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Maximum line width for text wrapping in the editor.
    pub wrap_width: usize,
}

impl AppState {
    /// Initialises application state from the store's current snapshot.
    ///
    /// Sections with dangling or cyclic parent references are promoted to
    /// top level before anything renders, so a damaged document is never
    /// partially invisible.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read or parsed.
    pub fn new(
        mut store: Box<dyn SectionStore>,
        editable: bool,
        wrap_width: usize,
    ) -> Result<Self, StoreError> {
        let mut outline = store.read()?.unwrap_or_default();
        let demoted = hierarchy::repair(&mut outline);
        let mut state = Self {
            outline,
            store,
            rows: Vec::new(),
            current_row: 0,
            current_view: View::List,
            search_term: String::new(),
            collapsed: HashSet::new(),
            editable,
            editor_state: None,
            editing: None,
            command_buffer: String::new(),
            input_buffer: String::new(),
            prompt: None,
            pending_delete: None,
            message: (demoted > 0).then(|| format!("Repaired {demoted} orphaned section(s)")),
            wrap_width,
        };
        state.rebuild_rows();
        Ok(state)
    }

    /// Recompute the visible row list from the outline, the collapse set, and
    /// the active search term, then clamp the selection into range.
    pub fn rebuild_rows(&mut self) {
        let visible = if self.search_term.is_empty() {
            None
        } else {
            Some(search::resolve_visible(&self.outline, &self.search_term))
        };
        let index = HierarchyIndex::build(&self.outline);
        let mut rows = Vec::new();
        push_rows(
            &index,
            &self.collapsed,
            visible.as_ref(),
            None,
            0,
            &mut rows,
        );
        self.rows = rows;
        if self.current_row >= self.rows.len() {
            self.current_row = self.rows.len().saturating_sub(1);
        }
    }

    #[must_use]
    /// Id of the currently selected row, if any rows are visible.
    pub fn selected_id(&self) -> Option<&SectionId> {
        self.rows.get(self.current_row).map(|row| &row.id)
    }

    /// Move the selection down one row.
    pub fn select_next(&mut self) {
        if self.current_row + 1 < self.rows.len() {
            self.current_row += 1;
        }
    }

    /// Move the selection up one row.
    pub fn select_prev(&mut self) {
        self.current_row = self.current_row.saturating_sub(1);
    }

    /// Move the selection to the containing section, if the current one is nested.
    pub fn select_parent(&mut self) {
        let Some(id) = self.selected_id().cloned() else {
            return;
        };
        let index = HierarchyIndex::build(&self.outline);
        let Some(parent) = index.ancestors_of(&id).first().cloned() else {
            return;
        };
        if let Some(position) = self.rows.iter().position(|row| row.id == parent) {
            self.current_row = position;
        }
    }

    /// Descend to the first subsection, expanding the current section if needed.
    pub fn select_first_child(&mut self) {
        let Some(row) = self.rows.get(self.current_row) else {
            return;
        };
        if !row.has_children {
            return;
        }
        let id = row.id.clone();
        if self.collapsed.remove(&id) {
            self.rebuild_rows();
        }
        let here = self.rows[self.current_row].indent;
        if let Some(next) = self.rows.get(self.current_row + 1) {
            if next.indent > here {
                self.current_row += 1;
            }
        }
    }

    /// Hide or reveal the selected section's subsections.
    pub fn toggle_collapse(&mut self) {
        let Some(row) = self.rows.get(self.current_row) else {
            return;
        };
        if !row.has_children {
            return;
        }
        let id = row.id.clone();
        if !self.collapsed.remove(&id) {
            self.collapsed.insert(id);
        }
        self.rebuild_rows();
    }

    /// Collapse every section that has subsections.
    pub fn collapse_all(&mut self) {
        let index = HierarchyIndex::build(&self.outline);
        self.collapsed = self
            .outline
            .ids()
            .filter(|id| !index.children_of(Some(id)).is_empty())
            .cloned()
            .collect();
        self.rebuild_rows();
    }

    /// Reveal every section.
    pub fn expand_all(&mut self) {
        self.collapsed.clear();
        self.rebuild_rows();
    }

    /// Set the filter term and rebuild the visible rows from the top.
    pub fn apply_search(&mut self, term: &str) {
        self.search_term = term.trim().to_string();
        self.current_row = 0;
        self.rebuild_rows();
    }

    /// Drop the filter term and show the full tree again.
    pub fn clear_search(&mut self) {
        self.search_term.clear();
        self.current_row = 0;
        self.rebuild_rows();
    }

    /// Create a section, persist, and select the newcomer.
    ///
    /// Refused titles (empty, unknown parent, nesting limit) leave the
    /// outline untouched and surface the reason in the help bar.
    pub fn add_section(&mut self, title: &str, parent: Option<SectionId>) {
        match self.outline.add_section(title, parent) {
            Ok(id) => {
                if let Some(parent_id) = self.outline.get(&id).and_then(|s| s.parent.clone()) {
                    self.collapsed.remove(&parent_id);
                }
                let wrote = self.persist();
                self.rebuild_rows();
                if let Some(position) = self.rows.iter().position(|row| row.id == id) {
                    self.current_row = position;
                }
                if wrote {
                    let label = self
                        .outline
                        .get(&id)
                        .map_or_else(String::new, |s| s.label.clone());
                    self.message = Some(format!("Added {label}"));
                }
            }
            Err(refusal) => self.message = Some(refusal.to_string()),
        }
    }

    /// Ask for confirmation before deleting the selected section.
    pub fn request_delete(&mut self) {
        let Some(id) = self.selected_id().cloned() else {
            return;
        };
        self.pending_delete = Some(id);
        self.current_view = View::Confirm;
    }

    /// Delete the pending section and its direct subsections, then persist.
    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            let removed = self.outline.delete_section(&id);
            for gone in &removed {
                self.collapsed.remove(gone);
            }
            let wrote = self.persist();
            self.rebuild_rows();
            if wrote {
                self.message = Some(format!("Deleted {} section(s)", removed.len()));
            }
        }
        self.current_view = View::List;
    }

    /// Abandon the pending delete.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.current_view = View::List;
    }

    /// Write the outline through to the store. Failures land in the help bar
    /// rather than ending the session; the in-memory outline stays intact.
    pub fn persist(&mut self) -> bool {
        match self.store.write(&self.outline) {
            Ok(()) => true,
            Err(err) => {
                self.message = Some(format!("Write failed: {err}"));
                false
            }
        }
    }

    /// Pick up an external change to the store, if one happened.
    ///
    /// The incoming snapshot replaces the working outline wholesale (last
    /// writer wins) after the same repair pass the initial load runs.
    pub fn poll_store(&mut self) {
        match self.store.poll() {
            Ok(Some(mut outline)) => {
                let demoted = hierarchy::repair(&mut outline);
                self.outline = outline;
                self.collapsed.retain(|id| self.outline.contains(id));
                self.rebuild_rows();
                self.message = Some(if demoted > 0 {
                    format!("Reloaded from store; repaired {demoted} section(s)")
                } else {
                    "Reloaded from store".to_string()
                });
            }
            Ok(None) => {}
            Err(err) => self.message = Some(format!("Reload failed: {err}")),
        }
    }

    /// Loads the selected section's content into the editor buffer.
    ///
    /// Initialises vim-mode editing with the content padded by a blank first
    /// line, presenting the text the way it will read under its heading.
    pub fn enter_detail_view(&mut self) {
        let Some(id) = self.selected_id().cloned() else {
            return;
        };
        let Some(section) = self.outline.get(&id) else {
            return;
        };
        let lines_text = if section.content.trim().is_empty() {
            "\n".to_string()
        } else {
            format!("\n{}\n", section.content.trim())
        };
        self.editor_state = Some(EditorState::new(Lines::from(lines_text.as_str())));
        self.editing = Some(id);
        self.current_view = View::Detail;
    }

    /// Returns to the section list, optionally persisting editor changes.
    pub fn exit_detail_view(&mut self, save: bool) {
        if save {
            self.save_current();
        }
        self.editor_state = None;
        self.editing = None;
        self.current_view = View::List;
    }

    /// Save the edited content back to its section and persist.
    ///
    /// The text is trimmed so the padding added on entry never accumulates
    /// in the stored content.
    pub fn save_current(&mut self) {
        let Some(editor_state) = self.editor_state.as_ref() else {
            return;
        };
        let content = editor_state
            .lines
            .iter_row()
            .map(|line| line.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();
        let Some(id) = self.editing.clone() else {
            return;
        };
        if self.outline.set_content(&id, content) {
            if self.persist() {
                self.message = Some("Saved".to_string());
            }
        } else {
            self.message = Some("Section no longer exists".to_string());
        }
    }

    /// Render the outline to HTML at `path`.
    pub fn export(&mut self, path: &Path) {
        match export::export_to_file(&self.outline, path) {
            Ok(()) => self.message = Some(format!("Exported to {}", path.display())),
            Err(err) => self.message = Some(format!("Export failed: {err}")),
        }
    }

    /// Open a free-text prompt, pre-filling the current term for searches.
    pub fn open_prompt(&mut self, prompt: Prompt) {
        self.input_buffer.clear();
        if prompt == Prompt::Search {
            self.input_buffer = self.search_term.clone();
        }
        self.prompt = Some(prompt);
        self.current_view = View::Prompt;
    }

    /// Act on the prompt input and return to the list.
    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            self.current_view = View::List;
            return;
        };
        let input = self.input_buffer.trim().to_string();
        self.input_buffer.clear();
        self.current_view = View::List;
        match prompt {
            Prompt::Search => self.apply_search(&input),
            Prompt::AddRoot => self.add_section(&input, None),
            Prompt::AddChild(parent) => self.add_section(&input, Some(parent)),
        }
    }

    /// Abandon the open prompt without acting on its input.
    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
        self.input_buffer.clear();
        self.current_view = View::List;
    }

    /// Gate for mutating keybindings; explains itself when the session is
    /// read-only.
    pub fn ensure_editable(&mut self) -> bool {
        if self.editable {
            true
        } else {
            self.message = Some("Read-only session; press E to enable editing".to_string());
            false
        }
    }

    /// Flip between read-only browsing and editing.
    pub fn toggle_editable(&mut self) {
        self.editable = !self.editable;
        self.message = Some(
            if self.editable {
                "Editing enabled"
            } else {
                "Editing locked"
            }
            .to_string(),
        );
    }
}

/// Append the visible rows under `parent` depth-first in sibling order.
///
/// A collapse hides a section's subtree; an active search overrides collapse
/// so every match stays reachable.
fn push_rows(
    index: &HierarchyIndex,
    collapsed: &HashSet<SectionId>,
    visible: Option<&HashSet<SectionId>>,
    parent: Option<&SectionId>,
    indent: usize,
    rows: &mut Vec<Row>,
) {
    for id in index.children_of(parent) {
        if visible.is_some_and(|keep| !keep.contains(id)) {
            continue;
        }
        let has_children = !index.children_of(Some(id)).is_empty();
        rows.push(Row {
            id: id.clone(),
            indent,
            has_children,
        });
        let expanded = visible.is_some() || !collapsed.contains(id);
        if has_children && expanded {
            push_rows(index, collapsed, visible, Some(id), indent + 1, rows);
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
