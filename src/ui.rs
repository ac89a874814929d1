//! Rendering: the application state drawn as a navigable, vim-flavored screen.
//!
//! The draw function dispatches on the current view. The list view shows the
//! section tree beside a read-only preview of the selected content; the detail
//! view hands the content to the embedded editor. Command, prompt, and confirm
//! states only swap out the bottom bar.

use crate::app_state::{AppState, Prompt, View};
use crate::config::Config;
use crate::hierarchy::HierarchyIndex;
use crate::section::SectionId;
use edtui::{EditorTheme, EditorView, SyntaxHighlighter};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Renders whichever view the application state says is active.
pub fn draw(f: &mut Frame, app: &mut AppState, _cfg: &Config) {
    match app.current_view {
        View::Detail => draw_detail(f, app),
        // Commands typed over an open editor keep the editor on screen.
        View::Command if app.editor_state.is_some() => draw_detail(f, app),
        _ => draw_list(f, app),
    }
}

#[allow(clippy::too_many_lines)]
fn draw_list(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Min(0)])
        .split(chunks[0]);

    let items: Vec<ListItem> = app
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let indent = "  ".repeat(row.indent);
            let marker = if row.has_children {
                if app.collapsed.contains(&row.id) {
                    "▸ "
                } else {
                    "▾ "
                }
            } else {
                "  "
            };
            let label = app
                .outline
                .get(&row.id)
                .map_or_else(String::new, |s| s.label.clone());

            let mut label_style = Style::default();
            if row.indent == 0 {
                label_style = label_style.add_modifier(Modifier::BOLD);
            }
            let line = Line::from(vec![
                Span::raw(indent),
                Span::styled(marker, Style::default().fg(Color::DarkGray)),
                Span::styled(label, label_style),
            ]);

            let style = if i == app.current_row {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let title = if app.search_term.is_empty() {
        format!("Sections ({})", app.outline.len())
    } else {
        format!("Sections (filter: {})", app.search_term)
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, panes[0]);

    let preview = match app.selected_id() {
        Some(id) => {
            let path = breadcrumb(app, id);
            let content = app
                .outline
                .get(id)
                .map_or_else(String::new, |s| s.content.clone());
            Paragraph::new(content)
                .block(Block::default().borders(Borders::ALL).title(path))
                .wrap(Wrap { trim: false })
        }
        None => Paragraph::new("No sections yet. Press a to add one.")
            .block(Block::default().borders(Borders::ALL).title("Preview"))
            .wrap(Wrap { trim: false }),
    };
    f.render_widget(preview, panes[1]);

    let bottom = match app.current_view {
        View::Command => Paragraph::new(format!(":{}", app.command_buffer))
            .block(Block::default().borders(Borders::ALL).title("Command")),
        View::Prompt => {
            let title = match app.prompt {
                Some(Prompt::Search) => "Search",
                Some(Prompt::AddRoot) => "New section title",
                Some(Prompt::AddChild(_)) => "New subsection title",
                None => "Input",
            };
            Paragraph::new(app.input_buffer.clone())
                .block(Block::default().borders(Borders::ALL).title(title))
        }
        View::Confirm => {
            let label = app
                .pending_delete
                .as_ref()
                .and_then(|id| app.outline.get(id))
                .map_or_else(String::new, |s| s.label.clone());
            Paragraph::new(format!("Delete \"{label}\" and its subsections? y/n"))
                .block(Block::default().borders(Borders::ALL).title("Confirm"))
        }
        _ => {
            let text = app.message.clone().unwrap_or_else(|| {
                "↑/↓: Navigate | ←/→: Parent/Child | Enter: Edit | Tab: Fold | /: Search | \
                 a/A: Add | d: Delete | q: Quit"
                    .to_string()
            });
            Paragraph::new(text).block(Block::default().borders(Borders::ALL))
        }
    };
    f.render_widget(bottom, chunks[1]);
}

fn draw_detail(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Breadcrumb
            Constraint::Min(0),    // Editor
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    if let Some(id) = app.editing.clone() {
        let path = breadcrumb(app, &id);
        let label = app
            .outline
            .get(&id)
            .map_or_else(String::new, |s| s.label.clone());

        let breadcrumb_widget =
            Paragraph::new(path).block(Block::default().borders(Borders::ALL).title("Navigation"));
        f.render_widget(breadcrumb_widget, chunks[0]);

        if let Some(ref mut editor_state) = app.editor_state {
            let block = Block::default().borders(Borders::ALL).title(label);
            let inner = block.inner(chunks[1]);
            f.render_widget(block, chunks[1]);

            // Cap the editing area at the configured wrap width.
            let width = inner
                .width
                .min(u16::try_from(app.wrap_width).unwrap_or(u16::MAX));
            let editor_area = Rect { width, ..inner };

            let syntax_highlighter = SyntaxHighlighter::new("dracula", "html");
            let editor = EditorView::new(editor_state)
                .theme(EditorTheme::default())
                .syntax_highlighter(Some(syntax_highlighter))
                .wrap(true);
            f.render_widget(editor, editor_area);
        }
    }

    let help_text = if app.current_view == View::Command {
        format!(":{}", app.command_buffer)
    } else if let Some(ref msg) = app.message {
        msg.clone()
    } else {
        ":w Save | :x Save & Exit | :q Quit without saving | Esc then : for commands".to_string()
    };
    let help = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

/// Labels from the top of the tree down to `id`, joined for display.
fn breadcrumb(app: &AppState, id: &SectionId) -> String {
    let index = HierarchyIndex::build(&app.outline);
    let mut parts: Vec<String> = index
        .ancestors_of(id)
        .iter()
        .rev()
        .filter_map(|ancestor| app.outline.get(ancestor).map(|s| s.label.clone()))
        .collect();
    if let Some(section) = app.outline.get(id) {
        parts.push(section.label.clone());
    }
    parts.join(" > ")
}
