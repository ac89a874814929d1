//! pilcrow: a two-level numbered outline editor for living help documents.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use edtui::EditorEventHandler;
use pilcrow::store::SectionStore;
use pilcrow::{app_state, config, export, store, ui};
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "pilcrow")]
#[command(about = "Two-level numbered outlines for living help documents", long_about = None)]
struct Args {
    /// JSON store holding the section collection
    #[arg(value_name = "STORE")]
    store: Option<PathBuf>,

    /// Render the store to HTML at PATH and exit
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Start with editing enabled
    #[arg(long)]
    editable: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let cfg = config::Config::load();

    let store_path = args
        .store
        .unwrap_or_else(|| PathBuf::from(&cfg.store_path));
    let mut file_store = store::JsonFileStore::new(store_path);

    // Headless export: render and leave without entering the TUI.
    if let Some(target) = args.export {
        let outline = file_store
            .read()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
            .unwrap_or_default();
        export::export_to_file(&outline, &target)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        println!("Exported {} section(s) to {}", outline.len(), target.display());
        return Ok(());
    }

    let state = app_state::AppState::new(Box::new(file_store), args.editable, cfg.wrap_width)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    run_tui(state, &cfg)
}

fn run_tui(mut app: app_state::AppState, cfg: &config::Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut editor_handler = EditorEventHandler::default();

    let result = run_app(&mut terminal, &mut app, cfg, &mut editor_handler);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

#[allow(clippy::too_many_lines)]
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
    cfg: &config::Config,
    editor_handler: &mut EditorEventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, cfg))?;

        // Idle ticks double as the store poll so external edits surface
        // without a dedicated watcher thread.
        if !event::poll(Duration::from_millis(250))? {
            app.poll_store();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            match app.current_view {
                app_state::View::List => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Up => app.select_prev(),
                    KeyCode::Down => app.select_next(),
                    KeyCode::Left | KeyCode::Char('h') => app.select_parent(),
                    KeyCode::Right | KeyCode::Char('l') => app.select_first_child(),
                    KeyCode::Tab => app.toggle_collapse(),
                    KeyCode::Char('C') => app.collapse_all(),
                    KeyCode::Char('O') => app.expand_all(),
                    KeyCode::Char('E') => app.toggle_editable(),
                    KeyCode::Char('/') => app.open_prompt(app_state::Prompt::Search),
                    KeyCode::Char('a') => {
                        if app.ensure_editable() {
                            app.open_prompt(app_state::Prompt::AddRoot);
                        }
                    }
                    KeyCode::Char('A') => {
                        if app.ensure_editable() {
                            if let Some(parent) = app.selected_id().cloned() {
                                app.open_prompt(app_state::Prompt::AddChild(parent));
                            }
                        }
                    }
                    KeyCode::Char('d') => {
                        if app.ensure_editable() {
                            app.request_delete();
                        }
                    }
                    KeyCode::Esc => {
                        if !app.search_term.is_empty() {
                            app.clear_search();
                        }
                    }
                    KeyCode::Char(':') => {
                        app.current_view = app_state::View::Command;
                        app.command_buffer.clear();
                        app.message = None;
                    }
                    KeyCode::Enter => {
                        if app.ensure_editable() {
                            app.enter_detail_view();
                        }
                    }
                    _ => {}
                },
                app_state::View::Detail => match key.code {
                    KeyCode::Char(':') => {
                        if let Some(ref editor_state) = app.editor_state {
                            if editor_state.mode == edtui::EditorMode::Normal {
                                app.current_view = app_state::View::Command;
                                app.command_buffer.clear();
                                app.message = None;
                            } else {
                                editor_handler
                                    .on_key_event(key, app.editor_state.as_mut().unwrap());
                            }
                        }
                    }
                    KeyCode::Esc => {
                        if let Some(ref editor_state) = app.editor_state {
                            if editor_state.mode == edtui::EditorMode::Normal {
                                app.exit_detail_view(false);
                            } else {
                                editor_handler
                                    .on_key_event(key, app.editor_state.as_mut().unwrap());
                            }
                        }
                    }
                    _ => {
                        if let Some(ref mut editor_state) = app.editor_state {
                            editor_handler.on_key_event(key, editor_state);
                        }
                    }
                },
                app_state::View::Command => match key.code {
                    KeyCode::Char(c) => {
                        app.command_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.command_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let cmd = app.command_buffer.clone();
                        app.command_buffer.clear();

                        match cmd.as_str() {
                            "w" => {
                                if app.editor_state.is_some() {
                                    app.save_current();
                                } else if app.persist() {
                                    app.message = Some("Saved".to_string());
                                }
                            }
                            "x" => {
                                if app.editor_state.is_some() {
                                    app.save_current();
                                    app.exit_detail_view(false);
                                }
                            }
                            "q" | "q!" => {
                                if app.editor_state.is_some() {
                                    app.exit_detail_view(false);
                                } else {
                                    return Ok(());
                                }
                            }
                            "export" => app.export(Path::new(&cfg.export_path)),
                            _ => {
                                if let Some(rest) = cmd.strip_prefix("export ") {
                                    app.export(Path::new(rest.trim()));
                                } else {
                                    app.message = Some(format!("Unknown command: {cmd}"));
                                }
                            }
                        }

                        if app.current_view == app_state::View::Command {
                            app.current_view = if app.editor_state.is_some() {
                                app_state::View::Detail
                            } else {
                                app_state::View::List
                            };
                        }
                    }
                    KeyCode::Esc => {
                        app.command_buffer.clear();
                        app.current_view = if app.editor_state.is_some() {
                            app_state::View::Detail
                        } else {
                            app_state::View::List
                        };
                    }
                    _ => {}
                },
                app_state::View::Prompt => match key.code {
                    KeyCode::Char(c) => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit_prompt(),
                    KeyCode::Esc => app.cancel_prompt(),
                    _ => {}
                },
                app_state::View::Confirm => match key.code {
                    KeyCode::Char('y' | 'Y') => app.confirm_delete(),
                    KeyCode::Char('n' | 'N') | KeyCode::Esc => app.cancel_delete(),
                    _ => {}
                },
            }
        }
    }
}
