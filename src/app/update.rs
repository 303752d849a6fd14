use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::Backend;
use std::time::Duration;
use tracing::debug;

use crate::app::{AppState, InputMode};
use crate::ui;

const TICK: Duration = Duration::from_millis(100);

/// Whether the event loop should keep going after a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Draw and handle input until the user quits. The fetch runs elsewhere;
/// every frame reads a fresh snapshot of its state.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> Result<()> {
    loop {
        app.throbber.calc_next();
        clamp_selection(app);
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key) == Flow::Quit {
                    break;
                }
            }
        }
    }
    debug!(uptime_ms = app.started_at.elapsed().as_millis() as u64, "leaving event loop");
    Ok(())
}

/// Apply one key press to the view state.
///
/// Only the query, input mode and selection change here; the load state is
/// owned by the fetch task and is never touched.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Flow {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Flow::Quit;
    }
    let row = app.columns.max(1) as isize;
    let page = page_len(app) as isize;
    match app.input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('/') => app.input_mode = InputMode::Search,
            KeyCode::Left | KeyCode::Char('h') => move_selection(app, -1),
            KeyCode::Right | KeyCode::Char('l') => move_selection(app, 1),
            KeyCode::Up | KeyCode::Char('k') => move_selection(app, -row),
            KeyCode::Down | KeyCode::Char('j') => move_selection(app, row),
            KeyCode::PageUp => move_selection(app, -page),
            KeyCode::PageDown => move_selection(app, page),
            KeyCode::Home => app.selected = 0,
            _ => {}
        },
        InputMode::Search => match key.code {
            KeyCode::Enter => app.input_mode = InputMode::Normal,
            KeyCode::Esc => {
                app.query.clear();
                app.selected = 0;
                app.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                if app.query.pop().is_some() {
                    app.selected = 0;
                }
            }
            KeyCode::Char(c) => {
                app.query.push(c);
                app.selected = 0;
            }
            _ => {}
        },
    }
    Flow::Continue
}

fn page_len(app: &AppState) -> usize {
    app.columns.max(1) * app.rows_per_page.max(1)
}

fn move_selection(app: &mut AppState, delta: isize) {
    let Some(len) = app.visible_count() else {
        return;
    };
    if len == 0 {
        app.selected = 0;
        return;
    }
    app.selected = app.selected.saturating_add_signed(delta).min(len - 1);
}

/// Keep the selection inside the derived list.
fn clamp_selection(app: &mut AppState) {
    let len = app.visible_count().unwrap_or(0);
    app.selected = app.selected.min(len.saturating_sub(1));
}
