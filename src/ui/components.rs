//! Shared UI components (header, loading spinner, error banner, status bar).
//!
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use throbber_widgets_tui::Throbber;

use crate::app::{AppState, InputMode, Theme};

pub const TITLE: &str = "User Dashboard";
pub const SUBTITLE: &str = "システムユーザー管理";
pub const SEARCH_PLACEHOLDER: &str = "検索...";
pub const LOADING_LABEL: &str = "Loading users...";

const SEARCH_PROMPT: &str = "Search: ";

/// Title block with the subtitle and the search input.
pub fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let searching = app.input_mode == InputMode::Search;

    let query_span = if app.query.is_empty() && !searching {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(theme.muted))
    } else {
        Span::styled(app.query.as_str(), Style::default().fg(theme.text))
    };
    let prompt_style = if searching {
        Style::default().fg(theme.highlight_fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.header_fg)
    };
    let lines = vec![
        Line::from(Span::styled(SUBTITLE, Style::default().fg(theme.muted))),
        Line::from(vec![Span::styled(SEARCH_PROMPT, prompt_style), query_span.clone()]),
    ];

    let block = Block::default()
        .title(Span::styled(TITLE, Style::default().fg(theme.title).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    let p = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(theme.header_fg).bg(theme.header_bg));
    f.render_widget(p, area);

    if searching && inner.height >= 2 {
        let offset = (Span::raw(SEARCH_PROMPT).width() + query_span.width()) as u16;
        let x = inner.x.saturating_add(offset).min(inner.right().saturating_sub(1));
        f.set_cursor_position((x, inner.y + 1));
    }
}

/// Centered spinner shown until the fetch settles.
pub fn render_loading(f: &mut Frame, area: Rect, app: &mut AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let style = Style::default().fg(app.theme.title);
    let throbber = Throbber::default()
        .label(LOADING_LABEL)
        .style(Style::default().fg(app.theme.muted))
        .throbber_style(style.add_modifier(Modifier::BOLD));

    // spinner glyph, a space, then the label
    let width = (LOADING_LABEL.len() as u16 + 2).min(area.width);
    let spot = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height / 2,
        width,
        height: 1,
    };
    f.render_stateful_widget(throbber, spot, &mut app.throbber);
}

/// Error banner; the message is shown verbatim.
pub fn render_error_banner(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let style = Style::default().fg(theme.error_fg).bg(theme.error_bg);
    let line = Line::from(format!("Error: {message}"));
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let rows = line.width().div_ceil(inner_width).max(1) as u16;
    let p = Paragraph::new(line)
        .style(style)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error_fg)),
        );
    let height = area.height.min(rows.saturating_add(2));
    f.render_widget(p, Rect { height, ..area });
}

/// Bottom status bar: mode, `shown/total` once loaded, elapsed time, key hints.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState, shown: Option<(usize, usize)>) {
    let mode = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::Search => "SEARCH",
    };
    let counts = match shown {
        Some((visible, total)) => format!("  users:{visible}/{total}"),
        None => String::new(),
    };
    let hints = match app.input_mode {
        InputMode::Normal => "/: search  arrows/hjkl: move  q: quit",
        InputMode::Search => "Enter: done  Esc: clear",
    };
    let msg = format!(
        "mode: {mode}{counts}  up:{}s  {hints}",
        app.started_at.elapsed().as_secs()
    );
    let p = Paragraph::new(msg)
        .alignment(Alignment::Left)
        .style(Style::default().fg(app.theme.status_fg).bg(app.theme.status_bg));
    f.render_widget(p, area);
}
