//! Responsive grid of user cards.
//!
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::{AppState, Theme};
use crate::model::User;

/// Border plus avatar/name, username, email and company lines.
pub const CARD_HEIGHT: u16 = 6;

/// Number of card columns for a given width: one on narrow terminals, up to three on wide ones.
pub fn columns_for_width(width: u16) -> usize {
    match width {
        0..60 => 1,
        60..100 => 2,
        _ => 3,
    }
}

pub fn render_card_grid(f: &mut Frame, area: Rect, users: &[&User], app: &mut AppState) {
    let columns = columns_for_width(area.width);
    let rows_per_page = ((area.height / CARD_HEIGHT) as usize).max(1);
    app.columns = columns;
    app.rows_per_page = rows_per_page;

    if users.is_empty() {
        let p = Paragraph::new(format!("No users match \"{}\"", app.query))
            .style(Style::default().fg(app.theme.muted));
        f.render_widget(p, area);
        return;
    }

    let selected = app.selected.min(users.len() - 1);
    let selected_row = selected / columns;
    let first_row = (selected_row / rows_per_page) * rows_per_page;
    let start = first_row * columns;
    let end = (start + rows_per_page * columns).min(users.len());

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); rows_per_page])
        .split(area);

    for (row_idx, chunk) in users[start..end].chunks(columns).enumerate() {
        let Some(row_area) = row_areas.get(row_idx) else {
            break;
        };
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);
        for (col_idx, user) in chunk.iter().enumerate() {
            let absolute_index = start + row_idx * columns + col_idx;
            render_card(f, cells[col_idx], user, absolute_index == selected, &app.theme);
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, user: &User, selected: bool, theme: &Theme) {
    let (badge, badge_color) = if user.is_active() {
        ("Active", theme.active)
    } else {
        ("Inactive", theme.inactive)
    };
    let border_style = if selected {
        Style::default().fg(theme.highlight_fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(
            Line::from(Span::styled(
                format!(" {badge} "),
                Style::default().fg(badge_color).add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        );

    let label = Style::default().fg(theme.muted);
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("({}) ", user.initial()),
                Style::default().fg(theme.avatar).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                user.name.as_str(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(format!("    @{}", user.username), label)),
        Line::from(vec![
            Span::styled("mail ", label),
            Span::styled(user.email.as_str(), Style::default().fg(theme.text)),
        ]),
        Line::from(vec![
            Span::styled("corp ", label),
            Span::styled(user.company.name.as_str(), Style::default().fg(theme.text)),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}
