pub mod cards;
pub mod components;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::AppState;
use crate::search::filter_users;
use crate::source::LoadState;

pub fn render(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    components::render_header(f, root[0], app);

    let state = app.load_state();
    let shown = match &state {
        LoadState::Loading => {
            components::render_loading(f, root[1], app);
            None
        }
        LoadState::Failed { message } => {
            components::render_error_banner(f, root[1], message, &app.theme);
            None
        }
        LoadState::Ready { users } => {
            let visible = filter_users(users, &app.query);
            cards::render_card_grid(f, root[1], &visible, app);
            Some((visible.len(), users.len()))
        }
    };

    components::render_status_bar(f, root[2], app, shown);
}
