// Unit tests for user-dashboard
// These exercise the public API: theme persistence, key handling and
// rendering of each load state against ratatui's TestBackend.

#[cfg(test)]
mod theme_tests {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};
    use user_dashboard::app::Theme;

    fn temp_path(tag: &str) -> PathBuf {
        let nonce = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        std::env::temp_dir().join(format!("udash_{tag}_{}_{nonce}.conf", std::process::id()))
    }

    #[test]
    fn theme_roundtrip() {
        let path = temp_path("theme");
        let t = Theme::mocha();
        t.write_file(&path).expect("write theme");
        let t2 = Theme::from_file(&path).expect("read theme");
        assert_eq!(t.text, t2.text);
        assert_eq!(t.active, t2.active);
        assert_eq!(t.error_fg, t2.error_fg);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn theme_file_overrides_single_keys() {
        let path = temp_path("override");
        std::fs::write(&path, "# custom\nactive = #112233\nbogus = #FFFFFF\nborder = nonsense\n").unwrap();
        let t = Theme::from_file(&path).unwrap();
        assert_eq!(t.active, ratatui::style::Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(t.border, Theme::mocha().border);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_or_init_creates_missing_file() {
        let path = temp_path("init");
        let _ = std::fs::remove_file(&path);
        let _created = Theme::load_or_init(&path);
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}

#[cfg(test)]
mod render_tests {
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;
    use std::time::Duration;
    use user_dashboard::app::update::{Flow, handle_key};
    use user_dashboard::app::{AppState, InputMode, Theme};
    use user_dashboard::client::UserFetcher;
    use user_dashboard::error::FetchError;
    use user_dashboard::model::{Company, User};
    use user_dashboard::source::{LoadState, UserSource};
    use user_dashboard::ui;

    struct Stub(Result<Vec<User>, FetchError>);

    #[async_trait]
    impl UserFetcher for Stub {
        async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
            self.0.clone()
        }
    }

    struct Hang;

    #[async_trait]
    impl UserFetcher for Hang {
        async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
            std::future::pending().await
        }
    }

    fn mk_user(id: u64, name: &str, username: &str, email: &str, company: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            company: Company {
                name: company.to_string(),
            },
        }
    }

    fn sample_users() -> Vec<User> {
        vec![
            mk_user(1, "Leanne Graham", "Bret", "Sincere@april.biz", "Romaguera-Crona"),
            mk_user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv", "Deckow-Crist"),
        ]
    }

    async fn settled_app(outcome: Result<Vec<User>, FetchError>) -> AppState {
        let source = UserSource::spawn(Arc::new(Stub(outcome)), Duration::ZERO);
        source.settled().await;
        AppState::new(source, Theme::dark())
    }

    fn draw(app: &mut AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui::render(f, app)).unwrap();
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn loading_state_shows_spinner_and_no_cards() {
        let source = UserSource::spawn(Arc::new(Hang), Duration::ZERO);
        let mut app = AppState::new(source, Theme::dark());
        assert_eq!(app.load_state(), LoadState::Loading);
        assert_eq!(app.visible_count(), None);

        let screen = draw(&mut app, 100, 30);
        assert!(screen.contains("User Dashboard"));
        assert!(screen.contains("Loading users"));
        assert!(!screen.contains("users:"));
    }

    #[tokio::test]
    async fn failed_state_shows_message_verbatim() {
        let mut app = settled_app(Err(FetchError::transport("network down"))).await;
        let screen = draw(&mut app, 100, 30);
        assert!(screen.contains("Error: network down"));
        assert!(!screen.contains("Loading users"));
    }

    #[tokio::test]
    async fn ready_state_renders_cards() {
        let mut app = settled_app(Ok(sample_users())).await;
        let screen = draw(&mut app, 120, 30);
        assert!(screen.contains("Leanne Graham"));
        assert!(screen.contains("@Bret"));
        assert!(screen.contains("Sincere@april.biz"));
        assert!(screen.contains("Romaguera-Crona"));
        assert!(screen.contains("Inactive"));
        assert!(screen.contains("Ervin Howell"));
        assert!(screen.contains("users:2/2"));
        assert_eq!(app.columns, 3);
    }

    #[tokio::test]
    async fn typing_a_query_narrows_the_grid_immediately() {
        let mut app = settled_app(Ok(sample_users())).await;
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('/'))), Flow::Continue);
        assert_eq!(app.input_mode, InputMode::Search);
        for c in "ERVIN".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.query, "ERVIN");

        let screen = draw(&mut app, 120, 30);
        assert!(screen.contains("Ervin Howell"));
        assert!(!screen.contains("Leanne Graham"));
        assert!(screen.contains("users:1/2"));

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.query.is_empty());
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.visible_count(), Some(2));
    }

    #[tokio::test]
    async fn no_match_shows_empty_message() {
        let mut app = settled_app(Ok(sample_users())).await;
        app.query = "ZZZ".to_string();
        let screen = draw(&mut app, 80, 24);
        assert!(screen.contains("No users match \"ZZZ\""));
        assert!(screen.contains("users:0/2"));
    }

    #[tokio::test]
    async fn quit_keys_and_search_typing_do_not_collide() {
        let mut app = settled_app(Ok(sample_users())).await;
        handle_key(&mut app, press(KeyCode::Char('/')));
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('q'))), Flow::Continue);
        assert_eq!(app.query, "q");
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.query, "q");
        assert_eq!(handle_key(&mut app, press(KeyCode::Char('q'))), Flow::Quit);
        assert_eq!(
            handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Flow::Quit
        );
    }

    #[tokio::test]
    async fn failed_state_survives_key_presses() {
        let mut app = settled_app(Err(FetchError::transport("network down"))).await;
        for code in [KeyCode::Char('/'), KeyCode::Char('a'), KeyCode::Enter, KeyCode::Down] {
            handle_key(&mut app, press(code));
        }
        assert_eq!(
            app.load_state(),
            LoadState::Failed {
                message: "network down".to_string()
            }
        );
        assert_eq!(app.visible_count(), None);
    }
}
