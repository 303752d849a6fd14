//! user-dashboard binary entry point.
//!
//! Parses configuration, starts the tokio runtime that owns the user fetch,
//! initializes the terminal in raw mode, runs the TUI event loop, and
//! restores the terminal state on exit.
//!
use std::fs::File;
use std::path::Path;
use std::sync::{Arc, Mutex};

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

use user_dashboard::app::{self, AppState, Theme};
use user_dashboard::client::{HttpUserClient, USER_AGENT};
use user_dashboard::config::{Cli, Config};
use user_dashboard::error::{Context, Result};
use user_dashboard::source::UserSource;

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Route tracing output to `path`; the terminal itself belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_ctx(|| format!("open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }
    let config = Config::from(cli);

    let runtime = tokio::runtime::Runtime::new().with_ctx(|| "start tokio runtime".to_string())?;
    let _guard = runtime.enter();

    let client = HttpUserClient::new(config.endpoint.clone(), USER_AGENT)
        .with_ctx(|| "build http client".to_string())?;
    info!(endpoint = %client.endpoint(), delay_ms = config.initial_delay.as_millis() as u64, "starting dashboard");
    let source = UserSource::spawn(Arc::new(client), config.initial_delay);

    let theme = config
        .theme_path
        .as_deref()
        .map(Theme::load_or_init)
        .unwrap_or_else(Theme::mocha);
    let mut state = AppState::new(source, theme);

    let mut terminal = init_terminal().map_err(|e| format!("init terminal: {}", e))?;

    let res = app::run(&mut terminal, &mut state);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    // Aborts the fetch if it is still pending.
    drop(state);

    if let Err(err) = res {
        eprintln!("application error: {err}");
    }
    Ok(())
}
