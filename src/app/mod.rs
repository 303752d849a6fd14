//! Application state types and entry glue.
//!
//! Defines the per-view state owned by the event loop, the colour theme, and
//! re-exports the loop itself as `run`.
//!
pub mod update;

use ratatui::style::Color;
use std::path::Path;
use std::time::Instant;
use throbber_widgets_tui::ThrobberState;

use crate::search::apply_search;
use crate::source::{LoadState, UserSource};

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub avatar: Color,
    pub active: Color,
    pub inactive: Color,
    pub error_fg: Color,
    pub error_bg: Color,
}

impl Theme {
    /// Dark default theme.
    pub fn dark() -> Self {
        Self {
            text: Color::Gray,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::Gray,
            header_bg: Color::Black,
            header_fg: Color::Cyan,
            status_bg: Color::DarkGray,
            status_fg: Color::Black,
            highlight_fg: Color::Yellow,
            avatar: Color::LightBlue,
            active: Color::Green,
            inactive: Color::DarkGray,
            error_fg: Color::LightRed,
            error_bg: Color::Reset,
        }
    }

    /// Catppuccin Mocha theme defaults.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),         // text
            muted: Color::Rgb(0x7f, 0x84, 0x9c),        // overlay1
            title: Color::Rgb(0xcb, 0xa6, 0xf7),        // mauve
            border: Color::Rgb(0x58, 0x5b, 0x70),       // surface2
            header_bg: Color::Rgb(0x31, 0x32, 0x44),    // surface0
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),    // lavender
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),    // surface1
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),    // text
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf), // yellow
            avatar: Color::Rgb(0xb4, 0xbe, 0xfe),       // lavender
            active: Color::Rgb(0xa6, 0xe3, 0xa1),       // green
            inactive: Color::Rgb(0x6c, 0x70, 0x86),     // overlay0
            error_fg: Color::Rgb(0xf3, 0x8b, 0xa8),     // red
            error_bg: Color::Rgb(0x31, 0x32, 0x44),     // surface0
        }
    }

    /// Load theme from a simple key=value file. Unknown or missing keys fall back to `mocha`.
    pub fn from_file(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        let mut theme = Self::mocha();

        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else {
                continue;
            };
            let (key, val) = (key.trim(), val.trim());
            if let Some(color) = Self::parse_color(val) {
                match key {
                    "text" => theme.text = color,
                    "muted" => theme.muted = color,
                    "title" => theme.title = color,
                    "border" => theme.border = color,
                    "header_bg" => theme.header_bg = color,
                    "header_fg" => theme.header_fg = color,
                    "status_bg" => theme.status_bg = color,
                    "status_fg" => theme.status_fg = color,
                    "highlight_fg" => theme.highlight_fg = color,
                    "avatar" => theme.avatar = color,
                    "active" => theme.active = color,
                    "inactive" => theme.inactive = color,
                    "error_fg" => theme.error_fg = color,
                    "error_bg" => theme.error_bg = color,
                    _ => {}
                }
            }
        }

        Some(theme)
    }

    /// Parse a color from hex ("#RRGGBB" or "RRGGBB") or "reset".
    fn parse_color(s: &str) -> Option<Color> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "reset" {
            return Some(Color::Reset);
        }
        let hex = lower.strip_prefix('#').unwrap_or(lower.as_str());
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Persist the theme to a config file in key=value format.
    pub fn write_file(&self, path: &Path) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# user-dashboard theme configuration\n");
        buf.push_str("# Colors: hex as #RRGGBB or RRGGBB, or 'reset'\n\n");

        fn color_to_str(c: Color) -> String {
            match c {
                Color::Rgb(r, g, b) => format!("#{:02X}{:02X}{:02X}", r, g, b),
                Color::Reset => "reset".to_string(),
                // Named colors get a rough hex approximation
                Color::Black => "#000000".to_string(),
                Color::Red => "#FF0000".to_string(),
                Color::Green => "#00FF00".to_string(),
                Color::Yellow => "#FFFF00".to_string(),
                Color::Blue => "#0000FF".to_string(),
                Color::Magenta => "#FF00FF".to_string(),
                Color::Cyan => "#00FFFF".to_string(),
                Color::Gray => "#B3B3B3".to_string(),
                Color::DarkGray => "#4D4D4D".to_string(),
                Color::LightRed => "#FF6666".to_string(),
                Color::LightGreen => "#66FF66".to_string(),
                Color::LightYellow => "#FFFF66".to_string(),
                Color::LightBlue => "#6666FF".to_string(),
                Color::LightMagenta => "#FF66FF".to_string(),
                Color::LightCyan => "#66FFFF".to_string(),
                Color::White => "#FFFFFF".to_string(),
                Color::Indexed(_) => "reset".to_string(),
            }
        }

        let entries = [
            ("text", self.text),
            ("muted", self.muted),
            ("title", self.title),
            ("border", self.border),
            ("header_bg", self.header_bg),
            ("header_fg", self.header_fg),
            ("status_bg", self.status_bg),
            ("status_fg", self.status_fg),
            ("highlight_fg", self.highlight_fg),
            ("avatar", self.avatar),
            ("active", self.active),
            ("inactive", self.inactive),
            ("error_fg", self.error_fg),
            ("error_bg", self.error_bg),
        ];
        for (k, v) in entries {
            let _ = writeln!(&mut buf, "{} = {}", k, color_to_str(v));
        }

        std::fs::write(path, buf)
    }

    /// Load the theme at `path`, writing the `mocha` defaults there first if
    /// the file does not exist yet.
    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::from_file(path).unwrap_or_else(Self::mocha);
        }
        let t = Self::mocha();
        if let Err(err) = t.write_file(path) {
            tracing::warn!(path = %path.display(), error = %err, "could not write default theme");
        }
        t
    }
}

/// State of one dashboard view. The derived user list is never stored here;
/// it is recomputed from the source snapshot and `query` when needed.
pub struct AppState {
    pub started_at: Instant,
    pub source: UserSource,
    pub query: String,
    pub input_mode: InputMode,
    pub selected: usize,
    /// Columns of the card grid at the last draw.
    pub columns: usize,
    /// Visible card rows at the last draw.
    pub rows_per_page: usize,
    pub theme: Theme,
    pub throbber: ThrobberState,
}

impl AppState {
    pub fn new(source: UserSource, theme: Theme) -> Self {
        Self {
            started_at: Instant::now(),
            source,
            query: String::new(),
            input_mode: InputMode::Normal,
            selected: 0,
            columns: 1,
            rows_per_page: 1,
            theme,
            throbber: ThrobberState::default(),
        }
    }

    /// Current snapshot of the fetch lifecycle.
    pub fn load_state(&self) -> LoadState {
        self.source.state()
    }

    /// How many users match the current query, or `None` until the fetch
    /// succeeded.
    pub fn visible_count(&self) -> Option<usize> {
        let state = self.load_state();
        apply_search(&state, &self.query).map(|users| users.len())
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
