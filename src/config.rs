//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use url::Url;

use crate::client::DEFAULT_ENDPOINT;

/// Command-line arguments accepted by the `user-dashboard` binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "user-dashboard", version, about = "Browse and search users from a remote API")]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "URL",
        env = "USER_DASHBOARD_ENDPOINT",
        default_value = DEFAULT_ENDPOINT,
        help = "Endpoint returning the JSON array of users"
    )]
    pub endpoint: Url,
    #[arg(
        short = 'd',
        long = "initial-delay-ms",
        value_name = "MS",
        env = "USER_DASHBOARD_INITIAL_DELAY_MS",
        default_value_t = 800,
        help = "Minimum wait before the request is issued"
    )]
    pub initial_delay_ms: u64,
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "USER_DASHBOARD_THEME",
        help = "Theme file to load, created with defaults if missing (default: built-in theme)"
    )]
    pub theme: Option<PathBuf>,
    #[arg(
        long = "log-file",
        value_name = "FILE",
        env = "USER_DASHBOARD_LOG_FILE",
        help = "Write logs to this file; filter with RUST_LOG (default: no logging)"
    )]
    pub log_file: Option<PathBuf>,
}

/// Settings the application needs once arguments are parsed.
#[derive(Clone, Debug)]
pub struct Config {
    pub endpoint: Url,
    pub initial_delay: Duration,
    pub theme_path: Option<PathBuf>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            endpoint: cli.endpoint,
            initial_delay: Duration::from_millis(cli.initial_delay_ms),
            theme_path: cli.theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DEFAULT_INITIAL_DELAY;

    #[test]
    fn defaults_point_at_public_endpoint() {
        let cli = Cli::try_parse_from(["user-dashboard"]).unwrap();
        let config = Config::from(cli);
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.initial_delay, DEFAULT_INITIAL_DELAY);
        assert!(config.theme_path.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "user-dashboard",
            "--endpoint",
            "http://127.0.0.1:9000/people",
            "-d",
            "0",
            "--theme",
            "dash.conf",
        ])
        .unwrap();
        let config = Config::from(cli);
        assert_eq!(config.endpoint.path(), "/people");
        assert!(config.initial_delay.is_zero());
        assert_eq!(config.theme_path, Some(PathBuf::from("dash.conf")));
    }

    #[test]
    fn rejects_invalid_endpoint() {
        assert!(Cli::try_parse_from(["user-dashboard", "--endpoint", "not a url"]).is_err());
    }
}
