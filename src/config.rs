//! Application-level configuration loading: storage location, bind address and dashboard timing.

use std::{
    env, fs,
    io::ErrorKind,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "SCOREBOARD_CONFIG_PATH";

const DEFAULT_DATABASE_FILE: &str = "scores.db";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SESSION_LABEL: &str = "default";
const DEFAULT_POLL_INTERVAL_MS: u64 = 5_000;
/// Dashboards never poll faster than this.
const MIN_POLL_INTERVAL_MS: u64 = 500;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    database_file: PathBuf,
    host: IpAddr,
    port: u16,
    session_label: String,
    poll_interval: Duration,
}

impl AppConfig {
    /// Load the configuration file, then apply environment overrides.
    ///
    /// Any problem with the file falls back to the built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        Self::from_file(&path).with_overrides(|key| env::var(key).ok())
    }

    fn from_file(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    info!(path = %path.display(), "loaded configuration file");
                    raw.into()
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Apply `DATABASE_FILE`, `HOST`, `PORT`/`SERVER_PORT` and `SESSION_LABEL` as read by `lookup`.
    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(file) = lookup("DATABASE_FILE").filter(|value| !value.is_empty()) {
            self.database_file = PathBuf::from(file);
        }

        if let Some(host) = lookup("HOST") {
            match host.parse::<IpAddr>() {
                Ok(addr) => self.host = addr,
                Err(err) => warn!(%host, error = %err, "ignoring unparseable HOST"),
            }
        }

        if let Some(port) = lookup("PORT").or_else(|| lookup("SERVER_PORT")) {
            match port.parse::<u16>() {
                Ok(value) => self.port = value,
                Err(err) => warn!(%port, error = %err, "ignoring unparseable PORT"),
            }
        }

        if let Some(label) = lookup("SESSION_LABEL").filter(|value| !value.trim().is_empty()) {
            self.session_label = label;
        }

        self
    }

    pub fn database_file(&self) -> &Path {
        &self.database_file
    }

    /// Address the HTTP server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Label stored with scores submitted without an explicit session.
    pub fn session_label(&self) -> &str {
        &self.session_label
    }

    /// Period at which the dashboard refreshes the leaderboard and the chart.
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_file: PathBuf::from(DEFAULT_DATABASE_FILE),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            session_label: DEFAULT_SESSION_LABEL.to_owned(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    database_file: Option<PathBuf>,
    host: Option<IpAddr>,
    port: Option<u16>,
    session_label: Option<String>,
    poll_interval_ms: Option<u64>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            database_file: value.database_file.unwrap_or(defaults.database_file),
            host: value.host.unwrap_or(defaults.host),
            port: value.port.unwrap_or(defaults.port),
            session_label: value
                .session_label
                .filter(|label| !label.trim().is_empty())
                .unwrap_or(defaults.session_label),
            poll_interval: value
                .poll_interval_ms
                .map(|ms| Duration::from_millis(ms.max(MIN_POLL_INTERVAL_MS)))
                .unwrap_or(defaults.poll_interval),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
