//! Application-level configuration loading: listen address and GraphQL IDE toggle.

use std::{
    env, fs,
    io::ErrorKind,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "TICTACTOE_BACK_CONFIG_PATH";
/// Environment variables checked, in order, for a port override.
const PORT_ENVS: [&str; 2] = ["PORT", "SERVER_PORT"];
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    host: IpAddr,
    port: u16,
    playground: bool,
}

impl AppConfig {
    /// Load the configuration from disk and apply environment overrides.
    ///
    /// A missing or unreadable file falls back to the built-in defaults.
    pub fn load() -> Self {
        let config = Self::load_from(&resolve_config_path());
        let port_override = PORT_ENVS.iter().find_map(|name| env::var(name).ok());
        config.with_port_override(port_override.as_deref())
    }

    /// Load the configuration from `path` without looking at the environment.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        addr = %app_config.listen_addr(),
                        playground = app_config.playground,
                        "loaded config"
                    );
                    app_config
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

    /// Replace the port with `value` when it parses as a port number.
    pub fn with_port_override(mut self, value: Option<&str>) -> Self {
        let Some(value) = value else {
            return self;
        };

        match value.parse::<u16>() {
            Ok(port) => self.port = port,
            Err(err) => warn!(value, error = %err, "ignoring invalid port override"),
        }
        self
    }

    /// Address the HTTP server binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether `GET /graphql` serves the GraphiQL IDE.
    pub fn playground(&self) -> bool {
        self.playground
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            playground: true,
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    host: Option<IpAddr>,
    port: Option<u16>,
    playground: Option<bool>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = AppConfig::default();
        Self {
            host: value.host.unwrap_or(defaults.host),
            port: value.port.unwrap_or(defaults.port),
            playground: value.playground.unwrap_or(defaults.playground),
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
