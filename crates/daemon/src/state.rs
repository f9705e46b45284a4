use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "boltview";

/// Operator configuration, read from an optional TOML file.
/// Command line flags take precedence over anything set here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Port for the HTTP server
    #[serde(default = "default_port")]
    pub port: u16,
    /// Address to bind the HTTP server to
    #[serde(default = "default_host")]
    pub host: IpAddr,
    /// Path to the store file
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    /// How long to wait for the store's file lock at startup
    #[serde(default = "default_open_timeout_secs")]
    pub open_timeout_secs: u64,
    /// Default log level (RUST_LOG still overrides)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory for log files (logs to stdout only if not set)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_port() -> u16 {
    9092
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_db_path() -> PathBuf {
    PathBuf::from("my.db")
}

fn default_open_timeout_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            db_path: default_db_path(),
            open_timeout_secs: default_open_timeout_secs(),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from `config_path`, or fall back to defaults when
    /// no path is given. A path that is given but missing is an error.
    pub fn load(config_path: Option<&Path>) -> Result<Self, StateError> {
        let Some(path) = config_path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Err(StateError::MissingFile(path.to_path_buf()));
        }

        let config_toml = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;
        // surface a bad level at load time rather than at startup
        config.tracing_level()?;
        Ok(config)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn open_timeout(&self) -> Duration {
        Duration::from_secs(self.open_timeout_secs)
    }

    pub fn tracing_level(&self) -> Result<tracing::Level, StateError> {
        tracing::Level::from_str(&self.log_level)
            .map_err(|_| StateError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("missing config file: {0}")]
    MissingFile(PathBuf),

    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}
