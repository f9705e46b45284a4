use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // http server configuration
    /// address the browser UI is served on
    pub listen_addr: SocketAddr,

    // store configuration
    /// path to the store file, opened once for the
    ///  lifetime of the process
    pub db_path: PathBuf,
    /// how long to wait for the store's file lock
    ///  before giving up at startup
    pub open_timeout: Duration,

    // logging
    pub log_level: tracing::Level,
    /// Directory for log files (optional, logs to stdout only if not set)
    pub log_dir: Option<PathBuf>,
}
