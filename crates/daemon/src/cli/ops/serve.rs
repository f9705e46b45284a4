use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;

use boltview_daemon::state::AppConfig;
use boltview_daemon::{spawn_service, ServiceConfig};

#[derive(Args, Debug, Clone)]
pub struct Serve {
    /// HTTP server port number (default from config, 9092)
    #[arg(long)]
    pub port: Option<u16>,

    /// Address to bind to (default from config, 127.0.0.1)
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Store file path (default from config, my.db)
    #[arg(long, env = "BOLTVIEW_DB")]
    pub db: Option<PathBuf>,

    /// Seconds to wait for the store's file lock
    #[arg(long)]
    pub open_timeout: Option<u64>,

    /// Directory for log files (logs to stdout only if not set)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("state error: {0}")]
    StateError(#[from] boltview_daemon::state::StateError),
}

impl Serve {
    /// Merge flags over the loaded config file.
    fn service_config(&self, config: &AppConfig) -> Result<ServiceConfig, ServeError> {
        let host = self.host.unwrap_or(config.host);
        let port = self.port.unwrap_or(config.port);
        let open_timeout = self
            .open_timeout
            .map(Duration::from_secs)
            .unwrap_or_else(|| config.open_timeout());

        Ok(ServiceConfig {
            listen_addr: SocketAddr::new(host, port),
            db_path: self.db.clone().unwrap_or_else(|| config.db_path.clone()),
            open_timeout,
            log_level: config.tracing_level()?,
            log_dir: self.log_dir.clone().or_else(|| config.log_dir.clone()),
        })
    }
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Serve {
    type Error = ServeError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let config = ctx.config()?;
        let service_config = self.service_config(&config)?;

        spawn_service(&service_config).await;
        Ok("server stopped".to_string())
    }
}
