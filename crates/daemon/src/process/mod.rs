pub mod utils;

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::timeout;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const FINAL_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

use crate::http_server;
use crate::{ServiceConfig, ServiceState};

/// Handle for gracefully shutting down the browser service.
pub struct ShutdownHandle {
    graceful_waiter: tokio::task::JoinHandle<()>,
    server: tokio::task::JoinHandle<()>,
    shutdown_tx: watch::Sender<()>,
}

impl ShutdownHandle {
    /// Block until the service shuts down (via signal or explicit shutdown).
    pub async fn wait(self) {
        let ShutdownHandle {
            graceful_waiter,
            mut server,
            shutdown_tx,
        } = self;
        let mut shutdown_rx = shutdown_tx.subscribe();

        tokio::select! {
            _ = graceful_waiter => {}
            _ = shutdown_rx.changed() => {}
            // server exited on its own (e.g. failed to bind)
            _ = &mut server => return,
        }

        if timeout(FINAL_SHUTDOWN_TIMEOUT, server).await.is_err() {
            tracing::error!(
                "Failed to shut down within {} seconds",
                FINAL_SHUTDOWN_TIMEOUT.as_secs()
            );
            std::process::exit(4);
        }
    }

    /// Trigger shutdown programmatically.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

/// Initialize logging, panic handler, and build info reporting.
/// Returns guards that must be kept alive for the duration of the program.
fn init_logging(
    service_config: &ServiceConfig,
) -> Vec<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::fmt::format::FmtSpan;

    let mut guards = Vec::new();

    let (stdout_writer, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    guards.push(stdout_guard);

    let stdout_env_filter = EnvFilter::builder()
        .with_default_directive(service_config.log_level.into())
        .from_env_lossy();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(stdout_writer)
        .with_filter(stdout_env_filter);

    if let Some(log_dir) = &service_config.log_dir {
        if let Err(e) = std::fs::create_dir_all(log_dir) {
            eprintln!(
                "Warning: Failed to create log directory {:?}: {}",
                log_dir, e
            );
        }

        let file_appender = tracing_appender::rolling::daily(log_dir, "boltview.log");
        let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);
        guards.push(file_guard);

        let file_env_filter = EnvFilter::builder()
            .with_default_directive(service_config.log_level.into())
            .from_env_lossy();

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(file_env_filter);

        tracing_subscriber::registry()
            .with(stdout_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry().with(stdout_layer).init();
    }

    utils::register_panic_logger();
    utils::report_build_info();

    guards
}

/// Open the store and build service state, exiting on error.
async fn create_state(service_config: &ServiceConfig) -> ServiceState {
    match ServiceState::from_config(service_config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("error creating server state: {}", e);
            std::process::exit(3);
        }
    }
}

/// Open the store and spawn the HTTP server, returning the state handle.
///
/// The store stays open until the server task finishes and the returned
/// state is dropped as well.
pub async fn start_service(service_config: &ServiceConfig) -> (ServiceState, ShutdownHandle) {
    let (graceful_waiter, shutdown_tx, shutdown_rx) = match utils::graceful_shutdown_blocker() {
        Ok(parts) => parts,
        Err(e) => {
            tracing::error!("failed to install signal handlers: {}", e);
            std::process::exit(2);
        }
    };
    let state = create_state(service_config).await;

    let listen_addr = service_config.listen_addr;
    let server_state = state.clone();
    let server_config = http_server::Config::new(listen_addr, service_config.log_level);
    let server = tokio::spawn(async move {
        if let Err(e) = http_server::run_app(server_config, server_state, shutdown_rx).await {
            tracing::error!("HTTP server error: {}", e);
        }
        tracing::info!("HTTP server stopped");
    });

    let handle = ShutdownHandle {
        graceful_waiter,
        server,
        shutdown_tx,
    };

    (state, handle)
}

/// Opens the store and serves the browser UI.
/// Blocks until a shutdown signal is received.
pub async fn spawn_service(service_config: &ServiceConfig) {
    let _guards = init_logging(service_config);
    let (state, handle) = start_service(service_config).await;
    handle.wait().await;

    // the server task has finished, so this is the last handle on the store
    drop(state);
    tracing::info!("store closed");
}
