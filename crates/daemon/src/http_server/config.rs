use std::net::SocketAddr;

use url::Url;

use common::path::BUCKETS_ROUTE;

#[derive(Debug, Clone)]
pub struct Config {
    // Listen address
    pub listen_addr: SocketAddr,
    // Where an operator should point their browser
    pub browse_url: Url,
    // log level for http tracing
    pub log_level: tracing::Level,
}

impl Config {
    pub fn new(listen_addr: SocketAddr, log_level: tracing::Level) -> Self {
        let browse_url = Url::parse(&format!("http://{}{}/", listen_addr, BUCKETS_ROUTE))
            .unwrap_or_else(|_| Url::parse("http://localhost/").expect("static URL must parse"));
        tracing::debug!(
            "Creating HTTP server Config: listen_addr={}, browse_url={}",
            listen_addr,
            browse_url
        );
        Self {
            listen_addr,
            browse_url,
            log_level,
        }
    }
}
