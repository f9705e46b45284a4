use clap::Args;
use url::Url;

#[derive(Args, Debug, Clone)]
pub struct Health {
    /// Base URL of a running server (defaults to the configured host and port)
    #[arg(long)]
    pub remote: Option<Url>,
}

#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("state error: {0}")]
    State(#[from] boltview_daemon::state::StateError),
    #[error("invalid server URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Health {
    fn base_url(&self, listen_addr: std::net::SocketAddr) -> Result<Url, HealthError> {
        match &self.remote {
            Some(url) => Ok(url.clone()),
            None => Ok(Url::parse(&format!("http://{}", listen_addr))?),
        }
    }
}

async fn probe(client: &reqwest::Client, base: &Url, name: &str) -> String {
    let url = format!("{}/_status/{}", base.as_str().trim_end_matches('/'), name);
    match client.get(&url).send().await {
        Ok(resp) if resp.status().is_success() => format!("  {}: OK", name),
        Ok(resp) => format!("  {}: UNHEALTHY ({})", name, resp.status()),
        Err(_) => format!("  {}: NOT REACHABLE", name),
    }
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Health {
    type Error = HealthError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let config = ctx.config()?;
        let base = self.base_url(config.listen_addr())?;
        let client = reqwest::Client::new();

        let mut lines = Vec::new();

        lines.push("Config:".to_string());
        lines.push(format!("  store:        {}", config.db_path.display()));
        lines.push(format!("  listen addr:  {}", config.listen_addr()));

        lines.push(String::new());
        lines.push(format!("Server ({}):", base));
        lines.push(probe(&client, &base, "livez").await);
        lines.push(probe(&client, &base, "readyz").await);

        Ok(lines.join("\n"))
    }
}
