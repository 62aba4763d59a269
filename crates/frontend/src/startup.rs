use axum::Router;
use configs::FrontendConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::client::ApiClient;
use crate::routes::{self, FrontendState};

/// Router talking to the API at `cfg.api_url`.
pub fn build_app(cfg: &FrontendConfig) -> anyhow::Result<Router> {
    let api = ApiClient::new(&cfg.api_url)?;
    Ok(routes::build_router(FrontendState { api }, &cfg.public_dir))
}

/// Public entry: bind and run the frontend service.
pub async fn run(cfg: FrontendConfig) -> anyhow::Result<()> {
    common::env::ensure_public_dir(&cfg.public_dir).await;

    let app = build_app(&cfg)?;
    let addr = cfg.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, api_url = %cfg.api_url, "Frontend server is running on port {}", addr.port());
    axum::serve(listener, app).await?;
    Ok(())
}
