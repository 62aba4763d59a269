use axum::Router;
use configs::ApiConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over `state`, serving static files from the configured directory.
pub fn build_app(state: ServerState, cfg: &ApiConfig) -> Router {
    routes::build_router(state, &cfg.public_dir, build_cors())
}

/// Serve `app` on an already-bound listener until the server stops.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app).await
}

/// Public entry: seed the store, bind, and run the API service.
pub async fn run(cfg: ApiConfig) -> Result<(), StartupError> {
    common::env::ensure_public_dir(&cfg.public_dir).await;

    let state = ServerState::seeded();
    let posts = state.posts.len().await;
    info!(posts, "post store seeded");
    let app = build_app(state, &cfg);

    let addr = cfg
        .bind_addr()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    info!(%addr, "API is running on port {}.", addr.port());
    serve(listener, app)
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    Ok(())
}
