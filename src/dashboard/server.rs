//! HTTP server for the dashboard
//!
//! Serves the rendered page at `/`. Every request runs one full refresh
//! cycle against the external sources; the browser re-requests the page at
//! the configured interval via the meta-refresh tag, so no state needs to
//! survive between requests.

use crate::app::pipeline;
use crate::app::sources::forecast::ForecastClient;
use crate::app::sources::sheet::SheetClient;
use crate::config::Config;
use crate::dashboard::render;
use crate::{Error, Result};
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Shared state for the dashboard routes
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sheet: SheetClient,
    pub forecast: ForecastClient,
}

/// Build the dashboard router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/health", get(health))
        .with_state(state)
}

/// Bind and serve until the cancellation token fires
pub async fn serve(state: Arc<AppState>, shutdown: CancellationToken) -> Result<()> {
    let bind_addr = state.config.bind_addr.clone();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| Error::server(format!("cannot bind {bind_addr}: {e}")))?;

    info!("dashboard listening on {bind_addr}");

    axum::serve(listener, router(state).into_make_service())
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| Error::server(format!("server failed: {e}")))
}

/// Render one refresh cycle
///
/// This handler cannot fail: source failures degrade to fallback data inside
/// the pipeline, so the page always renders.
async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    let snapshot = pipeline::run_cycle(&state.sheet, &state.forecast, &state.config).await;
    Html(render::render_page(&snapshot, state.config.refresh_secs))
}

async fn health() -> &'static str {
    "ok"
}
