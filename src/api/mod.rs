//! HTTP API handlers and router assembly for the server binary.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::nav::{SiteData, SitePayload};
use crate::ui;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteData>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(site: SiteData) -> Self {
        Self {
            site: Arc::new(site),
            started_at: Instant::now(),
        }
    }
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/status", get(status_handler))
        // Site data for the client app
        .route("/api/site", get(site_handler))
        // Every other path is a server-rendered page
        .fallback(ui::page_handler)
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
    pub nav_entries: usize,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "medcenter-web",
        version: env!("MEDCENTER_VERSION"),
        git_sha: env!("MEDCENTER_GIT_SHA"),
        uptime_secs: state.started_at.elapsed().as_secs(),
        nav_entries: state.site.navigation.len(),
    })
}

/// GET /api/site - Site name, contact numbers and menu
pub async fn site_handler(State(state): State<AppState>) -> Json<SitePayload> {
    Json(SitePayload::from(state.site.as_ref()))
}
