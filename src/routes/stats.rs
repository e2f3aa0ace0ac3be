use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::models::QuickStats;
use crate::services::glossary_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(quick_stats))
}

async fn quick_stats(State(state): State<AppState>) -> Json<QuickStats> {
    info!("GET /api/stats - Fetching quick stats");
    Json(QuickStats {
        terms_available: glossary_service::term_count(),
        total_blogs: state.blogs.len(),
        summaries_created: state.summaries.len(),
    })
}
