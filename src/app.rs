use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{alerts, blogs, glossary, health, stats, summaries};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/glossary", glossary::router())
        .nest("/api/blogs", blogs::router())
        .nest("/api/summaries", summaries::router())
        .nest("/api/alerts", alerts::router())
        .nest("/api/stats", stats::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
