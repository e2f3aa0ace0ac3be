use axum::extract::{Path, Query};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::errors::AppError;
use crate::models::{GlossaryEntry, GlossaryQuery};
use crate::services::glossary_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(search_terms))
        .route("/popular", get(popular_terms))
        .route("/terms/:term", get(get_term))
}

/// GET /api/glossary
///
/// Without `q` every term is returned; with `q` the lookup result
/// (exact match, or up to 5 partial matches plus the total count).
async fn search_terms(Query(params): Query<GlossaryQuery>) -> Response {
    match params.q.filter(|q| !q.trim().is_empty()) {
        Some(q) => {
            info!("GET /api/glossary?q={} - Looking up term", q);
            let lookup = glossary_service::lookup(&q);
            info!(
                "Glossary lookup '{}': {} matches (exact: {}, truncated: {})",
                lookup.query,
                lookup.total_matches,
                lookup.exact,
                lookup.truncated()
            );
            Json(lookup).into_response()
        }
        None => {
            info!("GET /api/glossary - Fetching all terms");
            Json(glossary_service::all_terms()).into_response()
        }
    }
}

async fn popular_terms() -> Json<Vec<GlossaryEntry>> {
    info!("GET /api/glossary/popular - Fetching popular terms");
    Json(glossary_service::popular_terms())
}

async fn get_term(Path(term): Path<String>) -> Result<Json<GlossaryEntry>, AppError> {
    info!("GET /api/glossary/terms/{} - Fetching term", term);
    glossary_service::find(&term)
        .map(Json)
        .ok_or(AppError::NotFound)
}
