use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{BlogRecord, CreateBlog, PublishedBlog};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fetch_blogs).post(publish_blog))
        .route("/:id", get(get_blog))
}

/// POST /api/blogs
///
/// Validates the post, rates it (model + local heuristic) and stores it.
pub async fn publish_blog(
    State(state): State<AppState>,
    Json(data): Json<CreateBlog>,
) -> Result<(StatusCode, Json<PublishedBlog>), AppError> {
    info!("POST /api/blogs - Publishing blog");
    let published = state
        .blog_service
        .publish(&state.blogs, data)
        .await
        .map_err(|e| {
            error!("Failed to publish blog: {}", e);
            e
        })?;
    Ok((StatusCode::CREATED, Json(published)))
}

pub async fn fetch_blogs(State(state): State<AppState>) -> Json<Vec<BlogRecord>> {
    info!("GET /api/blogs - Fetching all blogs");
    Json(state.blogs.newest_first())
}

pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<BlogRecord>, AppError> {
    info!("GET /api/blogs/{} - Fetching blog", id);
    state.blogs.get(id).map(Json).ok_or(AppError::NotFound)
}
