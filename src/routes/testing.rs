use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use crate::app::create_app;
use crate::services::alert_service::MarketAlertService;
use crate::services::blog_service::BlogService;
use crate::services::llm_service::testing::{service_with, ScriptedProvider};
use crate::services::news_service::testing::StaticNewsProvider;
use crate::services::rating_service::RatingService;
use crate::services::summary_service::SummaryService;
use crate::state::AppState;
use crate::store::{MemorySlot, RecordCollection, BLOGS_SLOT, SUMMARIES_SLOT};

/// In-memory state wired to scripted collaborators.
pub fn test_state(llm: Arc<ScriptedProvider>, news: Arc<StaticNewsProvider>) -> AppState {
    let llm = Arc::new(service_with(llm));
    let rating = Arc::new(RatingService::new(llm.clone()));

    AppState {
        blogs: Arc::new(RecordCollection::load(BLOGS_SLOT, Arc::new(MemorySlot::new())).unwrap()),
        summaries: Arc::new(
            RecordCollection::load(SUMMARIES_SLOT, Arc::new(MemorySlot::new())).unwrap(),
        ),
        blog_service: Arc::new(BlogService::new(rating)),
        summary_service: Arc::new(SummaryService::new(llm.clone())),
        alert_service: Arc::new(MarketAlertService::new(
            news,
            llm,
            10,
            Duration::from_secs(600),
        )),
    }
}

pub fn test_app(llm: Arc<ScriptedProvider>) -> Router {
    create_app(test_state(
        llm,
        Arc::new(StaticNewsProvider::with_headlines(Vec::new())),
    ))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send_raw(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send_raw(app, request).await;
    let json = serde_json::from_str(&body).unwrap_or(Value::String(body));
    (status, json)
}
