use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{CreateSummary, DocumentType, DocumentTypeInfo, SummaryRecord};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fetch_summaries).post(create_summary))
        .route("/document-types", get(document_types))
        .route("/:id", get(get_summary))
}

/// POST /api/summaries
///
/// 503 when the model is temporarily unavailable, 502 when it fails outright.
/// No record is stored in either case.
pub async fn create_summary(
    State(state): State<AppState>,
    Json(data): Json<CreateSummary>,
) -> Result<(StatusCode, Json<SummaryRecord>), AppError> {
    info!("POST /api/summaries - Summarizing {} document", data.doc_type);
    let summary = state
        .summary_service
        .create(&state.summaries, data)
        .await
        .map_err(|e| {
            error!("Failed to create summary: {}", e);
            e
        })?;
    Ok((StatusCode::CREATED, Json(summary)))
}

pub async fn fetch_summaries(State(state): State<AppState>) -> Json<Vec<SummaryRecord>> {
    info!("GET /api/summaries - Fetching summary history");
    Json(state.summaries.newest_first())
}

pub async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<SummaryRecord>, AppError> {
    info!("GET /api/summaries/{} - Fetching summary", id);
    state.summaries.get(id).map(Json).ok_or(AppError::NotFound)
}

async fn document_types() -> Json<Vec<DocumentTypeInfo>> {
    Json(
        DocumentType::ALL
            .iter()
            .map(|doc_type| DocumentTypeInfo {
                id: *doc_type,
                label: doc_type.label(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use http::StatusCode;
    use serde_json::json;

    use crate::errors::LlmError;
    use crate::routes::testing::{get, post_json, send, test_app};
    use crate::services::llm_service::testing::ScriptedProvider;

    fn document() -> String {
        "Total assets rose to $12.4M, liabilities fell to $3.1M and shareholder equity improved. "
            .repeat(2)
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let app = test_app(Arc::new(ScriptedProvider::replying("**Executive Summary** Healthy.")));

        let request = json!({"title": "Q3 balance sheet", "doc_type": "balance_sheet", "content": document()});
        let (status, body) = send(app.clone(), post_json("/api/summaries", request)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 1);
        assert_eq!(body["doc_type"], "balance_sheet");
        assert_eq!(body["summary"], "**Executive Summary** Healthy.");

        let (_, body) = send(app.clone(), get("/api/summaries")).await;
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, body) = send(app, get("/api/summaries/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Q3 balance sheet");
    }

    #[tokio::test]
    async fn test_model_outage_is_service_unavailable() {
        let app = test_app(Arc::new(ScriptedProvider::new(vec![Err(LlmError::NetworkError(
            "connection reset".to_string(),
        ))])));

        let (status, _) = send(app.clone(), post_json("/api/summaries", json!({"content": document()}))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (_, body) = send(app, get("/api/summaries")).await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blocked_prompt_is_bad_gateway() {
        let app = test_app(Arc::new(ScriptedProvider::new(vec![Err(LlmError::Blocked(
            "SAFETY".to_string(),
        ))])));

        let (status, _) = send(app, post_json("/api/summaries", json!({"content": document()}))).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_short_document_is_bad_request() {
        let app = test_app(Arc::new(ScriptedProvider::new(vec![])));
        let (status, _) = send(app, post_json("/api/summaries", json!({"content": "Too short"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_document_types() {
        let app = test_app(Arc::new(ScriptedProvider::new(vec![])));
        let (status, body) = send(app, get("/api/summaries/document-types")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0], json!({"id": "general", "label": "General"}));
        assert_eq!(body.as_array().unwrap().len(), 8);
    }
}
