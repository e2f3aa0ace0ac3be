use axum::{routing::get, Router};
use tracing::info;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

async fn health() -> &'static str {
    info!("GET /health - Health check");
    "OK"
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use http::StatusCode;

    use crate::routes::testing::{get, send_raw, test_app};
    use crate::services::llm_service::testing::ScriptedProvider;

    #[tokio::test]
    async fn test_health() {
        let app = test_app(Arc::new(ScriptedProvider::new(vec![])));
        let (status, body) = send_raw(app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }
}
