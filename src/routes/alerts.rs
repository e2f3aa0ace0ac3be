use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::info;

use crate::models::MarketAlertsReport;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(current_alerts))
        .route("/refresh", post(refresh_alerts))
}

/// GET /api/alerts
///
/// Market-moving headlines with stock and impact, cached for the configured TTL.
/// Upstream failures are reported in `notice`, never as an HTTP error.
async fn current_alerts(State(state): State<AppState>) -> Json<MarketAlertsReport> {
    info!("GET /api/alerts - Fetching market alerts");
    Json(state.alert_service.current_alerts().await)
}

async fn refresh_alerts(State(state): State<AppState>) -> Json<MarketAlertsReport> {
    info!("POST /api/alerts/refresh - Refreshing market alerts");
    Json(state.alert_service.refresh().await)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use http::StatusCode;

    use crate::app::create_app;
    use crate::routes::testing::{get, post_json, send, test_state};
    use crate::services::alert_service::NO_NEWS_NOTICE;
    use crate::services::llm_service::testing::ScriptedProvider;
    use crate::services::news_service::testing::{headline, StaticNewsProvider};

    const ANALYSIS: &str =
        "Chipmaker beats estimates — NVDA — Positive — Data-center demand keeps growing";

    #[tokio::test]
    async fn test_alerts_are_cached_until_refresh() {
        let llm = Arc::new(ScriptedProvider::new(vec![
            Ok(ANALYSIS.to_string()),
            Ok(ANALYSIS.to_string()),
        ]));
        let news = Arc::new(StaticNewsProvider::with_headlines(vec![headline(
            "Chipmaker beats estimates",
            "Quarterly revenue topped forecasts",
        )]));
        let app = create_app(test_state(llm.clone(), news.clone()));

        let (status, body) = send(app.clone(), get("/api/alerts")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["alerts"][0]["stock"], "NVDA");
        assert_eq!(body["alerts"][0]["direction"], "positive");
        assert!(body["notice"].is_null());

        send(app.clone(), get("/api/alerts")).await;
        assert_eq!(news.fetches(), 1);
        assert_eq!(llm.calls(), 1);

        let (status, _) = send(app, post_json("/api/alerts/refresh", serde_json::json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(news.fetches(), 2);
        assert_eq!(llm.calls(), 2);
    }

    #[tokio::test]
    async fn test_news_outage_is_reported_in_notice() {
        let llm = Arc::new(ScriptedProvider::new(vec![]));
        let news = Arc::new(StaticNewsProvider::failing("dns failure"));
        let app = create_app(test_state(llm.clone(), news));

        let (status, body) = send(app, get("/api/alerts")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["alerts"].as_array().unwrap().is_empty());
        assert!(body["notice"].as_str().unwrap().starts_with(NO_NEWS_NOTICE));
        assert_eq!(llm.calls(), 0);
    }
}
