use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::NewsError;
use crate::models::Headline;
use crate::services::news_service::NewsProvider;

const NEWSAPI_TOP_HEADLINES_URL: &str = "https://newsapi.org/v2/top-headlines";

/// NewsAPI provider for top business headlines
pub struct NewsApiProvider {
    api_key: String,
    client: Client,
}

impl NewsApiProvider {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, NewsError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NewsError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { api_key, client })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsApiResponse {
    status: String,
    message: Option<String>,
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsApiArticle {
    title: Option<String>,
    description: Option<String>,
}

#[async_trait]
impl NewsProvider for NewsApiProvider {
    async fn fetch_top_business_headlines(&self, limit: usize) -> Result<Vec<Headline>, NewsError> {
        info!("Fetching top business headlines from NewsAPI (limit: {})", limit);

        let page_size = limit.to_string();
        let response = self
            .client
            .get(NEWSAPI_TOP_HEADLINES_URL)
            .header("X-Api-Key", &self.api_key)
            .query(&[
                ("category", "business"),
                ("language", "en"),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("NewsAPI request failed: {}", e);
                if e.is_timeout() {
                    NewsError::Timeout
                } else {
                    NewsError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| NewsError::Network(e.to_string()))?;

        let headlines = parse_headlines(&raw).map_err(|e| {
            error!("NewsAPI error (HTTP {}): {}", status, e);
            e
        })?;

        info!("Fetched {} headlines from NewsAPI", headlines.len());
        Ok(headlines)
    }
}

/// Parses a NewsAPI body. Error bodies carry `"status": "error"` and a message.
fn parse_headlines(raw: &str) -> Result<Vec<Headline>, NewsError> {
    let body: NewsApiResponse =
        serde_json::from_str(raw).map_err(|e| NewsError::Parse(e.to_string()))?;

    if body.status == "error" {
        return Err(NewsError::Api(
            body.message.unwrap_or_else(|| "Unknown error".to_string()),
        ));
    }

    Ok(body
        .articles
        .into_iter()
        .filter_map(|article| {
            let title = article.title.filter(|t| !t.trim().is_empty())?;
            let description = article.description.filter(|d| !d.trim().is_empty())?;
            Some(Headline { title, description })
        })
        .collect())
}
