use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::errors::ServiceOutcome;
use crate::models::{AlertRecord, AlertView, Headline, MarketAlertsReport};
use crate::services::llm_service::LlmService;
use crate::services::news_service::NewsProvider;
use crate::services::response_cache::{cache_key, ResponseCache};

/// Field separator the analysis prompt asks the model to use.
pub const ALERT_SEPARATOR: char = '—';

pub const NO_NEWS_NOTICE: &str =
    "Unable to fetch news. Please check your internet connection or try again later.";
pub const NO_ALERTS_NOTICE: &str = "No significant market-moving news at the moment.";

/// Build the market-impact analysis prompt for a set of headlines
pub fn build_alert_prompt(headlines: &[Headline]) -> String {
    let headline_lines = headlines
        .iter()
        .map(|h| format!("- {}", h.prompt_line()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
You are an expert stock market analyst and financial writer.
Below are recent business news headlines.
Your task:
1. Select only the headlines that are likely to move stock prices — up or down.
2. For each one, identify:
   - The affected *company or sector*
   - Whether the effect is *Positive*, *Negative*, or *Neutral*
   - A detailed, beginner-friendly explanation of why this matters for investors and how it will impact the stocks. Use emojis where appropriate.
Format each item like this:
- [Headline] — [Company/Sector] — [Impact Direction] — [Detailed Explanation]

Headlines:
{}
"#,
        headline_lines
    )
}

fn strip_segment(segment: &str) -> &str {
    segment.trim_matches(|c: char| c.is_whitespace() || c == '-' || c == '*' || c == ALERT_SEPARATOR)
}

/// Parse one line of analysis output; `None` when it is not a complete alert.
pub fn parse_alert_line(line: &str) -> Option<AlertRecord> {
    if line.trim().is_empty() || !line.contains(ALERT_SEPARATOR) {
        return None;
    }

    let parts: Vec<&str> = line.split(ALERT_SEPARATOR).map(strip_segment).collect();
    if parts.len() < 4 {
        return None;
    }

    Some(AlertRecord {
        headline: parts[0].to_string(),
        stock: parts[1].to_string(),
        impact: parts[2].to_string(),
        summary: parts[3].to_string(),
    })
}

/// Turn the model's line-oriented reply into alerts, in input order.
///
/// Lines that do not follow the requested format are skipped.
pub fn parse_alerts<S: AsRef<str>>(lines: &[S]) -> Vec<AlertRecord> {
    lines
        .iter()
        .filter_map(|line| parse_alert_line(line.as_ref()))
        .collect()
}

/// News fetch + model analysis, memoized for the cache TTL
pub struct MarketAlertService {
    news: Arc<dyn NewsProvider>,
    llm: Arc<LlmService>,
    page_size: usize,
    headline_cache: ResponseCache<Vec<Headline>>,
    analysis_cache: ResponseCache<Vec<String>>,
}

impl MarketAlertService {
    pub fn new(
        news: Arc<dyn NewsProvider>,
        llm: Arc<LlmService>,
        page_size: usize,
        cache_ttl: std::time::Duration,
    ) -> Self {
        Self {
            news,
            llm,
            page_size,
            headline_cache: ResponseCache::new("headlines", cache_ttl),
            analysis_cache: ResponseCache::new("alert-analysis", cache_ttl),
        }
    }

    /// Current alerts, served from cache while fresh.
    pub async fn current_alerts(&self) -> MarketAlertsReport {
        let headlines = match self.headlines().await {
            ServiceOutcome::Ready { value } => value,
            ServiceOutcome::Unavailable { reason } | ServiceOutcome::Failed { reason } => {
                warn!("News fetch failed: {}", reason);
                return MarketAlertsReport::empty(0, format!("{} ({})", NO_NEWS_NOTICE, reason));
            }
        };

        if headlines.is_empty() {
            return MarketAlertsReport::empty(0, NO_NEWS_NOTICE);
        }

        let lines = match self.analysis(&headlines).await {
            ServiceOutcome::Ready { value } => value,
            ServiceOutcome::Unavailable { reason } => {
                warn!("Alert analysis unavailable: {}", reason);
                return MarketAlertsReport::empty(
                    headlines.len(),
                    format!("Market analysis is temporarily unavailable ({})", reason),
                );
            }
            ServiceOutcome::Failed { reason } => {
                warn!("Alert analysis failed: {}", reason);
                return MarketAlertsReport::empty(
                    headlines.len(),
                    format!("Market analysis failed ({})", reason),
                );
            }
        };

        let alerts = parse_alerts(&lines);
        info!(
            "Parsed {} alerts from {} analysis lines ({} headlines)",
            alerts.len(),
            lines.len(),
            headlines.len()
        );

        if alerts.is_empty() {
            return MarketAlertsReport::empty(headlines.len(), NO_ALERTS_NOTICE);
        }

        MarketAlertsReport {
            alerts: alerts.into_iter().map(AlertView::from).collect(),
            headlines_analyzed: headlines.len(),
            notice: None,
            generated_at: Utc::now(),
        }
    }

    /// Discards memoized news and analysis, then recomputes.
    pub async fn refresh(&self) -> MarketAlertsReport {
        self.headline_cache.invalidate_all();
        self.analysis_cache.invalidate_all();
        self.current_alerts().await
    }

    async fn headlines(&self) -> ServiceOutcome<Vec<Headline>> {
        let key = format!("top-business:{}", self.page_size);
        if let Some(cached) = self.headline_cache.get(&key) {
            return ServiceOutcome::ready(cached);
        }

        match self.news.fetch_top_business_headlines(self.page_size).await {
            Ok(headlines) => {
                self.headline_cache.cleanup_expired();
                self.headline_cache.insert(key, headlines.clone());
                ServiceOutcome::ready(headlines)
            }
            Err(e) => e.into(),
        }
    }

    async fn analysis(&self, headlines: &[Headline]) -> ServiceOutcome<Vec<String>> {
        let lines: Vec<String> = headlines.iter().map(Headline::prompt_line).collect();
        let key = cache_key("alerts", &lines);
        if let Some(cached) = self.analysis_cache.get(&key) {
            return ServiceOutcome::ready(cached);
        }

        match self.llm.generate(build_alert_prompt(headlines)).await {
            Ok(reply) => {
                let lines: Vec<String> = reply.lines().map(str::to_string).collect();
                self.analysis_cache.cleanup_expired();
                self.analysis_cache.insert(key, lines.clone());
                ServiceOutcome::ready(lines)
            }
            Err(e) => e.into(),
        }
    }
}
