use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::errors::{AppError, ServiceOutcome};
use crate::models::{CreateSummary, DocumentType, SummaryRecord};
use crate::services::llm_service::LlmService;
use crate::store::RecordCollection;

pub const MIN_SUMMARY_CONTENT_CHARS: usize = 100;
pub const PREVIEW_CHARS: usize = 500;

pub fn build_summary_prompt(content: &str, doc_type: DocumentType) -> String {
    format!(
        r#"
You are an expert financial analyst specializing in document analysis.

Document Type: {doc_type}

Please provide a comprehensive summary of this financial document with the following structure:

1. **Executive Summary** (2-3 sentences)
2. **Key Financial Metrics** (bullet points of important numbers, ratios, or figures)
3. **Main Findings** (detailed insights and observations)
4. **Risk Factors** (if any are mentioned)
5. **Recommendations** (actionable insights for stakeholders)

Document Content:
{content}

Provide a clear, professional summary suitable for executives and investors.
"#,
        doc_type = doc_type.prompt_label(),
        content = content
    )
}

/// First 500 characters, with "..." appended when the content was cut.
pub fn content_preview(content: &str) -> String {
    if content.chars().count() > PREVIEW_CHARS {
        let head: String = content.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        content.to_string()
    }
}

/// Document summarization backed by the generative model
pub struct SummaryService {
    llm: Arc<LlmService>,
}

impl SummaryService {
    pub fn new(llm: Arc<LlmService>) -> Self {
        Self { llm }
    }

    pub async fn summarize(&self, content: &str, doc_type: DocumentType) -> ServiceOutcome<String> {
        match self.llm.generate(build_summary_prompt(content, doc_type)).await {
            Ok(summary) => ServiceOutcome::ready(summary),
            Err(e) => {
                warn!("Summary generation failed for {} document: {}", doc_type, e);
                e.into()
            }
        }
    }

    /// Validate, summarize and store. Nothing is stored unless the model
    /// produced a summary.
    pub async fn create(
        &self,
        summaries: &RecordCollection<SummaryRecord>,
        request: CreateSummary,
    ) -> Result<SummaryRecord, AppError> {
        let content = request.content.unwrap_or_default();
        let trimmed = content.trim();

        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "Please paste some content to summarize".to_string(),
            ));
        }
        if trimmed.chars().count() < MIN_SUMMARY_CONTENT_CHARS {
            return Err(AppError::Validation(format!(
                "Please provide more content for a meaningful summary (minimum {} characters)",
                MIN_SUMMARY_CONTENT_CHARS
            )));
        }

        let summary = self
            .summarize(&content, request.doc_type)
            .await
            .into_app_result()?;

        let title = request
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let doc_type = request.doc_type;
        let preview = content_preview(&content);

        let record = summaries.append(|id| SummaryRecord {
            id,
            title: title.unwrap_or_else(|| format!("Document {}", id)),
            doc_type,
            content_preview: preview,
            summary,
            created_at: Utc::now(),
        })?;

        info!("Created summary {} ({})", record.id, record.doc_type);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LlmError;
    use crate::services::llm_service::testing::{service_with, ScriptedProvider};
    use crate::store::MemorySlot;

    fn long_content() -> String {
        "Revenue grew 12% year over year to $4.2B while operating margin expanded to 18%. ".repeat(3)
    }

    fn setup(provider: Arc<ScriptedProvider>) -> (SummaryService, RecordCollection<SummaryRecord>) {
        let service = SummaryService::new(Arc::new(service_with(provider)));
        let summaries = RecordCollection::load("summaries", Arc::new(MemorySlot::new())).unwrap();
        (service, summaries)
    }

    #[test]
    fn test_prompt_uses_lowercase_label() {
        let prompt = build_summary_prompt("Cash rose.", DocumentType::IncomeStatement);
        assert!(prompt.contains("Document Type: income statement"));
        assert!(prompt.contains("5. **Recommendations**"));
        assert!(prompt.contains("Document Content:\nCash rose.\n"));
    }

    #[test]
    fn test_content_preview() {
        let short = "a".repeat(500);
        assert_eq!(content_preview(&short), short);

        let long = "é".repeat(501);
        let preview = content_preview(&long);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 503);
    }

    #[tokio::test]
    async fn test_create_stores_summary() {
        let provider = Arc::new(ScriptedProvider::replying("1. **Executive Summary** Strong quarter."));
        let (service, summaries) = setup(provider.clone());

        let record = service
            .create(
                &summaries,
                CreateSummary {
                    title: None,
                    doc_type: DocumentType::FinancialStatement,
                    content: Some(long_content()),
                },
            )
            .await
            .unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.title, "Document 1");
        assert_eq!(record.summary, "1. **Executive Summary** Strong quarter.");
        assert_eq!(record.content_preview, long_content());
        assert_eq!(summaries.len(), 1);
        assert!(provider.prompts()[0].contains("Document Type: financial statement"));
    }

    #[tokio::test]
    async fn test_short_content_is_rejected_without_model_call() {
        let provider = Arc::new(ScriptedProvider::replying("unused"));
        let (service, summaries) = setup(provider.clone());

        let result = service
            .create(
                &summaries,
                CreateSummary {
                    title: Some("Memo".to_string()),
                    doc_type: DocumentType::General,
                    content: Some("x".repeat(99)),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(summaries.len(), 0);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_content_is_rejected() {
        let (service, summaries) = setup(Arc::new(ScriptedProvider::new(vec![])));
        let result = service
            .create(&summaries, CreateSummary { content: Some("   ".to_string()), ..Default::default() })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(summaries.len(), 0);
    }

    #[tokio::test]
    async fn test_model_failure_creates_no_record() {
        let provider = Arc::new(ScriptedProvider::new(vec![Err(LlmError::Timeout)]));
        let (service, summaries) = setup(provider);

        let result = service
            .create(&summaries, CreateSummary { content: Some(long_content()), ..Default::default() })
            .await;

        assert!(matches!(result, Err(AppError::Unavailable(_))));
        assert_eq!(summaries.len(), 0);
        assert_eq!(summaries.next_id(), 1);
    }
}
