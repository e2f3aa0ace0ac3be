use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Kinds of financial document the summarizer knows how to frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    #[default]
    General,
    FinancialStatement,
    BalanceSheet,
    IncomeStatement,
    CashFlow,
    InvestmentReport,
    AuditReport,
    BusinessPlan,
}

impl DocumentType {
    pub const ALL: [DocumentType; 8] = [
        DocumentType::General,
        DocumentType::FinancialStatement,
        DocumentType::BalanceSheet,
        DocumentType::IncomeStatement,
        DocumentType::CashFlow,
        DocumentType::InvestmentReport,
        DocumentType::AuditReport,
        DocumentType::BusinessPlan,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::General => "General",
            DocumentType::FinancialStatement => "Financial Statement",
            DocumentType::BalanceSheet => "Balance Sheet",
            DocumentType::IncomeStatement => "Income Statement",
            DocumentType::CashFlow => "Cash Flow",
            DocumentType::InvestmentReport => "Investment Report",
            DocumentType::AuditReport => "Audit Report",
            DocumentType::BusinessPlan => "Business Plan",
        }
    }

    /// Label as it appears inside the analysis prompt.
    pub fn prompt_label(&self) -> String {
        self.label().to_lowercase()
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub id: u64,
    pub title: String,
    pub doc_type: DocumentType,
    pub content_preview: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

impl Record for SummaryRecord {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSummary {
    pub title: Option<String>,
    #[serde(default)]
    pub doc_type: DocumentType,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentTypeInfo {
    pub id: DocumentType,
    pub label: &'static str,
}
