use serde::Serialize;

/// Headline counters for the dashboard sidebar.
#[derive(Debug, Clone, Serialize)]
pub struct QuickStats {
    pub terms_available: usize,
    pub total_blogs: usize,
    pub summaries_created: usize,
}
