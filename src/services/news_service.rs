use async_trait::async_trait;

use crate::errors::NewsError;
use crate::models::Headline;

/// Trait for news providers
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Latest English business headlines, at most `limit` of them.
    ///
    /// Articles missing a title or description are not returned.
    async fn fetch_top_business_headlines(&self, limit: usize) -> Result<Vec<Headline>, NewsError>;
}
