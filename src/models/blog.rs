use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::RatingBreakdown;
use crate::store::Record;

pub const DEFAULT_TAG: &str = "General Finance";

/// A published finance blog post. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogRecord {
    pub id: u64,
    pub user_name: String,
    pub title: String,
    pub content: String,
    pub tag: String,
    pub created_at: DateTime<Utc>,
    pub likes: u32,
    pub comments: u32,
    pub rating: u8,
}

impl Record for BlogRecord {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlog {
    pub user_name: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub tag: Option<String>,
}

/// Response body for a successful publish.
#[derive(Debug, Clone, Serialize)]
pub struct PublishedBlog {
    pub blog: BlogRecord,
    pub rating: RatingBreakdown,
}
