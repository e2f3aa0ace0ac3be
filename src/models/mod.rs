mod blog;
mod glossary;
mod news;
mod rating;
mod stats;
mod summary;

pub use blog::{BlogRecord, CreateBlog, PublishedBlog, DEFAULT_TAG};
pub use glossary::{GlossaryEntry, GlossaryLookup, GlossaryQuery};
pub use news::{AlertRecord, AlertView, Headline, MarketAlertsReport, Sentiment};
pub use rating::RatingBreakdown;
pub use stats::QuickStats;
pub use summary::{CreateSummary, DocumentType, DocumentTypeInfo, SummaryRecord};
