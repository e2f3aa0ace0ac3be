pub mod alert_service;
pub mod blog_service;
pub mod glossary_service;
pub mod llm_service;
pub mod news_service;
pub mod rating_service;
pub mod response_cache;
pub mod sentiment_service;
pub mod summary_service;
