use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::errors::AppError;
use crate::models::{BlogRecord, CreateBlog, PublishedBlog, DEFAULT_TAG};
use crate::services::rating_service::RatingService;
use crate::store::RecordCollection;

pub const MIN_BLOG_CONTENT_CHARS: usize = 50;

fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

pub struct BlogService {
    rating: Arc<RatingService>,
}

impl BlogService {
    pub fn new(rating: Arc<RatingService>) -> Self {
        Self { rating }
    }

    /// Validate, rate and append a blog post.
    pub async fn publish(
        &self,
        blogs: &RecordCollection<BlogRecord>,
        request: CreateBlog,
    ) -> Result<PublishedBlog, AppError> {
        let (Some(user_name), Some(title), Some(content)) = (
            required(request.user_name),
            required(request.title),
            required(request.content),
        ) else {
            return Err(AppError::Validation(
                "Please fill in all required fields (user_name, title, content)".to_string(),
            ));
        };

        if content.chars().count() < MIN_BLOG_CONTENT_CHARS {
            return Err(AppError::Validation(format!(
                "Blog content should be at least {} characters for proper rating",
                MIN_BLOG_CONTENT_CHARS
            )));
        }

        let tag = required(request.tag)
            .map(|t| t.trim().to_string())
            .unwrap_or_else(|| DEFAULT_TAG.to_string());

        let breakdown = self.rating.final_rating(&content).await;
        let rating = breakdown.final_rating;

        let blog = blogs.append(|id| BlogRecord {
            id,
            user_name: user_name.trim().to_string(),
            title: title.trim().to_string(),
            content,
            tag,
            created_at: Utc::now(),
            likes: 0,
            comments: 0,
            rating,
        })?;

        info!("Published blog {} by {} with rating {}", blog.id, blog.user_name, blog.rating);

        Ok(PublishedBlog {
            blog,
            rating: breakdown,
        })
    }
}
