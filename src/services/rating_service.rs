use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::ServiceOutcome;
use crate::models::RatingBreakdown;
use crate::services::llm_service::LlmService;
use crate::services::sentiment_service;

/// Build the reviewer prompt asking the model for a single 1-5 integer
pub fn build_rating_prompt(content: &str) -> String {
    format!(
        "You are an expert finance content reviewer.\n\
         Rate the following blog on a scale of 1 to 5 based on:\n\
         - Relevance to finance topics\n\
         - Depth, clarity, grammar, coherence\n\n\
         *Only return a single integer (1 to 5)*.\n\n\
         Content:\n{}",
        content
    )
}

/// Parse the model's reply; anything but a bare integer in 1..=5 is rejected.
pub fn parse_model_rating(reply: &str) -> ServiceOutcome<u8> {
    match reply.trim().parse::<i64>() {
        Ok(n) if (1..=5).contains(&n) => ServiceOutcome::ready(n as u8),
        Ok(n) => ServiceOutcome::failed(format!("model rating {} is outside 1-5", n)),
        Err(_) => ServiceOutcome::failed(format!(
            "model reply is not an integer: {:?}",
            reply.chars().take(40).collect::<String>()
        )),
    }
}

/// Weights the model judgment 4:1 against the local heuristic.
///
/// Without a model rating the heuristic rating is returned unchanged.
pub fn combine_ratings(model_rating: Option<u8>, heuristic_rating: u8) -> u8 {
    match model_rating {
        Some(m) if m > 0 => {
            let weighted = 4 * u32::from(m) + u32::from(heuristic_rating);
            // round(weighted / 5); the remainder is never exactly one half
            let rounded = (weighted + 2) / 5;
            rounded.clamp(1, 5) as u8
        }
        _ => heuristic_rating,
    }
}

/// Model-assisted blog rating
pub struct RatingService {
    llm: Arc<LlmService>,
}

impl RatingService {
    pub fn new(llm: Arc<LlmService>) -> Self {
        Self { llm }
    }

    /// Ask the model for a rating. Never returns an error; failures are
    /// reported through the outcome.
    pub async fn rate_with_model(&self, content: &str) -> ServiceOutcome<u8> {
        match self.llm.generate(build_rating_prompt(content)).await {
            Ok(reply) => {
                let outcome = parse_model_rating(&reply);
                if let ServiceOutcome::Failed { reason } = &outcome {
                    warn!("Discarding model rating: {}", reason);
                }
                outcome
            }
            Err(e) => e.into(),
        }
    }

    pub async fn final_rating(&self, content: &str) -> RatingBreakdown {
        let model = self.rate_with_model(content).await;
        let polarity = sentiment_service::polarity(content);
        let heuristic_rating = sentiment_service::score_from_polarity(polarity);
        let breakdown = RatingBreakdown {
            final_rating: combine_ratings(model.ready_value().copied(), heuristic_rating),
            heuristic_rating,
            polarity,
            model,
        };

        info!(
            "Rated content: final {} (model {:?}, heuristic {}, polarity {:.3})",
            breakdown.final_rating,
            breakdown.model_rating(),
            heuristic_rating,
            polarity
        );

        breakdown
    }
}
