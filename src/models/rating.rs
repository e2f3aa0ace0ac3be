use serde::Serialize;

use crate::errors::ServiceOutcome;

/// How a blog's final rating was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingBreakdown {
    pub final_rating: u8,
    pub heuristic_rating: u8,
    pub polarity: f64,
    pub model: ServiceOutcome<u8>,
}

impl RatingBreakdown {
    pub fn model_rating(&self) -> Option<u8> {
        self.model.ready_value().copied()
    }
}
