use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A business headline as returned by the news provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    pub title: String,
    pub description: String,
}

impl Headline {
    /// Single-line form used in the analysis prompt.
    pub fn prompt_line(&self) -> String {
        format!("{}. {}", self.title, self.description)
    }
}

/// Direction of a headline's expected market impact
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

/// One market-moving headline as interpreted by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub headline: String,
    pub stock: String,
    pub impact: String,
    pub summary: String,
}

impl AlertRecord {
    pub fn impact_direction(&self) -> Sentiment {
        let impact = self.impact.to_lowercase();
        if impact.contains("positive") {
            Sentiment::Positive
        } else if impact.contains("negative") {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertView {
    #[serde(flatten)]
    pub alert: AlertRecord,
    pub direction: Sentiment,
}

impl From<AlertRecord> for AlertView {
    fn from(alert: AlertRecord) -> Self {
        let direction = alert.impact_direction();
        Self { alert, direction }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketAlertsReport {
    pub alerts: Vec<AlertView>,
    pub headlines_analyzed: usize,
    /// User-facing explanation when the list is empty or degraded
    pub notice: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl MarketAlertsReport {
    pub fn empty(headlines_analyzed: usize, notice: impl Into<String>) -> Self {
        Self {
            alerts: Vec::new(),
            headlines_analyzed,
            notice: Some(notice.into()),
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(impact: &str) -> AlertRecord {
        AlertRecord {
            headline: "h".to_string(),
            stock: "s".to_string(),
            impact: impact.to_string(),
            summary: "x".to_string(),
        }
    }

    #[test]
    fn test_impact_direction() {
        assert_eq!(alert("Positive 📈").impact_direction(), Sentiment::Positive);
        assert_eq!(alert("NEGATIVE").impact_direction(), Sentiment::Negative);
        assert_eq!(alert("Neutral").impact_direction(), Sentiment::Neutral);
        assert_eq!(alert("Mixed").impact_direction(), Sentiment::Neutral);
    }

    #[test]
    fn test_prompt_line() {
        let headline = Headline {
            title: "Stocks rally".to_string(),
            description: "Indexes closed higher".to_string(),
        };
        assert_eq!(headline.prompt_line(), "Stocks rally. Indexes closed higher");
    }
}
