use std::path::PathBuf;

use axum::response::IntoResponse;
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found")]
    NotFound,
    #[error("Service unavailable: {0}")]
    Unavailable(String),
    #[error("External error: {0}")]
    External(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg).into_response(),
            AppError::External(msg) => (StatusCode::BAD_GATEWAY, msg).into_response(),
            AppError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response(),
        }
    }
}

/// Errors raised by the generative model boundary
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("network error: {0}")]
    NetworkError(String),
    #[error("request timed out")]
    Timeout,
    #[error("rate limited by model provider")]
    RateLimited,
    #[error("model API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("invalid model response: {0}")]
    InvalidResponse(String),
    #[error("model returned an empty response")]
    EmptyResponse,
    #[error("prompt blocked by model provider: {0}")]
    Blocked(String),
}

impl LlmError {
    /// Whether a later attempt could reasonably succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            LlmError::NetworkError(_) | LlmError::Timeout | LlmError::RateLimited => true,
            LlmError::ApiError { status, .. } => *status >= 500,
            LlmError::InvalidResponse(_) | LlmError::EmptyResponse | LlmError::Blocked(_) => false,
        }
    }
}

/// Errors raised by the news headlines boundary
#[derive(Debug, Error)]
pub enum NewsError {
    #[error("network error: {0}")]
    Network(String),
    #[error("news request timed out")]
    Timeout,
    #[error("news API error: {0}")]
    Api(String),
    #[error("failed to parse news response: {0}")]
    Parse(String),
}

impl NewsError {
    pub fn is_transient(&self) -> bool {
        matches!(self, NewsError::Network(_) | NewsError::Timeout)
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to (de)serialize {path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),
    #[error("environment variable {name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Result of a call to an external collaborator.
///
/// `Unavailable` means the service could not be reached or asked us to back
/// off; `Failed` means it answered with something unusable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ServiceOutcome<T> {
    Ready { value: T },
    Unavailable { reason: String },
    Failed { reason: String },
}

impl<T> ServiceOutcome<T> {
    pub fn ready(value: T) -> Self {
        ServiceOutcome::Ready { value }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        ServiceOutcome::Failed { reason: reason.into() }
    }

    pub fn ready_value(&self) -> Option<&T> {
        match self {
            ServiceOutcome::Ready { value } => Some(value),
            _ => None,
        }
    }

    /// Converts a non-ready outcome into the matching HTTP error.
    pub fn into_app_result(self) -> Result<T, AppError> {
        match self {
            ServiceOutcome::Ready { value } => Ok(value),
            ServiceOutcome::Unavailable { reason } => Err(AppError::Unavailable(reason)),
            ServiceOutcome::Failed { reason } => Err(AppError::External(reason)),
        }
    }
}

impl<T> From<LlmError> for ServiceOutcome<T> {
    fn from(err: LlmError) -> Self {
        if err.is_transient() {
            ServiceOutcome::Unavailable { reason: err.to_string() }
        } else {
            ServiceOutcome::Failed { reason: err.to_string() }
        }
    }
}

impl<T> From<NewsError> for ServiceOutcome<T> {
    fn from(err: NewsError) -> Self {
        if err.is_transient() {
            ServiceOutcome::Unavailable { reason: err.to_string() }
        } else {
            ServiceOutcome::Failed { reason: err.to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_classification() {
        assert!(LlmError::Timeout.is_transient());
        assert!(LlmError::RateLimited.is_transient());
        assert!(LlmError::ApiError { status: 503, message: "busy".into() }.is_transient());
        assert!(!LlmError::ApiError { status: 400, message: "bad".into() }.is_transient());
        assert!(!LlmError::EmptyResponse.is_transient());
    }

    #[test]
    fn test_outcome_from_llm_error() {
        let outcome: ServiceOutcome<u8> = LlmError::Timeout.into();
        assert!(matches!(outcome, ServiceOutcome::Unavailable { .. }));

        let outcome: ServiceOutcome<u8> = LlmError::InvalidResponse("junk".into()).into();
        assert!(matches!(outcome, ServiceOutcome::Failed { .. }));
    }

    #[test]
    fn test_outcome_into_app_result() {
        let ok: ServiceOutcome<u8> = ServiceOutcome::ready(4);
        assert_eq!(ok.into_app_result().unwrap(), 4);

        let down: ServiceOutcome<u8> = ServiceOutcome::Unavailable { reason: "down".into() };
        assert!(matches!(down.into_app_result(), Err(AppError::Unavailable(_))));

        let garbage: ServiceOutcome<u8> = ServiceOutcome::failed("garbage");
        assert!(matches!(garbage.into_app_result(), Err(AppError::External(_))));
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome: ServiceOutcome<u8> = ServiceOutcome::ready(3);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["value"], 3);
    }
}
