use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::LlmError;

/// Trait for generative model providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a free-text completion for a prompt
    async fn generate_completion(&self, prompt: String) -> Result<String, LlmError>;

    fn model_name(&self) -> &str;
}

/// The single generative-model operation shared by rating, alert analysis
/// and summarization. Replies are unstructured text; callers parse them.
pub struct LlmService {
    provider: Arc<dyn LlmProvider>,
}

impl LlmService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        info!("Initializing LLM service with model: {}", provider.model_name());
        Self { provider }
    }

    /// Sends the prompt once and returns the trimmed reply.
    pub async fn generate(&self, prompt: String) -> Result<String, LlmError> {
        info!(
            "Generating completion (model: {}, prompt: {} chars)",
            self.provider.model_name(),
            prompt.chars().count()
        );

        match self.provider.generate_completion(prompt).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    warn!("Model {} returned an empty reply", self.provider.model_name());
                    return Err(LlmError::EmptyResponse);
                }
                Ok(text.to_string())
            }
            Err(e) => {
                warn!("Model call failed: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use parking_lot::Mutex;

    use super::*;

    /// Provider that replays canned replies and records the prompts it saw.
    pub struct ScriptedProvider {
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn replying(reply: &str) -> Self {
            Self::new(vec![Ok(reply.to_string())])
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().clone()
        }

        pub fn calls(&self) -> usize {
            self.prompts.lock().len()
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn generate_completion(&self, prompt: String) -> Result<String, LlmError> {
            self.prompts.lock().push(prompt);
            self.replies
                .lock()
                .pop_front()
                .unwrap_or(Err(LlmError::NetworkError("no scripted reply left".to_string())))
        }

        fn model_name(&self) -> &str {
            "scripted"
        }
    }

    pub fn service_with(provider: Arc<ScriptedProvider>) -> LlmService {
        LlmService::new(provider)
    }
}
