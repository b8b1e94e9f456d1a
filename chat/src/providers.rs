use async_trait::async_trait;

use crate::config::GenerationParams;
use crate::error::ProviderError;
use crate::prompt::Prompt;

pub mod gemini;

pub struct GenerationRequest<'a> {
    pub api_key: &'a str,
    pub model: &'a str,
    pub prompt: &'a Prompt,
    pub params: Option<&'a GenerationParams>,
}

/// A text generation backend. One call, one reply, no retries.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, ProviderError>;
}
