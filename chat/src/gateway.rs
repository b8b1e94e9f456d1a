use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::ChatConfig;
use crate::error::ProviderError;
use crate::prompt::{Prompt, PromptComposer};
use crate::providers::{GenerationProvider, GenerationRequest};

pub const MISSING_API_KEY_NOTICE: &str =
    "API key not set. Please set it so that the chatbot can work.";

pub struct ResponseGateway {
    provider: Arc<dyn GenerationProvider>,
    composer: PromptComposer,
    config: ChatConfig,
}

impl ResponseGateway {
    pub fn new(
        provider: Arc<dyn GenerationProvider>,
        composer: PromptComposer,
        config: ChatConfig,
    ) -> Self {
        Self {
            provider,
            composer,
            config,
        }
    }

    pub fn composer(&self) -> &PromptComposer {
        &self.composer
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Returns the provider's reply to `message`, or the missing-key notice without calling it.
    pub async fn respond(&self, message: &str) -> Result<String, ProviderError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            warn!("API key not set, skipping provider call");
            return Ok(MISSING_API_KEY_NOTICE.to_string());
        };

        let prompt = Prompt {
            text: self.composer.compose(message),
            attachments: self.config.attachments.clone(),
        };
        debug!(
            "Composed prompt of {} bytes with {} attachments",
            prompt.text.len(),
            prompt.attachments.len()
        );

        let text = self
            .provider
            .generate(GenerationRequest {
                api_key,
                model: &self.config.model,
                prompt: &prompt,
                params: self.config.params.as_ref(),
            })
            .await?;
        info!("Received {} bytes of generated text", text.len());

        Ok(text)
    }
}
