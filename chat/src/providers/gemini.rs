use async_trait::async_trait;
use request::{GenerateContentRequest, GenerationConfig};
use response::{GenerateContentResponse, UploadFileResponse};
use tracing::{debug, error, info};

use super::{GenerationProvider, GenerationRequest};
use crate::config::FileReference;
use crate::error::ProviderError;
use crate::prompt::Prompt;

pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiProvider {
    http_client: reqwest::Client,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(http_client: reqwest::Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn generate_content_url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }

    fn upload_url(&self) -> String {
        format!("{}/upload/v1beta/files?uploadType=media", self.base_url)
    }

    /// Uploads `bytes` to the provider file store. Uploaded files are never deleted or reused.
    pub async fn upload_file(
        &self,
        api_key: &str,
        bytes: Vec<u8>,
        mime_type: &str,
    ) -> Result<FileReference, ProviderError> {
        info!("Uploading {} bytes ({}) to Gemini file store", bytes.len(), mime_type);

        let response = self
            .http_client
            .post(self.upload_url())
            .header(API_KEY_HEADER, api_key)
            .header("Content-Type", mime_type)
            .body(bytes)
            .send()
            .await?;

        let upload: UploadFileResponse = read_json(response).await?;
        info!("Uploaded file {} as {}", upload.file.name, upload.file.uri);

        Ok(FileReference {
            uri: upload.file.uri,
            mime_type: upload
                .file
                .mime_type
                .unwrap_or_else(|| mime_type.to_string()),
        })
    }
}

pub fn build_generate_content_request(
    prompt: &Prompt,
    generation_config: Option<GenerationConfig>,
) -> GenerateContentRequest {
    prompt
        .attachments
        .iter()
        .fold(GenerateContentRequest::builder(), |builder, file| {
            builder.file(&file.uri, &file.mime_type)
        })
        .text(&prompt.text)
        .generation_config(generation_config)
        .build()
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    let status = response.status();
    debug!("Gemini API response status: {}", status);

    let body = response.text().await?;
    if !status.is_success() {
        error!("Gemini API error: {} - {}", status, body);
        return Err(ProviderError::Api {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, ProviderError> {
        let body = build_generate_content_request(
            request.prompt,
            request.params.map(GenerationConfig::from),
        );

        info!("Sending request to Gemini API for model: {}", request.model);
        let response = self
            .http_client
            .post(self.generate_content_url(request.model))
            .header(API_KEY_HEADER, request.api_key)
            .json(&body)
            .send()
            .await?;

        let generated: GenerateContentResponse = read_json(response).await?;
        if let Some(usage) = &generated.usage_metadata {
            info!(
                "Usage: prompt_tokens: {}, candidates_tokens: {}, total_tokens: {}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        generated.text().ok_or(ProviderError::EmptyResponse)
    }
}
