use chat::context::{fetch_document, load_context_text};
use chat::providers::gemini::GeminiProvider;
use chat::{ChatConfig, FileReference, GenerationParams, PromptComposer, ResponseGateway};
use std::sync::Arc;
use tracing::{info, warn};

use crate::AppState;
use crate::settings::Settings;

/// Loads context, uploads the optional document and wires the gateway. Runs once per process.
pub async fn build_state(
    settings: &Settings,
    api_key: Option<String>,
) -> anyhow::Result<AppState> {
    let http_client = reqwest::Client::new();
    if api_key.is_none() {
        warn!(
            "{} is not set, chat requests will return the missing key notice",
            settings.api_key_env
        );
    }

    let context = load_context_text(&settings.context_file).await?;
    let composer = PromptComposer::new(context.as_deref(), settings.separator.as_str());

    let provider = GeminiProvider::new(http_client.clone(), &settings.base_url);
    let attachments =
        upload_document(&http_client, &provider, settings, api_key.as_deref()).await?;

    let params = settings.generation_params.then(|| GenerationParams {
        max_output_tokens: settings.max_output_tokens,
        temperature: settings.temperature,
    });

    let config = ChatConfig {
        api_key,
        model: settings.model.clone(),
        params,
        attachments,
    };
    info!(
        "Gateway configured for model {} with {} attachments",
        config.model,
        config.attachments.len()
    );

    Ok(AppState {
        gateway: ResponseGateway::new(Arc::new(provider), composer, config),
    })
}

async fn upload_document(
    http_client: &reqwest::Client,
    provider: &GeminiProvider,
    settings: &Settings,
    api_key: Option<&str>,
) -> anyhow::Result<Vec<FileReference>> {
    let Some(source) = settings.document.as_deref() else {
        return Ok(Vec::new());
    };
    let Some(api_key) = api_key else {
        warn!("Skipping upload of {}: API key not set", source);
        return Ok(Vec::new());
    };

    let bytes = fetch_document(http_client, source).await?;
    let file = provider
        .upload_file(api_key, bytes, &settings.document_mime_type)
        .await?;

    Ok(vec![file])
}
