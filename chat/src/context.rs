use anyhow::Context as _;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Reads the context text embedded into the system prompt. A missing file means no context.
pub async fn load_context_text(path: &Path) -> anyhow::Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => {
            info!("Loaded {} bytes of context from {}", text.len(), path.display());
            Ok(Some(text))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No context file at {}", path.display());
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("failed to read context file {}", path.display())),
    }
}

/// Obtains the bytes of the context document from an `http(s)` URL or a local path.
pub async fn fetch_document(http_client: &reqwest::Client, source: &str) -> anyhow::Result<Vec<u8>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        info!("Fetching context document from {}", source);
        let response = http_client
            .get(source)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .with_context(|| format!("failed to fetch context document {source}"))?;
        let bytes = response.bytes().await?;
        return Ok(bytes.to_vec());
    }

    info!("Reading context document from {}", source);
    tokio::fs::read(source)
        .await
        .with_context(|| format!("failed to read context document {source}"))
}
