use chat::config::{DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use chat::prompt::DEFAULT_SEPARATOR;
use chat::providers::gemini::GEMINI_API_BASE_URL;
use config::{Config, Environment, File, Source};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

pub const ENV_PREFIX: &str = "BANKBOT";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub model: String,
    pub separator: String,
    /// When false no generationConfig is sent and provider defaults apply.
    pub generation_params: bool,
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub context_file: PathBuf,
    /// Local path or http(s) URL of a document uploaded once at startup.
    pub document: Option<String>,
    pub document_mime_type: String,
    /// Name of the environment variable holding the provider API key.
    pub api_key_env: String,
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            model: DEFAULT_MODEL.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            generation_params: true,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            context_file: PathBuf::from("documents/context.txt"),
            document: None,
            document_mime_type: "application/pdf".to_string(),
            api_key_env: "GOOGLE_API".to_string(),
            base_url: GEMINI_API_BASE_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        Ok(config.try_deserialize()?)
    }

    /// Reads the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        non_empty_api_key(std::env::var(&self.api_key_env).ok())
    }
}

/// Empty values count as unset.
fn non_empty_api_key(value: Option<String>) -> Option<String> {
    value.filter(|key| !key.is_empty())
}

/// Layers `environment` over `file` over the defaults.
fn settings_from_sources<S>(file: S, environment: Environment) -> anyhow::Result<Settings>
where
    S: Source + Send + Sync + 'static,
{
    let config = Config::builder()
        .add_source(file)
        .add_source(environment.try_parsing(true))
        .build()?;

    Settings::from_config(config)
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = settings_from_sources(
        File::with_name("config").required(false),
        Environment::with_prefix(ENV_PREFIX),
    )?;
    info!(
        "Settings - model: {}, generation_params: {}, max_output_tokens: {}, temperature: {}, context_file: {}",
        settings.model,
        settings.generation_params,
        settings.max_output_tokens,
        settings.temperature,
        settings.context_file.display()
    );

    Ok(settings)
}
