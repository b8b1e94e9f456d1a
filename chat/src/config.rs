use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 12800;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Read-only settings handed to the gateway once at startup.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub params: Option<GenerationParams>,
    /// Documents uploaded at startup and attached to every generation request.
    pub attachments: Vec<FileReference>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            params: Some(GenerationParams::default()),
            attachments: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GenerationParams {
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl From<&GenerationParams> for request::GenerationConfig {
    fn from(params: &GenerationParams) -> Self {
        Self {
            max_output_tokens: Some(params.max_output_tokens),
            temperature: Some(params.temperature),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference {
    pub uri: String,
    pub mime_type: String,
}
