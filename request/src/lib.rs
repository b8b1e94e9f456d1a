use serde::{Deserialize, Serialize};

pub mod content;
pub mod generation_config;

pub use content::{Content, FileData, Part};
pub use generation_config::GenerationConfig;

/// Body of `POST /chat/`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Body of a Gemini `models/{model}:generateContent` call.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

#[derive(Default)]
pub struct GenerateContentRequestBuilder {
    parts: Vec<Part>,
    generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequestBuilder {
    pub fn file(mut self, file_uri: impl Into<String>, mime_type: impl Into<String>) -> Self {
        self.parts.push(Part::FileData {
            file_data: FileData {
                mime_type: mime_type.into(),
                file_uri: file_uri.into(),
            },
        });
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(Part::Text { text: text.into() });
        self
    }

    pub fn generation_config(mut self, generation_config: Option<GenerationConfig>) -> Self {
        self.generation_config = generation_config;
        self
    }

    /// All parts go into a single user turn, file references first.
    pub fn build(self) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(self.parts)],
            generation_config: self.generation_config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_request_deserializes_message() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"message": "What are your hours?"}"#).unwrap();
        assert_eq!(request.message, "What are your hours?");
    }

    #[test]
    fn chat_request_accepts_empty_message() {
        let request: ChatRequest = serde_json::from_str(r#"{"message": ""}"#).unwrap();
        assert!(request.message.is_empty());
    }

    #[test]
    fn generate_content_request_serializes_camel_case() {
        let request = GenerateContentRequest::builder()
            .file("https://files.example/abc", "application/pdf")
            .text("hello")
            .generation_config(Some(GenerationConfig {
                max_output_tokens: Some(12800),
                temperature: Some(0.5),
            }))
            .build();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [
                        {"fileData": {"mimeType": "application/pdf", "fileUri": "https://files.example/abc"}},
                        {"text": "hello"}
                    ]
                }],
                "generationConfig": {"maxOutputTokens": 12800, "temperature": 0.5}
            })
        );
    }

    #[test]
    fn generate_content_request_omits_missing_generation_config() {
        let request = GenerateContentRequest::builder().text("hi").build();
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("generationConfig").is_none());
    }
}
