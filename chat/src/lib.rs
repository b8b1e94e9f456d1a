pub mod config;
pub mod context;
pub mod error;
pub mod gateway;
pub mod prompt;
pub mod providers;

pub use config::{ChatConfig, FileReference, GenerationParams};
pub use error::ProviderError;
pub use gateway::{MISSING_API_KEY_NOTICE, ResponseGateway};
pub use prompt::{Prompt, PromptComposer};
pub use providers::{GenerationProvider, GenerationRequest};
