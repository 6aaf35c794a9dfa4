pub mod config;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;

pub use config::GeminiConfig;
pub use error::{GeminiError, Result};
pub use gemini::{GeminiClient, ImageClient};
pub use models::{ImageGenerationRequest, ImageGenerationResponse};
