use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client;

use crate::{
    config::GeminiConfig,
    error::{GeminiError, Result},
    gemini::wire::{GenerateContentRequest, GenerateContentResponse, Part},
    models::{ImageGenerationRequest, ImageGenerationResponse},
};

/// Payload pulled out of a response: the first inline image part plus any
/// text parts the model produced around it.
#[derive(Debug)]
struct ExtractedImage {
    data: String,
    mime_type: String,
    text: Option<String>,
}

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    config: GeminiConfig,
}

impl ImageClient {
    pub fn new(client: Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    /// Sends the prompt, extracts the first inline image from the response
    /// and writes the decoded image to the requested path.
    ///
    /// The file is only touched after the payload has decoded cleanly, so a
    /// failed run never leaves a partial image behind.
    pub async fn generate(&self, request: ImageGenerationRequest) -> Result<ImageGenerationResponse> {
        let model_id = request.model_id.as_deref().unwrap_or(self.config.model());

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url(),
            model_id
        );
        let payload = GenerateContentRequest::from_prompt(&request.prompt);

        log::info!("Generating image with model: {}", model_id);
        log::debug!("POST {}", url);

        let api_key = self.config.api_key.as_deref().unwrap_or_default();
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GeminiError::GenerationFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::GenerationFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::GenerationFailed(e.to_string()))?;

        let extracted = extract_image(&response)?;

        if let Some(text) = &extracted.text {
            log::info!("Model commentary: {}", text);
        }

        let image_bytes = BASE64
            .decode(&extracted.data)
            .map_err(|e| GeminiError::GenerationFailed(format!("invalid base64 payload: {}", e)))?;

        persist_image(&image_bytes, &request.output_path)?;

        Ok(ImageGenerationResponse {
            path: request.output_path,
            mime_type: extracted.mime_type,
            model: model_id.to_string(),
            text: extracted.text,
        })
    }
}

/// Scans the first candidate's parts in order and selects the first one
/// carrying inline data. Text parts are collected either way so a refusal
/// can be shown to the user when no image came back.
fn extract_image(response: &GenerateContentResponse) -> Result<ExtractedImage> {
    let candidate = response.candidates.first().ok_or(GeminiError::EmptyResponse)?;

    let parts: &[Part] = candidate
        .content
        .as_ref()
        .map(|content| content.parts.as_slice())
        .unwrap_or_default();

    let mut texts = Vec::new();
    let mut image = None;

    for part in parts {
        match part {
            Part::Text { text } => texts.push(text.as_str()),
            Part::InlineData { inline_data } => {
                if image.is_none() {
                    image = Some(inline_data);
                }
            }
        }
    }

    let text = if texts.is_empty() {
        None
    } else {
        Some(texts.join("\n"))
    };

    match image {
        Some(inline_data) => Ok(ExtractedImage {
            data: inline_data.data.clone(),
            mime_type: inline_data.mime_type.clone(),
            text,
        }),
        None => Err(GeminiError::NoImageData(text)),
    }
}

/// Decodes the raw bytes as an image and saves it, overwriting any existing
/// file at the path. The format written is inferred from the path extension.
fn persist_image(bytes: &[u8], path: &Path) -> Result<()> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| GeminiError::GenerationFailed(format!("image decode failed: {}", e)))?;

    image
        .save(path)
        .map_err(|e| GeminiError::GenerationFailed(format!("failed to save image: {}", e)))?;

    log::info!("Image saved to: {}", path.display());
    Ok(())
}
