use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub model_id: Option<String>,
    pub output_path: PathBuf,
}

impl ImageGenerationRequest {
    pub fn new(prompt: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            prompt: prompt.into(),
            model_id: None,
            output_path: output_path.into(),
        }
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }
}

#[derive(Debug)]
pub struct ImageGenerationResponse {
    /// Where the decoded image was written.
    pub path: PathBuf,
    /// Mime type reported by the service for the inline payload.
    pub mime_type: String,
    pub model: String,
    /// Text the model produced alongside the image, if any.
    pub text: Option<String>,
}
