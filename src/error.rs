use std::fmt;

#[derive(Debug)]
pub enum GeminiError {
    /// GEMINI_API_KEY missing or empty; detected before any network I/O.
    MissingCredential,
    /// The service answered but returned zero candidates.
    EmptyResponse,
    /// The candidate carried no inline image data; any text parts the model
    /// produced instead are carried along as an explanation.
    NoImageData(Option<String>),
    /// Catch-all for network, HTTP, deserialization and decode faults.
    GenerationFailed(String),
}

impl fmt::Display for GeminiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeminiError::MissingCredential => {
                write!(f, "GEMINI_API_KEY is not set; export it before running")
            }
            GeminiError::EmptyResponse => {
                write!(f, "the service returned no candidates")
            }
            GeminiError::NoImageData(explanation) => match explanation {
                Some(text) => write!(f, "no image data in response; the model said: {}", text),
                None => write!(f, "no image data in response"),
            },
            GeminiError::GenerationFailed(msg) => write!(f, "generation failed: {}", msg),
        }
    }
}

impl std::error::Error for GeminiError {}

pub type Result<T> = std::result::Result<T, GeminiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_image_data_surfaces_explanation() {
        let err = GeminiError::NoImageData(Some("I can't draw that".to_string()));
        assert!(err.to_string().contains("I can't draw that"));

        let bare = GeminiError::NoImageData(None);
        assert_eq!(bare.to_string(), "no image data in response");
    }

    #[test]
    fn generation_failed_passes_message_through() {
        let err = GeminiError::GenerationFailed("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
