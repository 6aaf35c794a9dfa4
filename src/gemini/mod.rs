pub mod image_client;
pub mod wire;

use reqwest::Client;

use crate::{config::GeminiConfig, error::Result};

pub use image_client::ImageClient;

#[derive(Clone)]
pub struct GeminiClient {
    image_client: ImageClient,
}

impl GeminiClient {
    /// Validates the credential up front; no network I/O happens here.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::new();

        Ok(Self {
            image_client: ImageClient::new(client, config),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}
