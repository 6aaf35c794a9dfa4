use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gemimg::logger::{self, LoggerConfig};
use gemimg::{GeminiClient, GeminiConfig, ImageGenerationRequest};

/// Generate an image from a text prompt with the Gemini API.
#[derive(Debug, Parser)]
#[command(name = "gemimg", version, about)]
struct Cli {
    /// Text prompt for image generation
    prompt: String,

    /// Destination file path
    #[arg(short, long, default_value = "generated_image.png")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::init_with_config(LoggerConfig::new()) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match dotenv::dotenv() {
        Ok(_) => log::debug!(".env file loaded"),
        Err(_) => log::debug!("No .env file found, using system environment variables"),
    }

    let config = GeminiConfig::from_env();

    // The only non-zero exit: a missing credential, caught before any I/O.
    let client = match GeminiClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let request = ImageGenerationRequest::new(cli.prompt, cli.output);

    match client.image().generate(request).await {
        Ok(response) => {
            if let Some(text) = &response.text {
                println!("{}", text);
            }
            println!("Image saved to: {}", response.path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::SUCCESS
        }
    }
}
