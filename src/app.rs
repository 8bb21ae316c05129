//! Application orchestration for one generation round.

use crate::ai::{ContentService, GeminiContentClient, GeminiImageClient, ImageGenerationService};
use crate::models::{ArticlePackage, ArticleRequest, Config};
use crate::{decode, export, prompts, render};
use crate::{Error, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Coordinates prompt composition, the two provider calls, decoding,
/// rendering, and export for a single request.
pub struct App {
    content: Box<dyn ContentService>,
    image_gen: Box<dyn ImageGenerationService>,
    output_dir: PathBuf,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub content: Box<dyn ContentService>,
    pub image_gen: Box<dyn ImageGenerationService>,
}

impl App {
    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and local harnesses
    /// that need to inject mocks.
    pub fn with_services(services: AppServices, output_dir: PathBuf) -> Self {
        Self {
            content: services.content,
            image_gen: services.image_gen,
            output_dir,
        }
    }

    /// Construct an app from environment configuration (`Config::from_env`).
    ///
    /// A missing API key fails here, before any request can be issued.
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;

        fs::create_dir_all(&config.output_dir)?;
        info!("Output directory: {}", config.output_dir.display());

        // Reuse one HTTP connection pool across provider clients.
        let http_client = reqwest::Client::new();

        info!(
            "Content model: {}, image model: {}",
            config.content_model, config.image_model
        );

        let content = Box::new(GeminiContentClient::new_with_client(
            config.gemini_api_key.clone(),
            config.content_model,
            http_client.clone(),
        ));
        let image_gen = Box::new(GeminiImageClient::new_with_client(
            config.gemini_api_key,
            config.image_model,
            http_client,
        ));

        Ok(Self::with_services(
            AppServices { content, image_gen },
            config.output_dir,
        ))
    }

    /// Generate the article package for a request.
    ///
    /// An empty topic is rejected before anything touches the network. The
    /// content and image calls are issued together and joined; if either
    /// fails the whole round fails and no partial result is produced.
    pub async fn generate(&self, request: &ArticleRequest) -> Result<ArticlePackage> {
        if request.topic.trim().is_empty() {
            return Err(Error::Validation("Please enter a topic.".to_string()));
        }

        let content_prompt = prompts::content_prompt(request);
        let image_prompt = prompts::image_prompt(request);

        info!("Generating article and hero image for \"{}\"", request.topic);

        let ticker = render::spawn_status_ticker();
        let outcome = tokio::try_join!(
            self.content.generate_article_text(&content_prompt),
            self.image_gen.generate_image(&image_prompt),
        );
        ticker.abort();

        let (raw_text, image_bytes) = outcome?;
        let article = decode::parse_article(&raw_text)?;

        Ok(ArticlePackage::new(article, image_bytes))
    }

    /// Run one round: generate, render to the terminal, export files.
    pub async fn run(&self, request: &ArticleRequest) -> Result<()> {
        let package = self.generate(request).await?;

        render::render_article(&package);

        let text_path = export::save_article_text(&self.output_dir, &package)?;
        let image_path = export::save_article_image(&self.output_dir, &package)?;
        let preview_path = export::save_article_preview(&self.output_dir, &package)?;

        info!("Saved article to {}", text_path.display());
        info!("Saved hero image to {}", image_path.display());
        info!("Saved preview to {}", preview_path.display());

        Ok(())
    }
}
