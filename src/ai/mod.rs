//! AI service integration for article and image generation
//!
//! Defines the service seams the application talks through and provides the
//! Gemini-backed implementations plus configurable mocks for tests.

pub mod gemini;
pub mod mime;
pub mod mock;

pub use gemini::{GeminiContentClient, GeminiImageClient};
pub use mock::{MockContentClient, MockImageClient};

use crate::Result;
use async_trait::async_trait;

/// Text-generation provider. Returns the raw text payload of the response;
/// decoding it into an article is the caller's concern.
#[async_trait]
pub trait ContentService: Send + Sync {
    async fn generate_article_text(&self, prompt: &str) -> Result<String>;
}

/// Image-generation provider. Returns the decoded bytes of the single
/// generated image.
#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>>;
}
