use super::{ContentService, ImageGenerationService};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

const DEFAULT_ARTICLE_JSON: &str =
    "{\"title\":\"Mock Article\",\"content\":\"First paragraph.\\n\\nSecond paragraph.\"}";

// Minimal JPEG-looking payload (SOI marker, EOI marker).
const DEFAULT_IMAGE_BYTES: [u8; 6] = [0xFF, 0xD8, 0xFF, 0xE0, 0xFF, 0xD9];

/// Configurable [`ContentService`] stand-in for tests. Queued responses are
/// cycled; an armed failure takes precedence.
#[derive(Clone)]
pub struct MockContentClient {
    text_responses: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockContentClient {
    pub fn new() -> Self {
        Self {
            text_responses: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_text_response(self, response: String) -> Self {
        self.text_responses.lock().unwrap().push(response);
        self
    }

    pub fn with_failure(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockContentClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentService for MockContentClient {
    async fn generate_article_text(&self, _prompt: &str) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        if let Some(message) = self.failure.lock().unwrap().as_ref() {
            return Err(Error::AiProvider(message.clone()));
        }

        let responses = self.text_responses.lock().unwrap();
        if responses.is_empty() {
            Ok(DEFAULT_ARTICLE_JSON.to_string())
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

/// Configurable [`ImageGenerationService`] stand-in for tests.
#[derive(Clone)]
pub struct MockImageClient {
    image_responses: Arc<Mutex<Vec<Vec<u8>>>>,
    failure: Arc<Mutex<Option<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageClient {
    pub fn new() -> Self {
        Self {
            image_responses: Arc::new(Mutex::new(Vec::new())),
            failure: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_image_response(self, response: Vec<u8>) -> Self {
        self.image_responses.lock().unwrap().push(response);
        self
    }

    pub fn with_failure(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockImageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageClient {
    async fn generate_image(&self, _prompt: &str) -> Result<Vec<u8>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        if let Some(message) = self.failure.lock().unwrap().as_ref() {
            return Err(Error::AiProvider(message.clone()));
        }

        let responses = self.image_responses.lock().unwrap();
        if responses.is_empty() {
            Ok(DEFAULT_IMAGE_BYTES.to_vec())
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
