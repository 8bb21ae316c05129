use super::client::GeminiHttpClient;
use crate::ai::ImageGenerationService;
use crate::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const SAMPLE_COUNT: u32 = 1;
const ASPECT_RATIO: &str = "16:9";
const OUTPUT_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Serialize)]
struct ImageRequest {
    instances: Vec<ImageInstance>,
    parameters: ImageParameters,
}

#[derive(Debug, Serialize)]
struct ImageInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageParameters {
    sample_count: u32,
    aspect_ratio: String,
    output_mime_type: String,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: String,
    #[serde(default)]
    mime_type: Option<String>,
}

/// Hero image generation backed by the Imagen `predict` endpoint.
///
/// Requests a single 16:9 JPEG and returns its decoded bytes.
pub struct GeminiImageClient {
    http: GeminiHttpClient,
}

impl GeminiImageClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(api_key, model, client),
        }
    }
}

#[cfg(test)]
super::impl_with_gemini_base_url!(GeminiImageClient);

#[async_trait]
impl ImageGenerationService for GeminiImageClient {
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>> {
        let request = ImageRequest {
            instances: vec![ImageInstance {
                prompt: prompt.to_string(),
            }],
            parameters: ImageParameters {
                sample_count: SAMPLE_COUNT,
                aspect_ratio: ASPECT_RATIO.to_string(),
                output_mime_type: OUTPUT_MIME_TYPE.to_string(),
            },
        };

        let response: ImageResponse = self.http.predict(&request).await?;

        let prediction = response
            .predictions
            .first()
            .ok_or_else(|| Error::AiProvider("No image data in Gemini response".to_string()))?;

        if let Some(mime_type) = &prediction.mime_type {
            tracing::debug!("Gemini returned image with mime_type: {}", mime_type);
        }

        use base64::Engine as _;
        base64::engine::general_purpose::STANDARD
            .decode(&prediction.bytes_base64_encoded)
            .map_err(|e| Error::AiProvider(format!("Failed to decode Gemini base64 image: {}", e)))
    }
}
