use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, Part, Schema};
use crate::ai::ContentService;
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;

const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.95;

#[derive(Debug, Serialize)]
struct ContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: ContentGenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentGenerationConfig {
    response_mime_type: String,
    response_schema: Schema,
    temperature: f32,
    top_p: f32,
}

/// Article text generation backed by Gemini's `generateContent` endpoint,
/// constrained to return a `{title, content}` JSON object.
pub struct GeminiContentClient {
    http: GeminiHttpClient,
}

impl GeminiContentClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(api_key, model, client),
        }
    }

    fn article_schema() -> Schema {
        Schema::object(
            BTreeMap::from([
                (
                    "title",
                    Schema::string("The catchy title of the blog post."),
                ),
                (
                    "content",
                    Schema::string(
                        "The full content of the blog post, with paragraphs separated by double newlines.",
                    ),
                ),
            ]),
            vec!["title", "content"],
        )
    }

    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        response.candidates.first().and_then(|c| {
            c.content.parts.iter().find_map(|p| match p {
                Part::Text { text } => Some(text.clone()),
                Part::InlineData { .. } => None,
            })
        })
    }
}

#[cfg(test)]
super::impl_with_gemini_base_url!(GeminiContentClient);

#[async_trait]
impl ContentService for GeminiContentClient {
    async fn generate_article_text(&self, prompt: &str) -> Result<String> {
        let request = ContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::Text {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: ContentGenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: Self::article_schema(),
                temperature: TEMPERATURE,
                top_p: TOP_P,
            },
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        Self::extract_text(&response)
            .ok_or_else(|| Error::AiProvider("No text in Gemini content response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::gemini::test_support;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::Mock;
    use wiremock::{MockServer, ResponseTemplate};

    const DEFAULT_MODEL: &str = "gemini-2.5-flash";

    fn make_client(server: &MockServer, api_key: &str, model: &str) -> GeminiContentClient {
        GeminiContentClient::new(api_key.to_string(), model.to_string())
            .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_generate_article_text_returns_raw_payload() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{ "text": "{\"title\":\"T\",\"content\":\"C\"}" }]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", DEFAULT_MODEL);

        let raw = client.generate_article_text("write about rust").await.unwrap();
        assert_eq!(raw, "{\"title\":\"T\",\"content\":\"C\"}");
    }

    #[tokio::test]
    async fn test_request_carries_schema_and_sampling_parameters() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .and(body_string_contains("\"responseMimeType\":\"application/json\""))
            .and(body_string_contains("\"required\":[\"title\",\"content\"]"))
            .and(body_string_contains("\"temperature\":0.7"))
            .and(body_string_contains("\"topP\":0.95"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "{}" }] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", DEFAULT_MODEL);

        client.generate_article_text("prompt").await.unwrap();
    }

    #[tokio::test]
    async fn test_api_error_returns_ai_provider_error() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&server)
            .await;

        let client = make_client(&server, "bad-key", DEFAULT_MODEL);

        let err = client.generate_article_text("prompt").await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[tokio::test]
    async fn test_rejects_empty_candidates() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": []
            })))
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", DEFAULT_MODEL);
        let err = client.generate_article_text("prompt").await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[tokio::test]
    async fn test_strips_models_prefix_from_model_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "{}" }] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", "models/gemini-2.5-flash");

        client.generate_article_text("prompt").await.unwrap();
    }
}
