//! Gemini provider client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use cam_types::{AppError, AppResult};

use crate::wire::{GenerateContentRequest, GenerateContentResponse, Part};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Multimodal image model used for jersey composition.
pub const DEFAULT_MODEL: &str = "models/gemini-2.5-flash-image";

/// Backend capable of turning an ordered part list into a generated
/// response. The pipeline depends on this seam so tests can inject a
/// fake endpoint.
#[async_trait]
pub trait GenerateImage: Send + Sync {
    async fn generate_content(&self, parts: Vec<Part>) -> AppResult<GenerateContentResponse>;
}

/// Gemini `generateContent` client.
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (used to point tests at a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerateImage for GeminiClient {
    async fn generate_content(&self, parts: Vec<Part>) -> AppResult<GenerateContentResponse> {
        let request = GenerateContentRequest::from_parts(parts);
        debug!(model = %self.model, "submitting generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Provider(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Unauthorized,
                StatusCode::TOO_MANY_REQUESTS => AppError::RateLimitExceeded,
                _ => AppError::Provider(format!("API error ({}): {}", status, error_text)),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Provider(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_uses_model_and_base() {
        let client = GeminiClient::new("key".to_string())
            .with_base_url("http://127.0.0.1:9999/v1beta")
            .with_model("models/test-model");
        assert_eq!(
            client.endpoint(),
            "http://127.0.0.1:9999/v1beta/models/test-model:generateContent"
        );
    }

    #[test]
    fn test_default_endpoint() {
        let client = GeminiClient::new("key".to_string());
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-image:generateContent"
        );
    }
}
