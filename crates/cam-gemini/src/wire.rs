//! Gemini `generateContent` wire types
//!
//! The shapes are dictated by the external API and serialized in its
//! camelCase convention.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use cam_types::{AppError, AppResult, EncodedImage};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl InlineData {
    /// Decode the base64 payload back into raw bytes.
    pub fn decode(&self) -> AppResult<EncodedImage> {
        let data = BASE64
            .decode(&self.data)
            .map_err(|e| AppError::Provider(format!("invalid base64 in response: {}", e)))?;
        Ok(EncodedImage::new(data, self.mime_type.clone()))
    }
}

/// One content part: either inline image data or instruction text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn image(image: &EncodedImage) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: image.mime.clone(),
                data: image.base64_data(),
            }),
            text: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            inline_data: None,
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Wrap an ordered part list in the single-content envelope the API
    /// expects, requesting an image response.
    pub fn from_parts(parts: Vec<Part>) -> Self {
        Self {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_modalities: vec!["IMAGE".to_string()],
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// First inline-image part of the first candidate, if any.
    pub fn first_image_part(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| part.inline_data.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let image = EncodedImage::new(vec![1, 2, 3], "image/png");
        let request =
            GenerateContentRequest::from_parts(vec![Part::image(&image), Part::text("prompt")]);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json["contents"][0]["parts"][0]["inlineData"]["mimeType"],
            "image/png"
        );
        assert_eq!(json["contents"][0]["parts"][1]["text"], "prompt");
        assert_eq!(json["generationConfig"]["responseModalities"][0], "IMAGE");
        // Absent fields are omitted, not serialized as null.
        assert!(json["contents"][0]["parts"][1]
            .as_object()
            .unwrap()
            .get("inlineData")
            .is_none());
    }

    #[test]
    fn test_first_image_part_skips_text_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "here you go" },
                        { "inlineData": { "mimeType": "image/png", "data": "AQID" } }
                    ]
                }
            }]
        }))
        .unwrap();

        let inline = response.first_image_part().unwrap();
        assert_eq!(inline.mime_type, "image/png");
        assert_eq!(inline.decode().unwrap().data, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_response_has_no_image_part() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(response.first_image_part().is_none());
    }
}
