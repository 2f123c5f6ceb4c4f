//! API request and response types

use serde::{Deserialize, Serialize};

use cam_catalog::{ImageRef, JerseyRecord};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,

    #[serde(rename = "type")]
    pub error_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl ErrorResponse {
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ApiError {
                message: message.into(),
                error_type: error_type.into(),
                param: None,
            },
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.error.param = Some(param.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// One catalog entry as exposed over the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JerseyInfo {
    pub name: String,
    pub description: String,
    pub year: i32,
    /// Asset path or inline data URL of the jersey image.
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball: Option<String>,
}

impl From<&JerseyRecord> for JerseyInfo {
    fn from(record: &JerseyRecord) -> Self {
        let image = match &record.image {
            ImageRef::Path(path) => path.clone(),
            ImageRef::Inline(url) => url.clone(),
        };
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            year: record.year,
            image,
            ball: record.ball.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated composite as a `data:{mime};base64,...` URL.
    pub image: String,
}
