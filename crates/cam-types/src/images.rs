//! Encoded image value type
//!
//! Images move through the system as raw bytes paired with a MIME type.
//! The browser-facing boundary speaks data URLs (`data:image/png;base64,...`),
//! so this type converts in both directions.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Image MIME types accepted at the upload boundary.
pub const SUPPORTED_IMAGE_TYPES: &[&str] =
    &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Raw image bytes plus their MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedImage {
    pub data: Vec<u8>,
    pub mime: String,
}

impl EncodedImage {
    pub fn new(data: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            data,
            mime: mime.into(),
        }
    }

    /// Parse a `data:{mime};base64,{payload}` string.
    ///
    /// Anything that does not split into exactly a `data:`-prefixed MIME
    /// header and a base64 payload is malformed input.
    pub fn from_data_url(url: &str) -> AppResult<Self> {
        let (header, payload) = url.split_once(";base64,").ok_or_else(|| {
            AppError::MalformedInput("expected a base64 data URL".to_string())
        })?;

        let mime = header.strip_prefix("data:").ok_or_else(|| {
            AppError::MalformedInput("data URL missing 'data:' prefix".to_string())
        })?;

        if mime.is_empty() {
            return Err(AppError::MalformedInput(
                "data URL has an empty MIME type".to_string(),
            ));
        }

        let data = BASE64.decode(payload).map_err(|e| {
            AppError::MalformedInput(format!("invalid base64 payload: {}", e))
        })?;

        Ok(Self::new(data, mime))
    }

    /// Re-encode as an embeddable data URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, BASE64.encode(&self.data))
    }

    pub fn base64_data(&self) -> String {
        BASE64.encode(&self.data)
    }

    /// Whether the MIME type is one we recognize as an image.
    pub fn has_known_mime(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// Mandatory images must carry non-empty bytes and a known MIME type.
    pub fn validate(&self, what: &str) -> AppResult<()> {
        if self.data.is_empty() {
            return Err(AppError::MalformedInput(format!(
                "{} image has no data",
                what
            )));
        }
        if !self.has_known_mime() {
            return Err(AppError::MalformedInput(format!(
                "{} image has unrecognized MIME type '{}'",
                what, self.mime
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_round_trip() {
        let img = EncodedImage::new(vec![1, 2, 3, 4], "image/png");
        let url = img.to_data_url();
        assert!(url.starts_with("data:image/png;base64,"));
        let parsed = EncodedImage::from_data_url(&url).unwrap();
        assert_eq!(parsed, img);
    }

    #[test]
    fn test_from_data_url_rejects_plain_string() {
        let err = EncodedImage::from_data_url("not a data url").unwrap_err();
        assert!(matches!(err, AppError::MalformedInput(_)));
    }

    #[test]
    fn test_from_data_url_rejects_missing_prefix() {
        let err = EncodedImage::from_data_url("image/png;base64,AQID").unwrap_err();
        assert!(matches!(err, AppError::MalformedInput(_)));
    }

    #[test]
    fn test_from_data_url_rejects_bad_base64() {
        let err = EncodedImage::from_data_url("data:image/png;base64,!!!").unwrap_err();
        assert!(matches!(err, AppError::MalformedInput(_)));
    }

    #[test]
    fn test_validate_rejects_empty_bytes() {
        let img = EncodedImage::new(vec![], "image/png");
        let err = img.validate("subject").unwrap_err();
        assert!(matches!(err, AppError::MalformedInput(_)));
    }

    #[test]
    fn test_validate_rejects_unknown_mime() {
        let img = EncodedImage::new(vec![1], "application/pdf");
        let err = img.validate("jersey").unwrap_err();
        assert!(matches!(err, AppError::MalformedInput(_)));
    }

    #[test]
    fn test_validate_accepts_known_image() {
        let img = EncodedImage::new(vec![1], "image/webp");
        assert!(img.validate("subject").is_ok());
    }
}
