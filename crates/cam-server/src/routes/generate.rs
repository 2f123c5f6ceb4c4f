//! POST /v1/generate endpoint
//!
//! Accepts a multipart form with a `photo` file and a `jersey` name field,
//! runs the generation pipeline, and returns the composite image as a
//! data URL.

use std::time::Instant;

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::info;
use uuid::Uuid;

use cam_types::images::SUPPORTED_IMAGE_TYPES;
use cam_types::EncodedImage;

use crate::middleware::error::{ApiErrorResponse, ApiResult};
use crate::state::AppState;
use crate::types::GenerateResponse;

struct Upload {
    photo: EncodedImage,
    jersey_name: String,
}

pub async fn generate_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<GenerateResponse>> {
    let request_id = Uuid::new_v4();
    let upload = read_upload(multipart).await?;

    let jersey = state.find_jersey(&upload.jersey_name).ok_or_else(|| {
        ApiErrorResponse::bad_request(format!("Unknown jersey '{}'", upload.jersey_name))
            .with_param("jersey")
    })?;

    let generator = state.generator.as_ref().ok_or_else(|| {
        ApiErrorResponse::bad_request(
            "Gemini API key is not configured; generation is unavailable",
        )
    })?;

    let started = Instant::now();
    let image = generator
        .generate(&upload.photo.to_data_url(), jersey, &state.options)
        .await
        .map_err(ApiErrorResponse::from)?;

    info!(
        %request_id,
        jersey = %jersey.name,
        latency_ms = started.elapsed().as_millis() as u64,
        "generation completed"
    );

    Ok(Json(GenerateResponse { image }))
}

/// Pull the photo file and jersey name out of the multipart form.
async fn read_upload(mut multipart: Multipart) -> ApiResult<Upload> {
    let mut photo: Option<EncodedImage> = None;
    let mut jersey_name: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiErrorResponse::bad_request(format!("Invalid multipart form: {}", e))
    })? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("photo") => {
                let mime = field
                    .content_type()
                    .map(str::to_string)
                    .ok_or_else(|| {
                        ApiErrorResponse::bad_request("photo field has no content type")
                            .with_param("photo")
                    })?;

                if !SUPPORTED_IMAGE_TYPES.contains(&mime.as_str()) {
                    return Err(ApiErrorResponse::bad_request(format!(
                        "Unsupported photo type '{}'",
                        mime
                    ))
                    .with_param("photo"));
                }

                let data = field.bytes().await.map_err(|e| {
                    ApiErrorResponse::bad_request(format!("Failed to read photo: {}", e))
                        .with_param("photo")
                })?;

                photo = Some(EncodedImage::new(data.to_vec(), mime));
            }
            Some("jersey") => {
                let name = field.text().await.map_err(|e| {
                    ApiErrorResponse::bad_request(format!("Failed to read jersey name: {}", e))
                        .with_param("jersey")
                })?;
                jersey_name = Some(name);
            }
            // Unknown fields are ignored so the form can evolve.
            _ => {}
        }
    }

    let photo = photo.ok_or_else(|| {
        ApiErrorResponse::bad_request("Missing 'photo' field").with_param("photo")
    })?;
    let jersey_name = jersey_name.ok_or_else(|| {
        ApiErrorResponse::bad_request("Missing 'jersey' field").with_param("jersey")
    })?;

    Ok(Upload { photo, jersey_name })
}
