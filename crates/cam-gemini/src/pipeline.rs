//! Generation pipeline
//!
//! Per-invocation lifecycle: `Idle → ResolvingAssets → Submitting →
//! {Success | Failed}`. Terminal states are final; a new call starts
//! fresh from `Idle`, there is no retry transition. Calls are independent
//! and reentrant; duplicate-submission dedup is the caller's concern.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use cam_catalog::{ImageRef, JerseyRecord};
use cam_types::{AppError, AppResult, EncodedImage};

use crate::assets::AssetStore;
use crate::client::GenerateImage;
use crate::prompt::build_prompt;
use crate::wire::Part;

/// Default generation deadline.
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Fixed stadium background asset.
pub const DEFAULT_BACKGROUND: &str = "/camisolas/estadio.png";

/// Lifecycle of one `generate` invocation, surfaced in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ResolvingAssets,
    Submitting,
    Success,
    Failed,
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub timeout: Duration,
    /// Best-effort background asset; `None` disables it entirely.
    pub background: Option<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            background: Some(DEFAULT_BACKGROUND.to_string()),
        }
    }
}

/// Composes a user photo with a selected jersey via the generation
/// backend.
pub struct Generator {
    backend: Arc<dyn GenerateImage>,
    assets: AssetStore,
}

impl Generator {
    pub fn new(backend: Arc<dyn GenerateImage>, assets: AssetStore) -> Self {
        Self { backend, assets }
    }

    /// Run the full pipeline: decode the subject photo, resolve assets,
    /// assemble the ordered part list, submit under the timeout, and
    /// return the generated image as a data URL.
    ///
    /// Mandatory failures abort with exactly one error; background and
    /// ball assets are best-effort and never fail the call.
    pub async fn generate(
        &self,
        subject: &str,
        jersey: &JerseyRecord,
        opts: &GenerateOptions,
    ) -> AppResult<String> {
        debug!(jersey = %jersey.name, phase = ?Phase::Idle, "generation requested");
        let result = self.run(subject, jersey, opts).await;
        match &result {
            Ok(_) => debug!(jersey = %jersey.name, phase = ?Phase::Success, "generation finished"),
            Err(e) => {
                debug!(jersey = %jersey.name, phase = ?Phase::Failed, error = %e, "generation failed")
            }
        }
        result
    }

    async fn run(
        &self,
        subject: &str,
        jersey: &JerseyRecord,
        opts: &GenerateOptions,
    ) -> AppResult<String> {
        debug!(phase = ?Phase::ResolvingAssets, "resolving request assets");

        let subject_image = EncodedImage::from_data_url(subject)?;

        let jersey_image = match &jersey.image {
            ImageRef::Path(path) => self.assets.resolve(path).await?,
            ImageRef::Inline(url) => EncodedImage::from_data_url(url).map_err(|e| {
                AppError::AssetResolution(format!("inline jersey image: {}", e))
            })?,
        };

        // Optional assets resolve concurrently; each failure is isolated
        // and absorbed here.
        let (background, ball) = futures::join!(
            self.resolve_optional(opts.background.as_deref(), "background"),
            self.resolve_optional(jersey.ball.as_deref(), "ball"),
        );

        subject_image.validate("subject")?;
        jersey_image.validate("jersey")?;

        let mut parts = vec![Part::image(&subject_image), Part::image(&jersey_image)];
        if let Some(image) = &background {
            parts.push(Part::image(image));
        }
        if let Some(image) = &ball {
            parts.push(Part::image(image));
        }
        parts.push(Part::text(build_prompt(jersey)));

        debug!(
            phase = ?Phase::Submitting,
            parts = parts.len(),
            timeout_ms = opts.timeout.as_millis() as u64,
            "submitting generation request"
        );

        let started = Instant::now();
        let response = match tokio::time::timeout(opts.timeout, self.backend.generate_content(parts))
            .await
        {
            Ok(result) => result?,
            // The in-flight call is abandoned, not cancelled; no retry.
            Err(_) => {
                return Err(AppError::Timeout {
                    elapsed_ms: started.elapsed().as_millis() as u64,
                })
            }
        };

        let inline = response
            .first_image_part()
            .ok_or(AppError::NoResultGenerated)?;

        Ok(inline.decode()?.to_data_url())
    }

    /// Best-effort fetch: a missing or unreadable optional asset is
    /// logged and treated as "proceed without".
    async fn resolve_optional(&self, path: Option<&str>, what: &str) -> Option<EncodedImage> {
        let path = path?;
        match self.assets.resolve(path).await {
            Ok(image) => Some(image),
            Err(e) => {
                warn!(asset = path, "{} image not found, continuing without it: {}", what, e);
                None
            }
        }
    }
}
