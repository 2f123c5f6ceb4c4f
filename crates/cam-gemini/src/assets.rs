//! Local asset resolution
//!
//! Catalog records reference assets by web-style paths such as
//! `/camisolas/1994.png`; the store maps them onto a directory on disk.

use std::path::{Component, Path, PathBuf};

use cam_types::{AppError, AppResult, EncodedImage};

pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Read an asset into bytes, with MIME derived from the extension.
    pub async fn resolve(&self, asset_path: &str) -> AppResult<EncodedImage> {
        let mime = cam_utils::mime::from_extension(asset_path).ok_or_else(|| {
            AppError::AssetResolution(format!("unsupported asset type: {}", asset_path))
        })?;

        let relative = asset_path.trim_start_matches('/');
        // Asset paths come from catalog records, but reject traversal anyway.
        if Path::new(relative)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(AppError::AssetResolution(format!(
                "invalid asset path: {}",
                asset_path
            )));
        }

        let full = self.root.join(relative);
        let data = tokio::fs::read(&full).await.map_err(|e| {
            AppError::AssetResolution(format!("failed to read {}: {}", full.display(), e))
        })?;

        if data.is_empty() {
            return Err(AppError::AssetResolution(format!(
                "asset is empty: {}",
                asset_path
            )));
        }

        Ok(EncodedImage::new(data, mime))
    }
}
