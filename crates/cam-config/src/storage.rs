// Config persistence: YAML on disk, defaults written back when missing

use std::path::Path;

use cam_types::{AppError, AppResult};
use tracing::info;

use crate::types::AppConfig;

/// Load configuration from the given path.
///
/// A missing file yields the defaults and writes them back so the user
/// has something to edit.
pub async fn load_config(path: &Path) -> AppResult<AppConfig> {
    if !path.exists() {
        info!(path = %path.display(), "no config file found, writing defaults");
        let config = AppConfig::default();
        save_config(path, &config).await?;
        return Ok(config);
    }

    let contents = tokio::fs::read_to_string(path).await?;
    serde_yaml::from_str(&contents)
        .map_err(|e| AppError::Config(format!("failed to parse {}: {}", path.display(), e)))
}

/// Save configuration to the given path, creating parent directories.
pub async fn save_config(path: &Path, config: &AppConfig) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let yaml = serde_yaml::to_string(config)
        .map_err(|e| AppError::Config(format!("failed to serialize config: {}", e)))?;
    tokio::fs::write(path, yaml).await?;
    Ok(())
}
