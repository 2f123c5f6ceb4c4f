//! Configuration management module
//!
//! Handles loading and saving application configuration. The Gemini API
//! key is resolved from the `GEMINI_API_KEY` environment variable first,
//! falling back to the stored config.

mod storage;
pub mod types;

pub use storage::{load_config, save_config};
pub use types::*;

use cam_types::{AppError, AppResult};
use std::path::PathBuf;

/// Default config file location (`~/.camisola/settings.yaml`).
pub fn default_config_file() -> AppResult<PathBuf> {
    cam_utils::paths::config_file()
}

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Resolve the Gemini API key: environment first, stored config second.
///
/// A missing key is a configuration error at generation time, not at
/// startup; the catalog endpoints work without one.
pub fn resolve_api_key(config: &AppConfig) -> AppResult<String> {
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    config.api_key.clone().filter(|k| !k.is_empty()).ok_or_else(|| {
        AppError::Config(format!(
            "Gemini API key is not configured. Set {} or add api_key to settings.yaml. \
             Get a key from https://aistudio.google.com/app/apikey",
            API_KEY_ENV
        ))
    })
}
