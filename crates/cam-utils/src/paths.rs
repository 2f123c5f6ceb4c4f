//! OS-specific path resolution for configuration files

use cam_types::{AppError, AppResult};
use std::path::PathBuf;

/// Get the configuration directory
///
/// Priority:
/// 1. Runtime override via `CAMISOLA_ENV` environment variable: `~/.camisola-{env}/`
/// 2. Development mode (debug builds): `~/.camisola-dev/`
/// 3. Production mode (release builds): `~/.camisola/`
pub fn config_dir() -> AppResult<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| AppError::Config("Could not determine home directory".to_string()))?;

    // Runtime override via environment variable (for testing)
    if let Ok(env_suffix) = std::env::var("CAMISOLA_ENV") {
        return Ok(home.join(format!(".camisola-{}", env_suffix)));
    }

    #[cfg(debug_assertions)]
    let dir = home.join(".camisola-dev");

    #[cfg(not(debug_assertions))]
    let dir = home.join(".camisola");

    Ok(dir)
}

/// Get the configuration file path
pub fn config_file() -> AppResult<PathBuf> {
    Ok(config_dir()?.join("settings.yaml"))
}
