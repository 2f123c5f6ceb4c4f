use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationConfig {
    #[serde(default = "default_model")]
    pub model: String,
    /// Deadline for one generation call.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_model() -> String {
    "models/gemini-2.5-flash-image".to_string()
}

fn default_timeout_ms() -> u64 {
    60_000
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetsConfig {
    /// Directory that asset paths like `/camisolas/1994.png` resolve under.
    #[serde(default = "default_assets_root")]
    pub root: PathBuf,
    #[serde(default = "default_jerseys_dir")]
    pub jerseys_dir: String,
    #[serde(default = "default_balls_dir")]
    pub balls_dir: String,
    /// Fixed stadium background; absence at generation time is non-fatal.
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_assets_root() -> PathBuf {
    PathBuf::from("public")
}

fn default_jerseys_dir() -> String {
    "camisolas".to_string()
}

fn default_balls_dir() -> String {
    "bolas".to_string()
}

fn default_background() -> String {
    "/camisolas/estadio.png".to_string()
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: default_assets_root(),
            jerseys_dir: default_jerseys_dir(),
            balls_dir: default_balls_dir(),
            background: default_background(),
        }
    }
}

impl AssetsConfig {
    pub fn jerseys_path(&self) -> PathBuf {
        self.root.join(&self.jerseys_dir)
    }

    pub fn balls_path(&self) -> PathBuf {
        self.root.join(&self.balls_dir)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    /// Stored Gemini API key; the `GEMINI_API_KEY` env var wins over this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.generation.timeout_ms, 60_000);
        assert_eq!(config.generation.model, "models/gemini-2.5-flash-image");
        assert_eq!(config.assets.background, "/camisolas/estadio.png");
        assert_eq!(config.assets.jerseys_path(), PathBuf::from("public/camisolas"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = AppConfig {
            api_key: Some("test-key".to_string()),
            ..AppConfig::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let parsed: AppConfig = serde_yaml::from_str("server:\n  port: 9000\n").unwrap();
        assert_eq!(parsed.server.port, 9000);
        assert_eq!(parsed.server.host, "127.0.0.1");
        assert_eq!(parsed.generation.timeout_ms, 60_000);
    }
}
