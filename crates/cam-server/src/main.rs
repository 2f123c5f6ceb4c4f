//! Camisola server binary

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cam_gemini::{AssetStore, GeminiClient, GenerateOptions, Generator};
use cam_server::AppState;
use cam_types::AppResult;

#[derive(Debug, Parser)]
#[command(name = "camisola", about = "Historical jersey photo compositor")]
struct Args {
    /// Config file path (default: ~/.camisola/settings.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind host override
    #[arg(long)]
    host: Option<String>,

    /// Bind port override
    #[arg(long)]
    port: Option<u16>,

    /// Assets root override (directory containing camisolas/ and bolas/)
    #[arg(long)]
    assets: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => cam_config::default_config_file()?,
    };
    let mut config = cam_config::load_config(&config_path).await?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(assets) = args.assets {
        config.assets.root = assets;
    }

    let catalog = cam_catalog::scan(&config.assets.jerseys_path(), &config.assets.balls_path())?;

    // The catalog endpoints work without a key; only generation needs it.
    let generator = match cam_config::resolve_api_key(&config) {
        Ok(api_key) => {
            let client =
                GeminiClient::new(api_key).with_model(config.generation.model.clone());
            Some(Arc::new(Generator::new(
                Arc::new(client),
                AssetStore::new(config.assets.root.clone()),
            )))
        }
        Err(e) => {
            warn!("{}; generation endpoint will be unavailable", e);
            None
        }
    };

    let options = GenerateOptions {
        timeout: Duration::from_millis(config.generation.timeout_ms),
        background: Some(config.assets.background.clone()),
    };

    let state = AppState::new(catalog, generator, options);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on http://{}", addr);

    axum::serve(listener, cam_server::app(state))
        .await
        .map_err(cam_types::AppError::Io)?;

    Ok(())
}
