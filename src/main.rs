mod config;
mod demo;
mod error;
mod handlers;
mod llm;
mod routes;
mod state;
mod translate;
mod utils;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

const CONFIG_FILE_NAMES: [&str; 3] = ["conf.yaml", "conf.yml", "conf.json"];

fn candidate_config_paths() -> Vec<PathBuf> {
    // Resolve relative to the executable as well as the working directory
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));

    let mut paths: Vec<PathBuf> = std::env::var("CONFIG_PATH")
        .ok()
        .map(PathBuf::from)
        .into_iter()
        .collect();
    paths.extend(CONFIG_FILE_NAMES.iter().map(PathBuf::from));
    if let Some(dir) = exe_dir {
        paths.extend(CONFIG_FILE_NAMES.iter().map(|name| dir.join(name)));
    }
    paths
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("llm_translator=debug,tower_http=debug")),
        )
        .init();

    let config_paths = candidate_config_paths();
    let config_path = config_paths
        .iter()
        .find(|path| {
            let exists = path.is_file();
            if !exists {
                debug!("No config at {}", path.display());
            }
            exists
        })
        .ok_or_else(|| anyhow::anyhow!("Could not find config file. Tried: {:?}", config_paths))?;

    // A config that exists but is invalid is fatal; no silent fallback.
    let config = Config::load(config_path)
        .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;
    info!("Loaded configuration from: {}", config_path.display());

    let addr = (config.system_config.host.clone(), config.system_config.port);
    let app_state = AppState::new(config)?;
    let app = routes::build_app(app_state);

    let listener = tokio::net::TcpListener::bind((addr.0.as_str(), addr.1))
        .await
        .with_context(|| format!("Failed to bind {}:{}", addr.0, addr.1))?;
    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
