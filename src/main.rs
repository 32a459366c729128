use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use verkstad::config::{Cli, Config, default_config_path};
use verkstad::handler::AppState;
use verkstad::items::ItemStore;
use verkstad::{models, net};

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    tracing_subscriber::fmt().json().init();
    tracing::info!("verkstad.svc starting");

    let config_path = args
        .config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);
    let cfg = Config::load_or_default(&config_path).unwrap_or_else(|e| {
        tracing::error!(error = %e, path = ?config_path, "failed to load config file");
        std::process::exit(1);
    });

    let public_dir = cfg.app.get_public_dir();
    let models_dir = models::models_dir(&public_dir);
    match models::discover(&models_dir, false) {
        Ok(models) if models.is_empty() => {
            tracing::warn!(
                dir = %models_dir.display(),
                "no URDF models found, drop .urdf files into the models directory"
            );
        }
        Ok(models) => {
            tracing::info!(count = models.len(), dir = %models_dir.display(), "found URDF models");
            for model in &models {
                tracing::info!(file = %model.urdf, "model available");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to prepare models directory");
            std::process::exit(1);
        }
    }

    let state = AppState {
        store: Arc::new(ItemStore::new()),
        public_dir,
    };
    let app = verkstad::router(state);

    let start_port = args.port.unwrap_or_else(|| cfg.app.get_port());
    let port = net::find_free_port(start_port, net::MAX_PROBE_ATTEMPTS).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to find a free port");
        std::process::exit(1);
    });

    let address = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&address).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to setup tcp listener");
        std::process::exit(1);
    });

    tracing::info!("verkstad.svc running on {}", &address);
    tracing::info!("viewer available at http://localhost:{}/urdf_viewer.html", port);

    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(err) = result {
                tracing::error!(error = %err, "server terminated unexpectedly");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            tracing::info!("ctrl+c signal received, preparing to shutdown");
        }
    }

    tracing::info!("verkstad.svc going off, graceful shutdown complete");
}
