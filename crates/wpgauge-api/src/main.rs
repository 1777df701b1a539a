//! wpgauge API server.
//!
//! Config path comes from `WPGAUGE_CONFIG` (default `wpgauge.yaml`).
//! The daily cycle is not scheduled here; call `POST /wP/DailyCycle` from cron.

use std::process::ExitCode;

use thiserror::Error;
use tokio::net::TcpListener;

use wpgauge_api::{app_state::AppState, config, obs, router};
use wpgauge_core::GaugeError;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Gauge(#[from] GaugeError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The subscriber may not be installed yet.
            eprintln!("wpgauge-api: {e}");
            tracing::error!(error = %e, "wpgauge-api exited");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let path = config::config_path();
    let cfg = config::load_from_file(&path)?;
    obs::logging::init(&cfg.log)?;

    let listen = cfg.server.listen_addr()?;
    let state = AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "wpgauge-api starting");
    let listener = TcpListener::bind(listen).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
