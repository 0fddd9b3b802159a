//! visicount gateway
//!
//! - `ANY /v1/visitors`: GET reads, POST/PUT atomically increment
//! - `POST /v1/invoke`: gateway-event emulation for local testing
//! - Config: first CLI arg, else `VISICOUNT_CONFIG`, else `visicount.yaml`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use visicount_core::error::{Result, VisiCountError};
use visicount_gateway::{app_state, config, router};

const DEFAULT_CONFIG_PATH: &str = "visicount.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("VISICOUNT_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let cfg = config::load_from_file(&path)?;
    let listen = cfg.gateway.listen_addr()?;

    let state = app_state::AppState::connect(cfg).await?;
    let store_cfg = &state.cfg().store;
    tracing::info!(
        %listen,
        config = %path,
        backend = ?store_cfg.backend,
        table = %store_cfg.table_name,
        "visicount-gateway starting"
    );
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| VisiCountError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| VisiCountError::Internal(format!("server failed: {e}")))
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
