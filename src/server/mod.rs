pub mod handlers;
pub mod types;

use crate::{Result, config::Config, llm::GeminiClient};
use axum::{Router, routing::post};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/ask",
            post(handlers::ask).fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // One client for the whole process, shared read-only by every request
    let client = GeminiClient::new(config.llm.clone())?;
    info!("Initialized Gemini client for model {}", client.model());

    let app = router(AppState::new(Arc::new(client)));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!("Server running at http://localhost:{}", config.server.port);
    info!("Starting server on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
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
