//! HTTP server setup

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::options::ServerOptions;
use crate::errors::ConsoleError;
use crate::server::handlers::{
    analyze_handler, config_handler, convoy_handler, convoys_handler, dashboard_handler,
    deploy_handler, encryption_handler, health_handler, login_handler, logout_handler,
    menu_handler, security_logs_handler, toggle_config_handler, version_handler,
};
use crate::server::state::ServerState;

/// Build the console router
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        // Health and version
        .route("/health", get(health_handler))
        .route("/version", get(version_handler))
        // Session
        .route("/session/login", post(login_handler))
        .route("/session/logout", post(logout_handler))
        .route("/session/menu", get(menu_handler))
        // Panels
        .route("/dashboard", get(dashboard_handler))
        .route("/routes/analyze", post(analyze_handler))
        .route("/routes/deploy", post(deploy_handler))
        .route("/convoys", get(convoys_handler))
        .route("/convoys/{id}", get(convoy_handler))
        .route("/security/logs", get(security_logs_handler))
        .route("/config", get(config_handler))
        .route("/config/toggle/{key}", post(toggle_config_handler))
        .route("/config/encryption", put(encryption_handler))
        // State and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
///
/// Returns the bound address, which differs from the requested one when
/// port 0 is used.
pub async fn serve(
    options: &ServerOptions,
    state: Arc<ServerState>,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(SocketAddr, JoinHandle<Result<(), ConsoleError>>), ConsoleError> {
    let app = router(state);

    let addr = format!("{}:{}", options.host, options.port);
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| ConsoleError::ServerError(e.to_string()))?;
    let local_addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| ConsoleError::ServerError(e.to_string()))
    });

    Ok((local_addr, handle))
}
