//! Main application run loop

use std::future::Future;
use std::sync::Arc;

use tracing::{error, info};

use crate::app::options::AppOptions;
use crate::app::state::AppState;
use crate::errors::ConsoleError;
use crate::server::serve::serve;
use crate::server::state::ServerState;

/// Run the console until `shutdown_signal` resolves
pub async fn run(
    options: AppOptions,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ConsoleError> {
    info!("Initializing Code Red console...");

    let app_state = AppState::init(&options)?;
    let server_state = Arc::new(ServerState::from_app(&app_state));

    let (addr, handle) = serve(&options.server, server_state, shutdown_signal).await?;
    info!("Console listening on {}", addr);

    match handle.await {
        Ok(Ok(())) => {
            info!("Console shut down");
            Ok(())
        }
        Ok(Err(e)) => {
            error!("Server error: {}", e);
            Err(e)
        }
        Err(e) => Err(ConsoleError::ServerError(format!("server task failed: {}", e))),
    }
}
