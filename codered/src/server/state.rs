//! Server state

use std::sync::Arc;

use crate::analyst::RouteAnalyst;
use crate::app::state::AppState;
use crate::authn::session::SessionStore;
use crate::registry::convoy::ConvoyRegistry;
use crate::services::config::ConfigStore;

/// Server state shared across handlers
pub struct ServerState {
    pub registry: Arc<ConvoyRegistry>,
    pub sessions: Arc<SessionStore>,
    pub config: Arc<ConfigStore>,
    pub analyst: Arc<dyn RouteAnalyst>,
}

impl ServerState {
    pub fn new(
        registry: Arc<ConvoyRegistry>,
        sessions: Arc<SessionStore>,
        config: Arc<ConfigStore>,
        analyst: Arc<dyn RouteAnalyst>,
    ) -> Self {
        Self {
            registry,
            sessions,
            config,
            analyst,
        }
    }

    pub fn from_app(app: &AppState) -> Self {
        Self::new(
            app.registry.clone(),
            app.sessions.clone(),
            app.config.clone(),
            app.analyst.clone(),
        )
    }
}
