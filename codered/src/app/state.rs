//! Application state management

use std::sync::Arc;

use tracing::info;

use crate::analyst::genai::GenAiAnalyst;
use crate::analyst::RouteAnalyst;
use crate::app::options::AppOptions;
use crate::authn::session::SessionStore;
use crate::errors::ConsoleError;
use crate::models::convoy::seed_convoys;
use crate::registry::convoy::ConvoyRegistry;
use crate::services::config::ConfigStore;

/// Main application state, shared by every handler
pub struct AppState {
    /// Convoys known to this process
    pub registry: Arc<ConvoyRegistry>,

    /// Logged-in sessions
    pub sessions: Arc<SessionStore>,

    /// System config toggles
    pub config: Arc<ConfigStore>,

    /// Route analysis backend
    pub analyst: Arc<dyn RouteAnalyst>,
}

impl AppState {
    /// Initialize application state with the seed convoys
    pub fn init(options: &AppOptions) -> Result<Self, ConsoleError> {
        info!("Initializing application state...");
        let analyst = GenAiAnalyst::new(options.analyst.clone())?;
        Ok(Self::with_analyst(options, Arc::new(analyst)))
    }

    /// Initialize with a caller-provided analyst
    pub fn with_analyst(options: &AppOptions, analyst: Arc<dyn RouteAnalyst>) -> Self {
        let registry = Arc::new(ConvoyRegistry::with_seed(seed_convoys()));
        info!("Convoy registry seeded with {} convoys", registry.len());

        Self {
            registry,
            sessions: Arc::new(SessionStore::new(
                options.login_delay,
                options.session_ttl,
            )),
            config: Arc::new(ConfigStore::default()),
            analyst,
        }
    }
}
