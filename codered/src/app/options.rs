//! Application configuration options

use std::time::Duration;

use crate::analyst::genai::AnalystOptions;

/// Main application options
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Server configuration
    pub server: ServerOptions,

    /// Route analyst configuration
    pub analyst: AnalystOptions,

    /// Delay before a login completes
    pub login_delay: Duration,

    /// Lifetime of a session after login
    pub session_ttl: Duration,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            server: ServerOptions::default(),
            analyst: AnalystOptions::default(),
            login_delay: Duration::from_millis(1500),
            session_ttl: Duration::from_secs(8 * 60 * 60),
        }
    }
}

/// Local HTTP server options
#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}
