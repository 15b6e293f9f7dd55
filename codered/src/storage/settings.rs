//! Settings file management

use std::path::{Path, PathBuf};
use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analyst::genai::AnalystOptions;
use crate::app::options::{AppOptions, ServerOptions};
use crate::errors::ConsoleError;
use crate::filesys::file::File;
use crate::logs::{LogLevel, LogOptions};

/// Console settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Emit JSON log lines
    #[serde(default)]
    pub json_logs: bool,

    /// Directory for rolling log files
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerSettings,

    /// Generative backend configuration
    #[serde(default)]
    pub genai: GenAiSettings,

    /// Delay before a login completes, in milliseconds
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,

    /// Session lifetime after login, in seconds
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
}

fn default_login_delay_ms() -> u64 {
    1500
}

fn default_session_ttl_secs() -> u64 {
    8 * 60 * 60
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            json_logs: false,
            log_dir: None,
            server: ServerSettings::default(),
            genai: GenAiSettings::default(),
            login_delay_ms: default_login_delay_ms(),
            session_ttl_secs: default_session_ttl_secs(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Generative backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenAiSettings {
    #[serde(default = "default_genai_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_genai_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

impl Default for GenAiSettings {
    fn default() -> Self {
        Self {
            base_url: default_genai_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl Settings {
    /// Read settings from `path`, or use defaults when no path is given
    pub async fn load(path: Option<&Path>) -> Result<Self, ConsoleError> {
        let Some(path) = path else {
            debug!("No settings file given, using defaults");
            return Ok(Self::default());
        };

        let file = File::new(path);
        if !file.exists().await {
            return Err(ConsoleError::ConfigError(format!(
                "settings file not found: {}",
                path.display()
            )));
        }
        let settings: Settings = file.read_json().await?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// API key from the configured environment variable; empty counts as absent
    pub fn api_key_from_env(&self) -> Option<SecretString> {
        std::env::var(&self.genai.api_key_env)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(SecretString::from)
    }

    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            log_level: self.log_level.clone(),
            json_format: self.json_logs,
            log_dir: self.log_dir.clone(),
            ..Default::default()
        }
    }

    pub fn analyst_options(&self, api_key: Option<SecretString>) -> AnalystOptions {
        AnalystOptions {
            base_url: self.genai.base_url.clone(),
            model: self.genai.model.clone(),
            api_key,
        }
    }

    pub fn app_options(&self, api_key: Option<SecretString>) -> AppOptions {
        AppOptions {
            server: ServerOptions {
                host: self.server.host.clone(),
                port: self.server.port,
            },
            analyst: self.analyst_options(api_key),
            login_delay: Duration::from_millis(self.login_delay_ms),
            session_ttl: Duration::from_secs(self.session_ttl_secs),
        }
    }
}
