//! System configuration panel state

use std::sync::RwLock;

use tracing::info;

use crate::models::config::{ConfigToggle, EncryptionLevel, SystemConfig};

/// In-memory holder of the console toggles
pub struct ConfigStore {
    inner: RwLock<SystemConfig>,
}

impl ConfigStore {
    pub fn new(config: SystemConfig) -> Self {
        Self {
            inner: RwLock::new(config),
        }
    }

    pub fn get(&self) -> SystemConfig {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Flip `key` and return the updated config
    pub fn toggle(&self, key: ConfigToggle) -> SystemConfig {
        let mut config = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let value = config.toggle(key);
        info!(toggle = ?key, value, "Config toggled");
        config.clone()
    }

    pub fn set_encryption_level(&self, level: EncryptionLevel) -> SystemConfig {
        let mut config = self.inner.write().unwrap_or_else(|e| e.into_inner());
        config.encryption_level = level;
        info!(level = ?level, "Encryption level set");
        config.clone()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(SystemConfig::default())
    }
}
