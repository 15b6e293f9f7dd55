//! System configuration toggles

use serde::{Deserialize, Serialize};

use crate::errors::ConsoleError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EncryptionLevel {
    #[serde(rename = "STD")]
    Standard,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MIL-SPEC")]
    MilSpec,
}

/// Boolean toggles that can be flipped by key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigToggle {
    Notifications,
    AutoRefresh,
    LowBandwidth,
    SatelliteSync,
}

impl std::str::FromStr for ConfigToggle {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "notifications" => Ok(ConfigToggle::Notifications),
            "autoRefresh" => Ok(ConfigToggle::AutoRefresh),
            "lowBandwidth" => Ok(ConfigToggle::LowBandwidth),
            "satelliteSync" => Ok(ConfigToggle::SatelliteSync),
            _ => Err(ConsoleError::NotFound(format!("config toggle {}", s))),
        }
    }
}

/// Console settings panel state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfig {
    pub notifications: bool,
    pub auto_refresh: bool,
    pub low_bandwidth: bool,
    pub encryption_level: EncryptionLevel,
    pub satellite_sync: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            notifications: true,
            auto_refresh: true,
            low_bandwidth: false,
            encryption_level: EncryptionLevel::High,
            satellite_sync: true,
        }
    }
}

impl SystemConfig {
    /// Flip a toggle and return its new value
    pub fn toggle(&mut self, key: ConfigToggle) -> bool {
        let slot = match key {
            ConfigToggle::Notifications => &mut self.notifications,
            ConfigToggle::AutoRefresh => &mut self.auto_refresh,
            ConfigToggle::LowBandwidth => &mut self.low_bandwidth,
            ConfigToggle::SatelliteSync => &mut self.satellite_sync,
        };
        *slot = !*slot;
        *slot
    }
}
