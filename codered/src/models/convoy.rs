//! Convoy models

use serde::{Deserialize, Serialize};

/// A logistics unit in transit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Convoy {
    /// Unit identifier; not guaranteed unique across deployments
    pub id: String,

    /// Display name
    pub name: String,

    pub start_location: String,

    pub destination: String,

    pub status: ConvoyStatus,

    /// Percent complete, 0 to 100
    pub progress: u8,

    pub vehicle_count: u32,

    pub priority: Priority,

    pub eta: String,

    pub distance: String,
}

/// Convoy status; any value may be set directly
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConvoyStatus {
    Moving,
    Delayed,
    Rerouting,
    Secure,
    AtCheckpoint,
}

/// Convoy priority, fixed at creation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Convoys present at process start
pub fn seed_convoys() -> Vec<Convoy> {
    vec![
        Convoy {
            id: "CV-ALPHA-01".to_string(),
            name: "Alpha Supply Unit".to_string(),
            start_location: "Base HQ (Bangalore)".to_string(),
            destination: "Forward Post 4 (Mysore)".to_string(),
            status: ConvoyStatus::Moving,
            progress: 45,
            vehicle_count: 12,
            priority: Priority::High,
            eta: "14:30 HRS".to_string(),
            distance: "145 km".to_string(),
        },
        Convoy {
            id: "CV-BRAVO-09".to_string(),
            name: "Bravo Med Support".to_string(),
            start_location: "Depot 7".to_string(),
            destination: "Base HQ".to_string(),
            status: ConvoyStatus::Delayed,
            progress: 78,
            vehicle_count: 4,
            priority: Priority::Medium,
            eta: "16:00 HRS".to_string(),
            distance: "88 km".to_string(),
        },
        Convoy {
            id: "CV-CHARLIE-22".to_string(),
            name: "Charlie Heavy Transport".to_string(),
            start_location: "Sector 9".to_string(),
            destination: "Sector 1".to_string(),
            status: ConvoyStatus::Rerouting,
            progress: 20,
            vehicle_count: 8,
            priority: Priority::High,
            eta: "UNKNOWN".to_string(),
            distance: "210 km".to_string(),
        },
    ]
}
