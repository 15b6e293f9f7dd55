//! Intel feed alerts

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// An intel feed entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub severity: Severity,
    pub message: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

pub fn seed_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "ALT-001".to_string(),
            severity: Severity::Critical,
            message: "Civilian congestion detected on Route NH-44. Velocity drop > 40%."
                .to_string(),
            timestamp: "10:02 HRS".to_string(),
            location: Some("Sector 4".to_string()),
        },
        Alert {
            id: "ALT-002".to_string(),
            severity: Severity::Warning,
            message: "Weather warning: Heavy rain predicted in Sector 2.".to_string(),
            timestamp: "09:45 HRS".to_string(),
            location: None,
        },
        Alert {
            id: "ALT-003".to_string(),
            severity: Severity::Info,
            message: "CV-ALPHA-01 checked in at CP-2 securely.".to_string(),
            timestamp: "09:30 HRS".to_string(),
            location: None,
        },
    ]
}
