//! Command center summary

use serde::Serialize;

use crate::models::alert::{seed_alerts, Alert};
use crate::models::convoy::{Convoy, ConvoyStatus};
use crate::models::traffic::{seed_traffic, TrafficSample};
use crate::registry::convoy::ConvoyRegistry;

#[derive(Debug, Clone, Serialize)]
pub struct ThreatAssessment {
    pub level: String,
    pub note: String,
}

/// Everything the command center shows
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Convoys currently MOVING
    pub active_units: usize,
    pub total_convoys: usize,
    pub threat: ThreatAssessment,
    pub alerts: Vec<Alert>,
    pub traffic_trend: Vec<TrafficSample>,
    pub convoys: Vec<Convoy>,
}

pub fn summarize(registry: &ConvoyRegistry) -> DashboardSummary {
    let convoys = registry.list();
    DashboardSummary {
        active_units: convoys
            .iter()
            .filter(|c| c.status == ConvoyStatus::Moving)
            .count(),
        total_convoys: convoys.len(),
        threat: ThreatAssessment {
            level: "MODERATE".to_string(),
            note: "Sector 4 Congestion".to_string(),
        },
        alerts: seed_alerts(),
        traffic_trend: seed_traffic(),
        convoys,
    }
}
