//! Turning an analysis into a tracked convoy

use rand::Rng;
use tracing::info;

use crate::models::analysis::{RiskLevel, RouteAnalysis, RouteRequest};
use crate::models::convoy::{Convoy, ConvoyStatus, Priority};
use crate::registry::convoy::ConvoyRegistry;
use crate::utils::upper_prefix;

/// Priority assigned to a convoy deployed under `risk`
pub fn priority_for(risk: RiskLevel) -> Priority {
    match risk {
        RiskLevel::High => Priority::High,
        RiskLevel::Medium | RiskLevel::Low => Priority::Medium,
    }
}

/// Build the convoy record for a completed analysis
pub fn convoy_from_analysis(request: &RouteRequest, analysis: &RouteAnalysis) -> Convoy {
    let id = if analysis.route_id.trim().is_empty() {
        format!("CV-{}", rand::thread_rng().gen_range(0..1000))
    } else {
        analysis.route_id.clone()
    };

    Convoy {
        id,
        name: format!(
            "UNIT {}-{}",
            upper_prefix(&request.start, 3),
            upper_prefix(&request.end, 3)
        ),
        start_location: request.start.clone(),
        destination: request.end.clone(),
        status: ConvoyStatus::Moving,
        progress: 0,
        vehicle_count: request.vehicle_count,
        priority: priority_for(analysis.risk_level),
        eta: analysis.estimated_duration.clone(),
        distance: "Calculating...".to_string(),
    }
}

/// Add the convoy for `analysis` to the front of the registry
pub fn deploy(registry: &ConvoyRegistry, request: &RouteRequest, analysis: &RouteAnalysis) -> Convoy {
    let convoy = convoy_from_analysis(request, analysis);
    registry.prepend(convoy.clone());
    info!(id = %convoy.id, priority = ?convoy.priority, "Convoy deployed");
    convoy
}
