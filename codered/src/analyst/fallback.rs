//! Fixed analysis used whenever the backend cannot answer

use rand::Rng;

use crate::models::analysis::{RiskLevel, RouteAnalysis};

pub const FALLBACK_ROUTE_PREFIX: &str = "MOCK-";
pub const FALLBACK_DURATION: &str = "2 Hours 15 Mins";
pub const FALLBACK_CHECKPOINTS: [&str; 3] = ["Alpha Checkpoint", "Bridge crossing", "City Outskirts"];
pub const FALLBACK_CONGESTION: u8 = 65;
pub const FALLBACK_WEATHER: &str = "Clear visibility, minor wind.";
pub const FALLBACK_NOTE: &str =
    "High traffic volume expected near urban centers. Recommended to maintain 50m vehicle spacing.";

/// The fallback analysis, with a fresh `MOCK-<0..999>` route id
pub fn fallback_analysis() -> RouteAnalysis {
    RouteAnalysis {
        route_id: format!(
            "{}{}",
            FALLBACK_ROUTE_PREFIX,
            rand::thread_rng().gen_range(0..1000)
        ),
        risk_level: RiskLevel::Medium,
        estimated_duration: FALLBACK_DURATION.to_string(),
        checkpoints: FALLBACK_CHECKPOINTS.iter().map(|c| c.to_string()).collect(),
        traffic_congestion: FALLBACK_CONGESTION,
        weather_impact: Some(FALLBACK_WEATHER.to_string()),
        strategic_note: FALLBACK_NOTE.to_string(),
    }
}

/// Whether `analysis` matches the fallback in every field but the route id
pub fn is_fallback(analysis: &RouteAnalysis) -> bool {
    let reference = fallback_analysis();
    analysis.route_id.starts_with(FALLBACK_ROUTE_PREFIX)
        && RouteAnalysis {
            route_id: analysis.route_id.clone(),
            ..reference
        } == *analysis
}
