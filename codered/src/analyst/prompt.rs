//! Prompt and response schema for route analysis

use genai_client::models::Schema;

use crate::models::analysis::{RiskLevel, RouteRequest};

/// Natural-language prompt for one request
pub fn build_prompt(request: &RouteRequest) -> String {
    format!(
        r#"Act as a military logistics AI component of the "Code Red" system.
Analyze a convoy movement from "{start}" to "{end}" with {count} vehicles.
Consider:
1. Potential civilian traffic bottlenecks.
2. Strategic risk assessment.
3. Weather impacts (assume current season).

Output a structured JSON response."#,
        start = request.start.trim(),
        end = request.end.trim(),
        count = request.vehicle_count,
    )
}

/// Structured-output schema the backend must follow
pub fn response_schema() -> Schema {
    Schema::object()
        .property("routeId", Schema::string(), true)
        .property("riskLevel", Schema::string_enum(RiskLevel::ALL), true)
        .property("estimatedDuration", Schema::string(), true)
        .property("checkpoints", Schema::array_of(Schema::string()), true)
        .property(
            "trafficCongestion",
            Schema::number().describe("Percentage probability 0-100"),
            true,
        )
        .property("weatherImpact", Schema::string(), false)
        .property("strategicNote", Schema::string(), true)
}
