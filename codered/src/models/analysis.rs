//! Route analysis models

use serde::{Deserialize, Serialize};

use crate::errors::ConsoleError;

/// Parameters of one analysis request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub start: String,
    pub end: String,
    pub vehicle_count: u32,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, end: impl Into<String>, vehicle_count: u32) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            vehicle_count,
        }
    }

    /// Reject requests outside the analysis domain
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.start.trim().is_empty() {
            return Err(ConsoleError::ValidationError(
                "start location is required".to_string(),
            ));
        }
        if self.end.trim().is_empty() {
            return Err(ConsoleError::ValidationError(
                "destination is required".to_string(),
            ));
        }
        if self.vehicle_count == 0 {
            return Err(ConsoleError::ValidationError(
                "vehicle count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Coarse risk classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [&'static str; 3] = ["LOW", "MEDIUM", "HIGH"];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

/// Result of one route analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteAnalysis {
    pub route_id: String,

    pub risk_level: RiskLevel,

    pub estimated_duration: String,

    /// Waypoints in travel order
    pub checkpoints: Vec<String>,

    /// Congestion probability percentage, 0 to 100
    pub traffic_congestion: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_impact: Option<String>,

    pub strategic_note: String,
}

impl RouteAnalysis {
    /// Reject analyses that break the output ranges
    pub fn validate(&self) -> Result<(), ConsoleError> {
        if self.traffic_congestion > 100 {
            return Err(ConsoleError::ValidationError(format!(
                "trafficCongestion out of range: {}",
                self.traffic_congestion
            )));
        }
        if self.estimated_duration.trim().is_empty() {
            return Err(ConsoleError::ValidationError(
                "estimatedDuration is empty".to_string(),
            ));
        }
        if self.strategic_note.trim().is_empty() {
            return Err(ConsoleError::ValidationError(
                "strategicNote is empty".to_string(),
            ));
        }
        Ok(())
    }
}
