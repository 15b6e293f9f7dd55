//! Personnel and roles

use serde::{Deserialize, Serialize};

/// Role selected at login
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Commander,
    LogisticsOfficer,
    FieldAgent,
}

impl UserRole {
    /// Display name assigned to this role
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Commander => "Atul Naik",
            _ => "Logistics Officer",
        }
    }

    pub fn clearance_level(&self) -> u8 {
        match self {
            UserRole::Commander => 5,
            _ => 3,
        }
    }

    /// Capabilities granted to this role
    pub fn capabilities(&self) -> &'static [Capability] {
        const ALL: &[Capability] = &[
            Capability::ViewDashboard,
            Capability::PlanRoutes,
            Capability::ViewTracking,
            Capability::ViewSecurityLogs,
            Capability::EditConfig,
        ];
        const STANDARD: &[Capability] = &[
            Capability::ViewDashboard,
            Capability::PlanRoutes,
            Capability::ViewTracking,
            Capability::EditConfig,
        ];
        match self {
            UserRole::Commander => ALL,
            UserRole::LogisticsOfficer | UserRole::FieldAgent => STANDARD,
        }
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

/// A permission derived from a role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    ViewDashboard,
    PlanRoutes,
    ViewTracking,
    ViewSecurityLogs,
    EditConfig,
}

/// Logged-in personnel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    pub clearance_level: u8,
}

impl User {
    pub fn new(id: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: id.into(),
            name: role.display_name().to_string(),
            role,
            clearance_level: role.clearance_level(),
        }
    }
}
