//! Navigation menu built from session capabilities

use serde::Serialize;

use crate::models::user::{Capability, UserRole};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Dashboard,
    Routes,
    Tracking,
    Logs,
    Config,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Dashboard, Tab::Routes, Tab::Tracking, Tab::Logs, Tab::Config];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "COMMAND CENTER",
            Tab::Routes => "ROUTE OPS",
            Tab::Tracking => "LIVE TRACKING",
            Tab::Logs => "SECURITY LOGS",
            Tab::Config => "CONFIG",
        }
    }

    pub fn required_capability(&self) -> Capability {
        match self {
            Tab::Dashboard => Capability::ViewDashboard,
            Tab::Routes => Capability::PlanRoutes,
            Tab::Tracking => Capability::ViewTracking,
            Tab::Logs => Capability::ViewSecurityLogs,
            Tab::Config => Capability::EditConfig,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MenuItem {
    pub tab: Tab,
    pub label: &'static str,
}

/// Tabs visible to `role`, in display order
pub fn build_menu(role: UserRole) -> Vec<MenuItem> {
    Tab::ALL
        .iter()
        .filter(|tab| role.has(tab.required_capability()))
        .map(|tab| MenuItem {
            tab: *tab,
            label: tab.label(),
        })
        .collect()
}
