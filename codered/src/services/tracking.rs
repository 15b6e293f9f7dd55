//! Live tracking view

use serde::Serialize;

use crate::models::convoy::Convoy;
use crate::registry::convoy::ConvoyRegistry;

/// Cleaned origin and destination for a map lookup
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteQuery {
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackingView {
    pub convoys: Vec<Convoy>,
    /// Requested convoy, else the first one; `None` only when empty
    pub selected: Option<Convoy>,
    pub route: Option<RouteQuery>,
}

/// Place name inside the first parentheses, e.g. "Base HQ (Bangalore)" -> "Bangalore"
pub fn clean_location(location: &str) -> &str {
    location
        .split_once('(')
        .map(|(_, rest)| rest.split(')').next().unwrap_or(rest).trim())
        .filter(|inner| !inner.is_empty())
        .unwrap_or(location)
}

pub fn route_query(convoy: &Convoy) -> RouteQuery {
    RouteQuery {
        origin: clean_location(&convoy.start_location).to_string(),
        destination: clean_location(&convoy.destination).to_string(),
    }
}

pub fn tracking_view(registry: &ConvoyRegistry, selected_id: Option<&str>) -> TrackingView {
    let convoys = registry.list();
    let selected = selected_id
        .and_then(|id| convoys.iter().find(|c| c.id == id))
        .or_else(|| convoys.first())
        .cloned();
    let route = selected.as_ref().map(route_query);
    TrackingView {
        convoys,
        selected,
        route,
    }
}
