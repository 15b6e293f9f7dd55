//! Console operations behind each panel

pub mod config;
pub mod dashboard;
pub mod deploy;
pub mod menu;
pub mod tracking;
