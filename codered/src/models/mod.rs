//! Domain models

pub mod alert;
pub mod analysis;
pub mod config;
pub mod convoy;
pub mod security;
pub mod traffic;
pub mod user;
