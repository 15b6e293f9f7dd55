//! Inbound HTTP API

pub mod auth;
pub mod error;
pub mod handlers;
pub mod serve;
pub mod state;
