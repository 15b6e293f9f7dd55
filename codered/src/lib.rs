//! Code Red Console Library
//!
//! Convoy tracking, route analysis and session handling behind the Code Red
//! logistics console.

pub mod analyst;
pub mod app;
pub mod authn;
pub mod errors;
pub mod filesys;
pub mod http;
pub mod logs;
pub mod models;
pub mod registry;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;
