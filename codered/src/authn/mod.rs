//! Sessions

pub mod session;
