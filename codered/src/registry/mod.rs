//! In-memory registries

pub mod convoy;
