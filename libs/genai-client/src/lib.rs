//! Generative backend wire models
//!
//! Request and response shapes for the `generateContent` REST endpoint.

pub mod models;
