//! Route analysis
//!
//! [`analyze_route`] is total: whatever the backend does, the caller gets a
//! [`RouteAnalysis`]. Backend failures are logged and replaced with the
//! fixed analysis from [`fallback::fallback_analysis`].

pub mod fallback;
pub mod genai;
pub mod prompt;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, warn};

use crate::models::analysis::{RouteAnalysis, RouteRequest};

/// Why a backend could not produce an analysis
#[derive(Error, Debug)]
pub enum AnalysisFailure {
    #[error("no API key configured")]
    MissingCredential,

    #[error("transport failure: {0}")]
    TransportFailure(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// A source of route analyses that may fail
#[async_trait]
pub trait RouteAnalyst: Send + Sync {
    /// Make a single attempt at analyzing `request`
    async fn try_analyze(&self, request: &RouteRequest) -> Result<RouteAnalysis, AnalysisFailure>;
}

/// Analyze a route, substituting the fallback on any failure
pub async fn analyze_route(analyst: &dyn RouteAnalyst, request: &RouteRequest) -> RouteAnalysis {
    match analyst.try_analyze(request).await {
        Ok(analysis) => analysis,
        Err(AnalysisFailure::MissingCredential) => {
            warn!("API key missing, returning mock analysis");
            fallback::fallback_analysis()
        }
        Err(e) => {
            error!(
                start = %request.start,
                end = %request.end,
                "Route analysis failed: {}",
                e
            );
            fallback::fallback_analysis()
        }
    }
}
