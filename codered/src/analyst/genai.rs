//! Generative backend analyst

use async_trait::async_trait;
use genai_client::models::GenerateContentRequest;
use secrecy::SecretString;
use serde::Deserialize;
use tracing::{debug, info};

use crate::analyst::prompt::{build_prompt, response_schema};
use crate::analyst::{AnalysisFailure, RouteAnalyst};
use crate::errors::ConsoleError;
use crate::http::client::HttpClient;
use crate::models::analysis::{RiskLevel, RouteAnalysis, RouteRequest};

/// Analyst options
#[derive(Debug, Clone)]
pub struct AnalystOptions {
    /// Backend base URL
    pub base_url: String,

    /// Model name
    pub model: String,

    /// API key; every request falls back without network I/O when unset
    pub api_key: Option<SecretString>,
}

impl Default for AnalystOptions {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key: None,
        }
    }
}

/// Analyst backed by the generative-text service
pub struct GenAiAnalyst {
    http_client: HttpClient,
    model: String,
    api_key: Option<SecretString>,
}

impl GenAiAnalyst {
    pub fn new(options: AnalystOptions) -> Result<Self, ConsoleError> {
        let http_client = HttpClient::new(&options.base_url)?;
        if options.api_key.is_none() {
            info!("No API key configured, route analysis will use the fallback");
        }
        Ok(Self {
            http_client,
            model: options.model,
            api_key: options.api_key,
        })
    }
}

#[async_trait]
impl RouteAnalyst for GenAiAnalyst {
    async fn try_analyze(&self, request: &RouteRequest) -> Result<RouteAnalysis, AnalysisFailure> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(AnalysisFailure::MissingCredential)?;

        let body = GenerateContentRequest::from_prompt(build_prompt(request))
            .with_json_schema(response_schema());

        debug!(model = %self.model, "Requesting route analysis");
        let response = self
            .http_client
            .generate_content(&self.model, api_key, &body)
            .await
            .map_err(|e| match e {
                ConsoleError::JsonError(_) => AnalysisFailure::MalformedResponse(e.to_string()),
                ConsoleError::HttpError(ref inner) if inner.is_decode() => {
                    AnalysisFailure::MalformedResponse(e.to_string())
                }
                _ => AnalysisFailure::TransportFailure(e.to_string()),
            })?;

        let text = response
            .text()
            .ok_or_else(|| AnalysisFailure::MalformedResponse("empty response".to_string()))?;

        parse_analysis(&text)
    }
}

/// Analysis as the backend sends it, before range checks
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAnalysis {
    route_id: String,
    risk_level: RiskLevel,
    estimated_duration: String,
    checkpoints: Vec<String>,
    traffic_congestion: f64,
    #[serde(default)]
    weather_impact: Option<String>,
    strategic_note: String,
}

/// Parse and validate the backend's JSON text
pub fn parse_analysis(text: &str) -> Result<RouteAnalysis, AnalysisFailure> {
    let wire: WireAnalysis = serde_json::from_str(text.trim())
        .map_err(|e| AnalysisFailure::MalformedResponse(e.to_string()))?;

    if !wire.traffic_congestion.is_finite() || !(0.0..=100.0).contains(&wire.traffic_congestion) {
        return Err(AnalysisFailure::MalformedResponse(format!(
            "trafficCongestion out of range: {}",
            wire.traffic_congestion
        )));
    }
    let analysis = RouteAnalysis {
        route_id: wire.route_id,
        risk_level: wire.risk_level,
        estimated_duration: wire.estimated_duration,
        checkpoints: wire.checkpoints,
        traffic_congestion: wire.traffic_congestion.round() as u8,
        weather_impact: wire.weather_impact.filter(|w| !w.trim().is_empty()),
        strategic_note: wire.strategic_note,
    };
    analysis
        .validate()
        .map_err(|e| AnalysisFailure::MalformedResponse(e.to_string()))?;
    Ok(analysis)
}
