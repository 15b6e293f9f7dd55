//! HTTP request handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analyst::analyze_route;
use crate::errors::ConsoleError;
use crate::models::analysis::{RouteAnalysis, RouteRequest};
use crate::models::config::{ConfigToggle, EncryptionLevel, SystemConfig};
use crate::models::convoy::Convoy;
use crate::models::security::{seed_security_logs, SecurityLogEntry};
use crate::models::user::{Capability, User, UserRole};
use crate::server::auth::CurrentSession;
use crate::server::error::ApiError;
use crate::server::state::ServerState;
use crate::services::dashboard::{summarize, DashboardSummary};
use crate::services::deploy::deploy;
use crate::services::menu::{build_menu, MenuItem};
use crate::services::tracking::{tracking_view, TrackingView};
use crate::utils::version_info;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    let version = version_info();
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "codered".to_string(),
        version: version.version,
    })
}

/// Version handler
pub async fn version_handler() -> impl IntoResponse {
    Json(version_info())
}

/// Login request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub personnel_id: String,
    pub role: UserRole,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
    pub menu: Vec<MenuItem>,
}

/// Login handler
pub async fn login_handler(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let session = state
        .sessions
        .login(&request.personnel_id, request.role)
        .await?;

    Ok(Json(LoginResponse {
        menu: build_menu(session.user.role),
        token: session.token,
        user: session.user,
    }))
}

/// Logout handler
pub async fn logout_handler(
    State(state): State<Arc<ServerState>>,
    CurrentSession(session): CurrentSession,
) -> StatusCode {
    state.sessions.logout(&session.token).await;
    StatusCode::NO_CONTENT
}

/// Menu handler
pub async fn menu_handler(CurrentSession(session): CurrentSession) -> Json<Vec<MenuItem>> {
    Json(build_menu(session.user.role))
}

/// Dashboard handler
pub async fn dashboard_handler(
    State(state): State<Arc<ServerState>>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<DashboardSummary>, ApiError> {
    session.require(Capability::ViewDashboard)?;
    Ok(Json(summarize(&state.registry)))
}

/// Route analysis handler
///
/// Dropping the request (client disconnect) drops the analysis with it and
/// releases the session's busy mark.
pub async fn analyze_handler(
    State(state): State<Arc<ServerState>>,
    CurrentSession(session): CurrentSession,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteAnalysis>, ApiError> {
    session.require(Capability::PlanRoutes)?;
    request.validate()?;

    let _guard = session.begin_analysis()?;
    let analysis = analyze_route(state.analyst.as_ref(), &request).await;
    Ok(Json(analysis))
}

/// Deploy request: the requested route plus the analysis it produced
#[derive(Debug, Deserialize)]
pub struct DeployRequest {
    #[serde(flatten)]
    pub route: RouteRequest,
    pub analysis: RouteAnalysis,
}

/// Deploy handler
pub async fn deploy_handler(
    State(state): State<Arc<ServerState>>,
    CurrentSession(session): CurrentSession,
    Json(request): Json<DeployRequest>,
) -> Result<(StatusCode, Json<Convoy>), ApiError> {
    session.require(Capability::PlanRoutes)?;
    request.route.validate()?;
    request.analysis.validate()?;

    let convoy = deploy(&state.registry, &request.route, &request.analysis);
    Ok((StatusCode::CREATED, Json(convoy)))
}

#[derive(Debug, Deserialize)]
pub struct TrackingParams {
    pub selected: Option<String>,
}

/// Convoy list handler
pub async fn convoys_handler(
    State(state): State<Arc<ServerState>>,
    CurrentSession(session): CurrentSession,
    Query(params): Query<TrackingParams>,
) -> Result<Json<TrackingView>, ApiError> {
    session.require(Capability::ViewTracking)?;
    Ok(Json(tracking_view(&state.registry, params.selected.as_deref())))
}

/// Single convoy handler
pub async fn convoy_handler(
    State(state): State<Arc<ServerState>>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<String>,
) -> Result<Json<Convoy>, ApiError> {
    session.require(Capability::ViewTracking)?;
    state
        .registry
        .get(&id)
        .map(Json)
        .ok_or_else(|| ConsoleError::NotFound(format!("convoy {}", id)).into())
}

/// Security log handler
pub async fn security_logs_handler(
    CurrentSession(session): CurrentSession,
) -> Result<Json<Vec<SecurityLogEntry>>, ApiError> {
    session.require(Capability::ViewSecurityLogs)?;
    Ok(Json(seed_security_logs()))
}

/// Config read handler
pub async fn config_handler(
    State(state): State<Arc<ServerState>>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<SystemConfig>, ApiError> {
    session.require(Capability::EditConfig)?;
    Ok(Json(state.config.get()))
}

/// Config toggle handler
pub async fn toggle_config_handler(
    State(state): State<Arc<ServerState>>,
    CurrentSession(session): CurrentSession,
    Path(key): Path<String>,
) -> Result<Json<SystemConfig>, ApiError> {
    session.require(Capability::EditConfig)?;
    let toggle: ConfigToggle = key.parse()?;
    Ok(Json(state.config.toggle(toggle)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionRequest {
    pub encryption_level: EncryptionLevel,
}

/// Encryption level handler
pub async fn encryption_handler(
    State(state): State<Arc<ServerState>>,
    CurrentSession(session): CurrentSession,
    Json(request): Json<EncryptionRequest>,
) -> Result<Json<SystemConfig>, ApiError> {
    session.require(Capability::EditConfig)?;
    Ok(Json(state.config.set_encryption_level(request.encryption_level)))
}
