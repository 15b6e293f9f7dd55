//! HTTP API tests

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use codered::analyst::fallback::fallback_analysis;
use codered::analyst::genai::{AnalystOptions, GenAiAnalyst};
use codered::analyst::{AnalysisFailure, RouteAnalyst};
use codered::app::options::AppOptions;
use codered::app::state::AppState;
use codered::models::analysis::{RouteAnalysis, RouteRequest};
use codered::server::serve::router;
use codered::server::state::ServerState;
use serde_json::{json, Value};
use tokio::sync::Notify;
use tower::ServiceExt;

fn options() -> AppOptions {
    AppOptions {
        login_delay: Duration::ZERO,
        ..Default::default()
    }
}

fn app_with(analyst: Arc<dyn RouteAnalyst>) -> Router {
    let state = AppState::with_analyst(&options(), analyst);
    router(Arc::new(ServerState::from_app(&state)))
}

/// Console whose analyst has no credential and always falls back
fn app() -> Router {
    let analyst = GenAiAnalyst::new(AnalystOptions::default()).unwrap();
    app_with(Arc::new(analyst))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("x-session-token", token);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn login(app: &Router, role: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/session/login",
        None,
        Some(json!({"personnelId": "CMD-8921", "role": role})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&app(), Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_login_returns_user_and_menu() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/session/login",
        None,
        Some(json!({"personnelId": "CMD-8921", "role": "COMMANDER"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Atul Naik");
    assert_eq!(body["user"]["clearanceLevel"], 5);
    let labels: Vec<_> = body["menu"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["label"].as_str().unwrap().to_string())
        .collect();
    assert!(labels.contains(&"SECURITY LOGS".to_string()));
}

#[tokio::test]
async fn test_blank_personnel_id_rejected() {
    let (status, _) = send(
        &app(),
        Method::POST,
        "/session/login",
        None,
        Some(json!({"personnelId": "", "role": "FIELD_AGENT"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_security_logs_require_commander() {
    let app = app();

    let commander = login(&app, "COMMANDER").await;
    let (status, body) = send(&app, Method::GET, "/security/logs", Some(&commander), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);
    assert_eq!(body[0]["id"], "LOG-9921");

    for role in ["LOGISTICS_OFFICER", "FIELD_AGENT"] {
        let token = login(&app, role).await;
        let (status, _) = send(&app, Method::GET, "/security/logs", Some(&token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (_, menu) = send(&app, Method::GET, "/session/menu", Some(&token), None).await;
        assert!(menu
            .as_array()
            .unwrap()
            .iter()
            .all(|m| m["tab"] != "logs"));
    }
}

#[tokio::test]
async fn test_missing_or_unknown_token() {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/dashboard", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/dashboard", Some("nope"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_invalidates_token() {
    let app = app();
    let token = login(&app, "FIELD_AGENT").await;

    let (status, _) = send(&app, Method::POST, "/session/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, "/convoys", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test(start_paused = true)]
async fn test_expired_session_is_unauthorized() {
    let options = AppOptions {
        session_ttl: Duration::from_secs(60),
        ..options()
    };
    let analyst = GenAiAnalyst::new(AnalystOptions::default()).unwrap();
    let state = AppState::with_analyst(&options, Arc::new(analyst));
    let app = router(Arc::new(ServerState::from_app(&state)));
    let token = login(&app, "COMMANDER").await;

    let (status, _) = send(&app, Method::GET, "/session/menu", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    tokio::time::advance(Duration::from_secs(61)).await;
    let (status, _) = send(&app, Method::GET, "/session/menu", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(state.sessions.is_empty().await);
}

#[tokio::test]
async fn test_analyze_then_deploy() {
    let app = app();
    let token = login(&app, "LOGISTICS_OFFICER").await;
    let route = json!({"start": "Base Alpha", "end": "Outpost 9", "vehicleCount": 5});

    let (status, analysis) = send(
        &app,
        Method::POST,
        "/routes/analyze",
        Some(&token),
        Some(route.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(analysis["riskLevel"], "MEDIUM");
    assert_eq!(analysis["trafficCongestion"], 65);
    assert_eq!(analysis["estimatedDuration"], "2 Hours 15 Mins");
    assert_eq!(
        analysis["checkpoints"],
        json!(["Alpha Checkpoint", "Bridge crossing", "City Outskirts"])
    );

    // Nothing is added until the analysis is deployed
    let (_, view) = send(&app, Method::GET, "/convoys", Some(&token), None).await;
    assert_eq!(view["convoys"].as_array().unwrap().len(), 3);

    let mut deploy = route.clone();
    deploy["analysis"] = analysis.clone();
    let (status, convoy) = send(&app, Method::POST, "/routes/deploy", Some(&token), Some(deploy)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(convoy["id"], analysis["routeId"]);
    assert_eq!(convoy["priority"], "MEDIUM");
    assert_eq!(convoy["status"], "MOVING");
    assert_eq!(convoy["name"], "UNIT BAS-OUT");
    assert_eq!(convoy["eta"], "2 Hours 15 Mins");

    let (_, view) = send(&app, Method::GET, "/convoys", Some(&token), None).await;
    let convoys = view["convoys"].as_array().unwrap();
    assert_eq!(convoys.len(), 4);
    assert_eq!(convoys[0]["id"], analysis["routeId"]);
    assert_eq!(convoys[1]["id"], "CV-ALPHA-01");
    assert_eq!(view["selected"]["id"], analysis["routeId"]);

    let (_, dashboard) = send(&app, Method::GET, "/dashboard", Some(&token), None).await;
    assert_eq!(dashboard["activeUnits"], 2);
    assert_eq!(dashboard["totalConvoys"], 4);
}

#[tokio::test]
async fn test_deploy_high_risk_gets_high_priority() {
    let app = app();
    let token = login(&app, "COMMANDER").await;

    let mut analysis = serde_json::to_value(fallback_analysis()).unwrap();
    analysis["riskLevel"] = json!("HIGH");
    analysis["routeId"] = json!("RT-HOT");
    let body = json!({"start": "Depot 7", "end": "Sector 1", "vehicleCount": 3, "analysis": analysis});

    let (status, convoy) = send(&app, Method::POST, "/routes/deploy", Some(&token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(convoy["priority"], "HIGH");

    let (status, fetched) = send(&app, Method::GET, "/convoys/RT-HOT", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["vehicleCount"], 3);
}

#[tokio::test]
async fn test_deploy_rejects_invalid_analysis() {
    let app = app();
    let token = login(&app, "COMMANDER").await;
    let (_, before) = send(&app, Method::GET, "/dashboard", Some(&token), None).await;

    let mut analysis = serde_json::to_value(fallback_analysis()).unwrap();
    analysis["trafficCongestion"] = json!(200);
    analysis["estimatedDuration"] = json!("");
    analysis["strategicNote"] = json!("");
    let body = json!({"start": "Depot 7", "end": "Sector 1", "vehicleCount": 3, "analysis": analysis});

    let (status, error) = send(&app, Method::POST, "/routes/deploy", Some(&token), Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["message"].as_str().unwrap().contains("trafficCongestion"));

    let mut analysis = serde_json::to_value(fallback_analysis()).unwrap();
    analysis["strategicNote"] = json!("   ");
    let body = json!({"start": "Depot 7", "end": "Sector 1", "vehicleCount": 3, "analysis": analysis});
    let (status, _) = send(&app, Method::POST, "/routes/deploy", Some(&token), Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, after) = send(&app, Method::GET, "/dashboard", Some(&token), None).await;
    assert_eq!(after["totalConvoys"], before["totalConvoys"]);
}

#[tokio::test]
async fn test_analyze_rejects_invalid_input() {
    let app = app();
    let token = login(&app, "FIELD_AGENT").await;

    for body in [
        json!({"start": "  ", "end": "Outpost 9", "vehicleCount": 5}),
        json!({"start": "Base Alpha", "end": "", "vehicleCount": 5}),
        json!({"start": "Base Alpha", "end": "Outpost 9", "vehicleCount": 0}),
    ] {
        let (status, _) = send(&app, Method::POST, "/routes/analyze", Some(&token), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_unknown_convoy() {
    let app = app();
    let token = login(&app, "FIELD_AGENT").await;
    let (status, _) = send(&app, Method::GET, "/convoys/CV-NONE", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_config_toggles() {
    let app = app();
    let token = login(&app, "FIELD_AGENT").await;

    let (status, config) = send(&app, Method::GET, "/config", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(config["lowBandwidth"], false);
    assert_eq!(config["encryptionLevel"], "HIGH");

    let (_, config) = send(&app, Method::POST, "/config/toggle/lowBandwidth", Some(&token), None).await;
    assert_eq!(config["lowBandwidth"], true);

    let (status, _) = send(&app, Method::POST, "/config/toggle/warpDrive", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, config) = send(
        &app,
        Method::PUT,
        "/config/encryption",
        Some(&token),
        Some(json!({"encryptionLevel": "MIL-SPEC"})),
    )
    .await;
    assert_eq!(config["encryptionLevel"], "MIL-SPEC");
    assert_eq!(config["lowBandwidth"], true);
}

/// Analyst that blocks until released
struct GatedAnalyst {
    started: Arc<Notify>,
    release: Arc<Notify>,
}

#[async_trait]
impl RouteAnalyst for GatedAnalyst {
    async fn try_analyze(&self, _: &RouteRequest) -> Result<RouteAnalysis, AnalysisFailure> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(fallback_analysis())
    }
}

#[tokio::test]
async fn test_second_analysis_while_busy_conflicts() {
    let started = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let app = app_with(Arc::new(GatedAnalyst {
        started: started.clone(),
        release: release.clone(),
    }));
    let token = login(&app, "COMMANDER").await;
    let route = json!({"start": "Base Alpha", "end": "Outpost 9", "vehicleCount": 5});

    let first = {
        let app = app.clone();
        let token = token.clone();
        let route = route.clone();
        tokio::spawn(async move {
            send(&app, Method::POST, "/routes/analyze", Some(&token), Some(route)).await
        })
    };
    started.notified().await;

    let (status, _) = send(&app, Method::POST, "/routes/analyze", Some(&token), Some(route.clone())).await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Another session is not blocked
    let other = login(&app, "FIELD_AGENT").await;
    let second = {
        let app = app.clone();
        let route = route.clone();
        tokio::spawn(async move {
            send(&app, Method::POST, "/routes/analyze", Some(&other), Some(route)).await
        })
    };
    started.notified().await;

    release.notify_waiters();
    let (status, _) = first.await.unwrap();
    assert_eq!(status, StatusCode::OK);
    let (status, _) = second.await.unwrap();
    assert_eq!(status, StatusCode::OK);

    // Busy mark is released once the request completes
    let again = {
        let app = app.clone();
        let token = token.clone();
        tokio::spawn(async move {
            send(&app, Method::POST, "/routes/analyze", Some(&token), Some(route)).await
        })
    };
    started.notified().await;
    release.notify_one();
    let (status, _) = again.await.unwrap();
    assert_eq!(status, StatusCode::OK);
}
