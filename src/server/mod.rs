//! # Trigger Endpoint
//!
//! Minimal HTTP surface wrapping the dispatcher. An external time-based
//! trigger POSTs to `/trigger-scheduled-reminders`; the response carries the
//! aggregate counters only. Individual delivery failures never surface
//! here.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use crate::features::dispatch::BatchRunner;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use log::error;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared state for the trigger endpoint.
pub struct AppState {
    pub runner: BatchRunner,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TriggerResponse {
    message: &'static str,
    profiles_checked: usize,
    reminders_sent: usize,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Build the router. CORS preflight is answered by the layer with an empty
/// success acknowledgment, mirroring the browser-facing deployment this
/// replaces.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/trigger-scheduled-reminders", post(trigger_reminders))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn trigger_reminders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TriggerResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.runner.run(Utc::now()).await {
        Ok(outcome) => Ok(Json(TriggerResponse {
            message: "Scheduled reminders processed successfully.",
            profiles_checked: outcome.profiles_checked,
            reminders_sent: outcome.reminders_sent,
        })),
        Err(e) => {
            error!("dispatch run failed: {e:#}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error in scheduler".to_string(),
                }),
            ))
        }
    }
}
