//! Probe handlers

use crate::models::{HeartbeatResult, StatusResult};
use rocket::get;
use rocket::serde::json::Json;

/// Liveness probe
#[get("/health")]
pub fn get_healthcheck() -> Json<HeartbeatResult> {
    Json(HeartbeatResult { is_alive: true })
}

/// Readiness probe
#[get("/ready")]
pub fn get_readycheck() -> Json<StatusResult> {
    Json(StatusResult { is_alive: true })
}

/// Status probe
#[get("/status")]
pub fn get_statuscheck() -> Json<StatusResult> {
    Json(StatusResult { is_alive: true })
}
