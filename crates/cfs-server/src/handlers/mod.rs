//! HTTP request handlers
//!
//! Each handler maps a store outcome onto the HTTP contract: not-found
//! conditions become 404, malformed input 400, and persistence failures
//! 500 (never conflated with not-found).

/// CRUD handlers for configuration records
pub mod configs;
/// Probe handlers
pub mod health;
/// Root welcome handler
pub mod index;
/// Dotted-path search handler
pub mod search;

use crate::models::ErrorBody;
use rocket::http::Status;
use rocket::serde::json::Json;

/// Error arm shared by all handlers
pub type ApiError = (Status, Json<ErrorBody>);

/// 404 with a detail message
pub fn not_found<S: Into<String>>(detail: S) -> ApiError {
    (Status::NotFound, Json(ErrorBody::new(detail)))
}

/// 400 with a detail message
pub fn bad_request<S: Into<String>>(detail: S) -> ApiError {
    (Status::BadRequest, Json(ErrorBody::new(detail)))
}

/// 500 with a detail message
pub fn internal_error<S: Into<String>>(detail: S) -> ApiError {
    (Status::InternalServerError, Json(ErrorBody::new(detail)))
}
