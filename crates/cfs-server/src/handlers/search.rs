//! Dotted-path search handler

use super::{ApiError, bad_request, internal_error, not_found};
use crate::ServerState;
use cfs_domain::Config;
use rocket::serde::json::Json;
use rocket::{State, get};

/// Search records with a `k1.k2...kn=v` query
///
/// 200 with the matches in insertion order, 404 when nothing matched, 400
/// when the query is missing or malformed.
#[get("/search?<query>")]
pub async fn search_configs(
    state: &State<ServerState>,
    query: Option<&str>,
) -> Result<Json<Vec<Config>>, ApiError> {
    let Some(query) = query else {
        return Err(bad_request("Invalid Query"));
    };

    match state.store.search(query).await {
        Ok(results) => {
            state.metrics.record_search();
            if results.is_empty() {
                return Err(not_found("No Config Found"));
            }
            Ok(Json(results))
        }
        Err(source) if source.is_validation() => Err(bad_request(source.to_string())),
        Err(source) => {
            state.metrics.record_failure();
            Err(internal_error(format!("Search failed: {source}")))
        }
    }
}
