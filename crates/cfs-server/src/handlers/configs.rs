//! CRUD handlers for configuration records

use super::{ApiError, internal_error, not_found};
use crate::ServerState;
use crate::models::{CreatedBody, DeletedBody, UpdatedBody};
use cfs_domain::Config;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, delete, get, patch, post, put};

/// List all configuration records
///
/// 200 with the full record set in insertion order, 404 when the store is
/// empty.
#[get("/configs")]
pub async fn list_configs(state: &State<ServerState>) -> Result<Json<Vec<Config>>, ApiError> {
    let configs = state.store.list().await;
    if configs.is_empty() {
        return Err(not_found("No configs found"));
    }
    Ok(Json(configs))
}

/// Create a configuration record
///
/// 201 with `{"Created": name}`. Duplicate names are accepted. A persist
/// failure is 500: the record is in memory but not on disk.
#[post("/configs", format = "json", data = "<config>")]
pub async fn create_config(
    state: &State<ServerState>,
    config: Json<Config>,
) -> Result<(Status, Json<CreatedBody>), ApiError> {
    match state.store.create(config.into_inner()).await {
        Ok(created) => {
            state.metrics.record_create();
            Ok((
                Status::Created,
                Json(CreatedBody {
                    created: created.name,
                }),
            ))
        }
        Err(source) => {
            state.metrics.record_failure();
            Err(internal_error(format!("Unable to create config: {source}")))
        }
    }
}

/// Fetch the first record with the given name
#[get("/configs/<name>")]
pub async fn get_config(
    state: &State<ServerState>,
    name: &str,
) -> Result<Json<Config>, ApiError> {
    match state.store.get(name).await {
        Some(config) => Ok(Json(config)),
        None => Err(not_found(format!("Config {name} not found"))),
    }
}

/// Replace the first record with the given name
#[put("/configs/<name>", format = "json", data = "<config>")]
pub async fn update_config(
    state: &State<ServerState>,
    name: &str,
    config: Json<Config>,
) -> Result<Json<UpdatedBody>, ApiError> {
    apply_update(state, name, config.into_inner()).await
}

/// PATCH alias for [`update_config`]
#[patch("/configs/<name>", format = "json", data = "<config>")]
pub async fn patch_config(
    state: &State<ServerState>,
    name: &str,
    config: Json<Config>,
) -> Result<Json<UpdatedBody>, ApiError> {
    apply_update(state, name, config.into_inner()).await
}

async fn apply_update(
    state: &State<ServerState>,
    name: &str,
    config: Config,
) -> Result<Json<UpdatedBody>, ApiError> {
    match state.store.update(name, config).await {
        Ok(Some(updated)) => {
            state.metrics.record_update();
            Ok(Json(UpdatedBody {
                updated: updated.name,
            }))
        }
        Ok(None) => Err(not_found(format!("Config {name} not found"))),
        Err(source) => {
            state.metrics.record_failure();
            Err(internal_error(format!("Unable to update config: {source}")))
        }
    }
}

/// Delete all records with the given name
///
/// 200 with `{"Deleted": name, "total": count}`, 404 when nothing matched.
#[delete("/configs/<name>")]
pub async fn delete_config(
    state: &State<ServerState>,
    name: &str,
) -> Result<Json<DeletedBody>, ApiError> {
    match state.store.delete(name).await {
        Ok(0) => Err(not_found(format!("Config {name} not found"))),
        Ok(total) => {
            state.metrics.record_delete();
            Ok(Json(DeletedBody {
                deleted: name.to_string(),
                total,
            }))
        }
        Err(source) => {
            state.metrics.record_failure();
            Err(internal_error(format!("Unable to delete config: {source}")))
        }
    }
}
