//! # Configuration Store Service - HTTP Transport
//!
//! Thin Rocket glue over the [`ConfigStore`](cfs_store::ConfigStore):
//! handlers translate store results into HTTP responses and record
//! operation metrics; all record logic lives in the store.
//!
//! ## Routes
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /api/v1/configs` | List all configuration records |
//! | `POST /api/v1/configs` | Create a configuration record |
//! | `GET /api/v1/configs/<name>` | Fetch the first record with the name |
//! | `PUT /api/v1/configs/<name>` | Replace the first record with the name |
//! | `PATCH /api/v1/configs/<name>` | Same as PUT |
//! | `DELETE /api/v1/configs/<name>` | Delete all records with the name |
//! | `GET /api/v1/search?query=k1.k2=v` | Dotted-path search |
//! | `GET /` | Welcome message |
//! | `GET /health`, `/ready`, `/status` | Probes |
//! | `GET /metrics` | Operation counters |

pub mod handlers;
pub mod metrics;
pub mod models;

use anyhow::Context;
use cfs_infrastructure::{ConfigLoader, init_logging};
use cfs_store::ConfigStore;
use metrics::ServiceMetrics;
use rocket::{Build, Rocket, routes};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Mount prefix for the config API
pub const API_PREFIX: &str = "/api/v1";

/// Shared state injected into every handler
///
/// The store is constructed at startup and passed in explicitly; there is
/// no process-wide store instance.
#[derive(Clone)]
pub struct ServerState {
    /// The configuration store
    pub store: Arc<ConfigStore>,
    /// Operation counters exposed at /metrics
    pub metrics: Arc<ServiceMetrics>,
}

impl ServerState {
    /// Create server state around a store
    pub fn new(store: Arc<ConfigStore>) -> Self {
        Self {
            store,
            metrics: Arc::new(ServiceMetrics::new()),
        }
    }
}

/// Build the Rocket application with all routes mounted
pub fn rocket(state: ServerState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount(
            API_PREFIX,
            routes![
                handlers::configs::list_configs,
                handlers::configs::create_config,
                handlers::configs::get_config,
                handlers::configs::update_config,
                handlers::configs::patch_config,
                handlers::configs::delete_config,
                handlers::search::search_configs,
            ],
        )
        .mount(
            "/",
            routes![
                handlers::index::root,
                handlers::health::get_healthcheck,
                handlers::health::get_readycheck,
                handlers::health::get_statuscheck,
                metrics::get_metrics,
            ],
        )
}

/// Load settings, initialize the store, and serve until shutdown
///
/// A missing or malformed backing file aborts startup: the service never
/// silently starts with an empty store.
pub async fn run(config_path: Option<&Path>) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let app_config = loader.load().context("Failed to load settings")?;

    init_logging(&app_config.logging).context("Failed to initialize logging")?;

    let store = Arc::new(ConfigStore::new(&app_config.store.path));
    store
        .load()
        .await
        .context("Failed to load the configuration store")?;

    let state = ServerState::new(store);

    info!(
        "Config service listening on {}:{}",
        app_config.server.host, app_config.server.port
    );

    let figment = rocket::Config::figment()
        .merge(("address", app_config.server.host.clone()))
        .merge(("port", app_config.server.port));

    rocket(state)
        .configure(figment)
        .launch()
        .await
        .context("Server terminated with an error")?;

    info!("Config service shutdown");
    Ok(())
}
