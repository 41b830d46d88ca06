//! Operation counters
//!
//! Lightweight in-process metrics: lock-free counters incremented by the
//! handlers and exposed as JSON at `/metrics`, together with the store's
//! current record and memo sizes.

use crate::ServerState;
use rocket::serde::json::Json;
use rocket::{State, get};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free operation counters
#[derive(Debug, Default)]
pub struct ServiceMetrics {
    configs_created: AtomicU64,
    configs_updated: AtomicU64,
    configs_deleted: AtomicU64,
    searches: AtomicU64,
    failures: AtomicU64,
}

impl ServiceMetrics {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful create
    pub fn record_create(&self) {
        self.configs_created.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful update
    pub fn record_update(&self) {
        self.configs_updated.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful delete
    pub fn record_delete(&self) {
        self.configs_deleted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an executed search
    pub fn record_search(&self) {
        self.searches.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request that failed with a server error
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Current counter values
    pub fn counters(&self) -> MetricsCounters {
        MetricsCounters {
            configs_created: self.configs_created.load(Ordering::Relaxed),
            configs_updated: self.configs_updated.load(Ordering::Relaxed),
            configs_deleted: self.configs_deleted.load(Ordering::Relaxed),
            searches: self.searches.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of the operation counters
#[derive(Debug, Serialize)]
pub struct MetricsCounters {
    /// Successful creates since startup
    pub configs_created: u64,
    /// Successful updates since startup
    pub configs_updated: u64,
    /// Successful deletes since startup
    pub configs_deleted: u64,
    /// Searches executed since startup
    pub searches: u64,
    /// Requests that failed with a server error
    pub failures: u64,
}

/// Metrics response including store gauges
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    /// Operation counters since startup
    #[serde(flatten)]
    pub counters: MetricsCounters,
    /// Records currently held by the store
    pub stored_configs: usize,
    /// Memoized search queries currently held
    pub cached_queries: usize,
}

/// Metrics endpoint
#[get("/metrics")]
pub async fn get_metrics(state: &State<ServerState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        counters: state.metrics.counters(),
        stored_configs: state.store.record_count().await,
        cached_queries: state.store.cached_queries().await,
    })
}
