//! File-backed configuration store
//!
//! Owns the ordered in-memory record set and its on-disk JSON
//! representation. Single-writer discipline: mutating operations hold the
//! write lock across the whole read-modify-persist sequence, while reads
//! and searches share read locks and observe consistent snapshots.

use cfs_domain::{Config, Error, Result, SearchQuery};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info};

/// File-backed store of configuration records
///
/// Constructed bound to a path and populated with [`load`](Self::load);
/// a missing or malformed backing file is a load error, never a silently
/// empty store. Every mutating operation rewrites the whole file (via a
/// temp file + atomic rename) before returning success.
///
/// Insertion order is preserved and observable through `list` and
/// `search`. Names are not unique: `get` and `update` act on the first
/// match, `delete` removes all matches.
pub struct ConfigStore {
    /// Backing file the record set is bound to
    path: PathBuf,
    /// Ordered record set
    records: RwLock<Vec<Config>>,
    /// Memoized search results, keyed by raw query string
    ///
    /// Lives for the life of the store instance and is cleared on every
    /// mutation. Lock ordering: `records` before `memo`.
    memo: Mutex<HashMap<String, Vec<Config>>>,
}

impl ConfigStore {
    /// Create a store bound to the given backing file
    ///
    /// The store starts empty; call [`load`](Self::load) to populate it
    /// from disk before serving.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            records: RwLock::new(Vec::new()),
            memo: Mutex::new(HashMap::new()),
        }
    }

    /// The backing file path this store is bound to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the record set from the backing file
    ///
    /// The file must hold a JSON array of objects each carrying `name` and
    /// `metadata`; unknown fields are ignored. All-or-nothing: the
    /// in-memory set is only replaced once the whole file parsed, so a
    /// failed load leaves existing state untouched.
    ///
    /// Fails with [`Error::NotFound`] when the file does not exist and
    /// [`Error::Format`] when the content is not valid JSON or has the
    /// wrong shape.
    pub async fn load(&self) -> Result<()> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::not_found(format!(
                    "Database file '{}'",
                    self.path.display()
                )));
            }
            Err(source) => return Err(source.into()),
        };

        let loaded: Vec<Config> = serde_json::from_str(&content).map_err(|source| {
            Error::format(format!(
                "Invalid database file '{}': {source}",
                self.path.display()
            ))
        })?;

        let count = loaded.len();
        {
            let mut records = self.records.write().await;
            *records = loaded;
            self.memo.lock().await.clear();
        }

        info!("Loaded {count} configs from {}", self.path.display());
        Ok(())
    }

    /// All records, in insertion order
    pub async fn list(&self) -> Vec<Config> {
        self.records.read().await.clone()
    }

    /// First record with the given name (exact, case-sensitive)
    pub async fn get(&self, name: &str) -> Option<Config> {
        self.records
            .read()
            .await
            .iter()
            .find(|config| config.name == name)
            .cloned()
    }

    /// Number of records currently held
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Number of memoized search queries
    pub async fn cached_queries(&self) -> usize {
        self.memo.lock().await.len()
    }

    /// Append a record and persist
    ///
    /// Duplicate names are permitted; the new record simply lands at the
    /// end of the sequence. On a persist failure the record is already in
    /// memory and [`Error::Persist`] is returned.
    pub async fn create(&self, config: Config) -> Result<Config> {
        let mut records = self.records.write().await;
        records.push(config.clone());

        if let Err(source) = self.persist(&records) {
            error!(
                "Failed to persist after creating config {}: {source}",
                config.name
            );
            return Err(source);
        }
        self.memo.lock().await.clear();

        info!("Created config {}", config.name);
        Ok(config)
    }

    /// Replace the first record with the given name, preserving its slot
    ///
    /// Returns `Ok(None)` without mutating or persisting when no record
    /// matches.
    pub async fn update(&self, name: &str, config: Config) -> Result<Option<Config>> {
        let mut records = self.records.write().await;
        let Some(index) = records.iter().position(|existing| existing.name == name) else {
            info!("Config {name} not found");
            return Ok(None);
        };
        records[index] = config.clone();

        if let Err(source) = self.persist(&records) {
            error!("Failed to persist after updating config {name}: {source}");
            return Err(source);
        }
        self.memo.lock().await.clear();

        info!("Updated config {}", config.name);
        Ok(Some(config))
    }

    /// Remove ALL records with the given name and persist
    ///
    /// Returns how many records were removed; 0 is not an error. The
    /// persist step runs even when nothing was removed.
    pub async fn delete(&self, name: &str) -> Result<u64> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|config| config.name != name);
        let removed = (before - records.len()) as u64;

        if let Err(source) = self.persist(&records) {
            error!("Failed to persist after deleting config {name}: {source}");
            return Err(source);
        }
        self.memo.lock().await.clear();

        info!("Deleted {removed} configs for {name}");
        Ok(removed)
    }

    /// Records matching a dotted-path query, in insertion order
    ///
    /// Fails with [`Error::Validation`] on a malformed query (no `=` or an
    /// empty key path). Results for identical query strings are memoized
    /// until the next mutation.
    pub async fn search(&self, query: &str) -> Result<Vec<Config>> {
        let query = SearchQuery::parse(query)?;
        debug!("Searching for {}", query.raw());

        {
            let memo = self.memo.lock().await;
            if let Some(results) = memo.get(query.raw()) {
                debug!("Memo hit for {}", query.raw());
                return Ok(results.clone());
            }
        }

        let records = self.records.read().await;
        let results: Vec<Config> = records
            .iter()
            .filter(|config| query.matches(config))
            .cloned()
            .collect();

        // Insert while still holding the read guard so a concurrent
        // mutation cannot clear the memo between compute and insert.
        self.memo
            .lock()
            .await
            .insert(query.raw().to_string(), results.clone());

        info!("Found {} configs for {}", results.len(), query.raw());
        Ok(results)
    }

    /// Serialize the record set and atomically replace the backing file
    ///
    /// Writes to a temp file in the target directory and renames it over
    /// the backing file, so a crash mid-write never leaves a truncated
    /// store visible.
    fn persist(&self, records: &[Config]) -> Result<()> {
        let payload = serde_json::to_vec(records)
            .map_err(|source| Error::persist_with_source("Failed to serialize records", source))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|source| {
            Error::persist_with_source(
                format!("Failed to create temp file in '{}'", dir.display()),
                source,
            )
        })?;
        tmp.write_all(&payload).map_err(|source| {
            Error::persist_with_source(
                format!("Failed to write temp file for '{}'", self.path.display()),
                source,
            )
        })?;
        tmp.persist(&self.path).map_err(|source| {
            Error::persist_with_source(
                format!("Failed to replace '{}'", self.path.display()),
                source.error,
            )
        })?;

        Ok(())
    }
}
