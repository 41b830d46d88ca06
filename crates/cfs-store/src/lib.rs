//! # Configuration Store
//!
//! The core component of the Configuration Store Service: an ordered,
//! in-memory set of [`Config`](cfs_domain::Config) records bound to a flat
//! JSON file on disk.
//!
//! Every mutating operation persists the full record set before reporting
//! success, so the file is the durable source of truth across restarts.
//! Reads and dotted-path searches run against consistent in-memory
//! snapshots; identical search queries are memoized until the next
//! mutation.
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ConfigStore`] | The file-backed store with CRUD and search |

pub mod store;

pub use store::ConfigStore;
