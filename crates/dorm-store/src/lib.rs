//! Dorm Store
//!
//! The record-store seam between the dashboard and its spreadsheet backing.
//!
//! - [`RecordStore`]: the async trait the dashboard talks to
//! - [`SheetsStore`]: Google Sheets v4 REST implementation
//! - [`MemoryStore`]: in-process implementation for tests and offline demos
//! - [`StoreConfig`]: credentials and spreadsheet identifiers
//!
//! Writes are always full-table overwrites (clear, then update). There is no
//! optimistic-concurrency check: last writer wins, and two operators editing
//! the same floor concurrently will silently clobber each other. That is a
//! known limitation of the backing store model, not something this crate
//! papers over.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod config;
mod memory;
mod sheets;
mod store;

// Re-exports
pub use config::{ConfigError, StoreConfig, TOKEN_ENV};
pub use memory::MemoryStore;
pub use sheets::SheetsStore;
pub use store::{RecordStore, StoreError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
