//! Dorm Engine
//!
//! The room-state mutation engine and the floor summary aggregator.
//!
//! Both halves are pure functions over a [`dorm_table::RoomTable`]:
//!
//! - [`apply_transition`]: (table, room, transition, name, target) → new table
//! - [`summarize`]: (table, floor selector) → per-category counts + listings
//!
//! No I/O happens here; loading and write-back live in `dorm-store`, and the
//! per-request cycle that strings them together lives in `dorm-board`.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod apply;
mod summary;
mod transition;

// Re-exports
pub use apply::{apply_transition, TransitionError};
pub use summary::{summarize, FloorSelector, MoveClass, MoveEntry, RoomEntry, Summary};
pub use transition::Transition;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
