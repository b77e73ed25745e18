//! Dorm Board
//!
//! Orchestrates one dashboard edit cycle over a [`dorm_store::RecordStore`]:
//!
//! 1. load the floor-sheet and normalize it
//! 2. optionally apply one operator transition in memory
//! 3. write the whole table back
//! 4. recompute the floor summary
//!
//! Every invocation is a fresh cycle; no session state survives between
//! calls beyond what the backing store holds.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod board;
pub mod render;

// Re-exports for convenience
pub use board::{suggested_transition, BoardError, Dashboard, EditRequest, FloorView};
pub use render::{render_board, render_summary};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
