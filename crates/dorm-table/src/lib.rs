//! Dorm Table
//!
//! Typed room records for one floor-sheet, plus the normalization step that
//! turns raw spreadsheet rows into a [`RoomTable`].
//!
//! # Core Concepts
//!
//! - [`RoomRow`]: one room's record with the six canonical fields
//! - [`RoomTable`]: ordered rows for one floor-sheet, keyed by room number
//! - [`normalize`]: header cleanup, alias renaming, and field defaulting
//! - [`status`]: the literal sheet status tokens
//!
//! # Example
//!
//! ```rust,ignore
//! use dorm_table::{normalize, RawRow};
//!
//! let table = normalize(&raw_rows)?;
//! for row in table.display_rows() {
//!     println!("{} {} {}", row.room, row.name, row.status);
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod normalize;
mod row;
mod table;

// Re-exports
pub use normalize::{normalize, RawRow, SchemaError};
pub use row::{status, RoomRow};
pub use table::{RoomTable, CANONICAL_HEADER};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
