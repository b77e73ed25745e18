//! Ordered room table for one floor-sheet
//!
//! Row order is storage order and is preserved across mutations and
//! write-back. Duplicate room numbers may exist in storage; lookups always
//! resolve to the first occurrence, and only display filtering dedups.

use crate::row::RoomRow;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Canonical column order for write-back
pub const CANONICAL_HEADER: [&str; 6] = [
    "room",
    "name",
    "status",
    "prev_room",
    "prev_status",
    "new_room",
];

/// Ordered sequence of [`RoomRow`]s for one floor-sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTable {
    rows: Vec<RoomRow>,
}

impl RoomTable {
    /// Create an empty table
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from rows, preserving order
    #[inline]
    #[must_use]
    pub fn from_rows(rows: Vec<RoomRow>) -> Self {
        Self { rows }
    }

    /// All rows in storage order
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[RoomRow] {
        &self.rows
    }

    /// Mutable access to all rows
    #[inline]
    pub fn rows_mut(&mut self) -> &mut [RoomRow] {
        &mut self.rows
    }

    /// Number of rows (including duplicates)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first row with the given room number
    ///
    /// Duplicate room numbers always resolve to the first occurrence; this is
    /// the tie-break every caller must share.
    #[inline]
    #[must_use]
    pub fn position(&self, room: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.room == room)
    }

    /// First row with the given room number, if any
    #[inline]
    #[must_use]
    pub fn get(&self, room: &str) -> Option<&RoomRow> {
        self.position(room).map(|i| &self.rows[i])
    }

    /// All room numbers in storage order (duplicates included)
    #[must_use]
    pub fn rooms(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.room.as_str()).collect()
    }

    /// Rows for display: first occurrence of each room number only
    ///
    /// Storage keeps every occurrence; only the rendered board dedups.
    #[must_use]
    pub fn display_rows(&self) -> Vec<&RoomRow> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter(|r| seen.insert(r.room.as_str()))
            .collect()
    }

    /// Serialize to cell grid in [`CANONICAL_HEADER`] column order
    #[must_use]
    pub fn to_cells(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.room.clone(),
                    r.name.clone(),
                    r.status.clone(),
                    r.prev_room.clone(),
                    r.prev_status.clone(),
                    r.new_room.clone(),
                ]
            })
            .collect()
    }
}

impl FromIterator<RoomRow> for RoomTable {
    fn from_iter<I: IntoIterator<Item = RoomRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
