//! One room's record
//!
//! A row carries the six canonical fields plus the status tokens the sheet
//! stores verbatim. Status stays a plain string on the row: the sheet is the
//! source of truth and unknown tokens must round-trip untouched.

use serde::{Deserialize, Serialize};

/// Literal status tokens as stored in the sheet.
pub mod status {
    /// Normal / occupied (the empty string).
    pub const OCCUPIED: &str = "";
    /// Checked out.
    pub const CHECKOUT: &str = "퇴소";
    /// Overnight leave.
    pub const LEAVE: &str = "외박";
    /// New check-in.
    pub const NEW: &str = "신규";
    /// Moved-in marker on the destination room.
    pub const MOVED: &str = "이동";
}

/// One room's record within a floor-sheet
///
/// All six fields are always present; a missing source cell normalizes to the
/// empty string. `prev_room`/`prev_status` snapshot the room/status from just
/// before the last mutation; `new_room` records a move destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRow {
    /// Room number, the key within a floor-sheet (trimmed, non-empty)
    pub room: String,
    /// Occupant name/identifier; empty means vacant or just-vacated
    pub name: String,
    /// Current status token (see [`status`]); empty means occupied/normal
    pub status: String,
    /// Room value before the last mutation
    pub prev_room: String,
    /// Status value before the last mutation
    pub prev_status: String,
    /// Move destination recorded when a move originates or completes
    pub new_room: String,
}

impl RoomRow {
    /// Create a row with just a room number, all other fields empty
    #[inline]
    #[must_use]
    pub fn vacant(room: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            ..Self::default()
        }
    }

    /// Create an occupied row (room + name, normal status)
    #[inline]
    #[must_use]
    pub fn occupied(room: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether the trimmed occupant name is empty
    #[inline]
    #[must_use]
    pub fn is_vacant(&self) -> bool {
        self.name.trim().is_empty()
    }
}
