//! Floor summary aggregation
//!
//! Partitions a table by status and classifies moves relative to the floor
//! currently viewed. Comparison is always on the first two characters of a
//! room string (building letter + floor digit), the "prefix selector".

use dorm_table::{status, RoomRow, RoomTable};
use serde::{Deserialize, Serialize};

/// The floor-sheet currently viewed (a sheet title like `A3`)
///
/// First character is the building, the remainder the floor id. Prefix
/// comparisons use the first two characters, char-boundary safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorSelector {
    raw: String,
}

impl FloorSelector {
    /// Wrap a sheet title
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self { raw: title.into() }
    }

    /// Full sheet title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.raw
    }

    /// Building identifier: the first character of the title
    #[must_use]
    pub fn building(&self) -> String {
        self.raw.chars().take(1).collect()
    }

    /// Floor identifier: everything after the first character
    #[must_use]
    pub fn floor_id(&self) -> String {
        self.raw.chars().skip(1).collect()
    }

    /// The two-character prefix used to classify moves
    #[must_use]
    pub fn prefix(&self) -> String {
        prefix2(&self.raw)
    }
}

impl std::fmt::Display for FloorSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// First two characters of a room/selector string
fn prefix2(s: &str) -> String {
    s.chars().take(2).collect()
}

/// How a move relates to the viewed floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveClass {
    /// Destination on this floor, origin elsewhere
    Inbound,
    /// Origin on this floor, destination elsewhere
    Outbound,
    /// Both origin and destination on this floor
    Internal,
    /// Neither side on this floor
    Unrelated,
}

impl MoveClass {
    fn classify(entry: &MoveEntry, floor_prefix: &str) -> Self {
        let to_here = prefix2(&entry.new_room) == floor_prefix;
        let from_here = prefix2(&entry.prev_room) == floor_prefix;
        match (to_here, from_here) {
            (true, false) => Self::Inbound,
            (false, true) => Self::Outbound,
            (true, true) => Self::Internal,
            (false, false) => Self::Unrelated,
        }
    }
}

/// A checkout/leave/new listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomEntry {
    pub room: String,
    pub name: String,
}

impl RoomEntry {
    fn from_row(row: &RoomRow) -> Self {
        Self {
            room: row.room.clone(),
            name: row.name.clone(),
        }
    }
}

/// A move listing entry with its floor classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    pub prev_room: String,
    pub name: String,
    pub new_room: String,
    pub class: MoveClass,
}

/// Per-floor summary: counts and formatted listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// The selector this summary was computed against
    pub selector: FloorSelector,
    /// Rows with status `퇴소`
    pub checkout: Vec<RoomEntry>,
    /// Rows with status `외박`
    pub leave: Vec<RoomEntry>,
    /// Rows with status `신규`
    pub new: Vec<RoomEntry>,
    /// All rows with status `이동`, classified
    pub moves: Vec<MoveEntry>,
    /// Inbound + internal moves
    pub plus: usize,
    /// Outbound + internal moves
    pub minus: usize,
    /// Occupants physically present on the floor
    pub present: usize,
}

impl Summary {
    /// `"<room> <name>"` listing joined by `", "`, `"-"` when empty
    #[must_use]
    pub fn fmt_rooms(entries: &[RoomEntry]) -> String {
        if entries.is_empty() {
            return "-".to_string();
        }
        entries
            .iter()
            .map(|e| format!("{} {}", e.room, e.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `"<prev_room> <name> → <new_room>"` listing for all moves, `"-"` when empty
    #[must_use]
    pub fn fmt_moves(&self) -> String {
        if self.moves.is_empty() {
            return "-".to_string();
        }
        self.moves
            .iter()
            .map(|e| format!("{} {} → {}", e.prev_room, e.name, e.new_room))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Compute the floor summary for a table
///
/// Partitions by status into checkout/leave/new/move subsets; classifies each
/// move against `selector.prefix()`; `plus = inbound + internal`, `minus =
/// outbound + internal`; `present` counts rows with a non-blank trimmed name
/// whose status is neither `퇴소` nor `외박`.
#[must_use]
pub fn summarize(table: &RoomTable, selector: &FloorSelector) -> Summary {
    let floor_prefix = selector.prefix();

    let mut checkout = Vec::new();
    let mut leave = Vec::new();
    let mut new = Vec::new();
    let mut moves = Vec::new();
    let mut present = 0usize;

    for row in table.rows() {
        match row.status.as_str() {
            status::CHECKOUT => checkout.push(RoomEntry::from_row(row)),
            status::LEAVE => leave.push(RoomEntry::from_row(row)),
            status::NEW => new.push(RoomEntry::from_row(row)),
            status::MOVED => {
                let mut entry = MoveEntry {
                    prev_room: row.prev_room.clone(),
                    name: row.name.clone(),
                    new_room: row.new_room.clone(),
                    class: MoveClass::Unrelated,
                };
                entry.class = MoveClass::classify(&entry, &floor_prefix);
                moves.push(entry);
            }
            _ => {}
        }

        let away = row.status == status::CHECKOUT || row.status == status::LEAVE;
        if !row.is_vacant() && !away {
            present += 1;
        }
    }

    let count = |class| moves.iter().filter(|m| m.class == class).count();
    let inbound = count(MoveClass::Inbound);
    let outbound = count(MoveClass::Outbound);
    let internal = count(MoveClass::Internal);

    Summary {
        selector: selector.clone(),
        checkout,
        leave,
        new,
        moves,
        plus: inbound + internal,
        minus: outbound + internal,
        present,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dorm_table::RoomRow;

    fn move_row(prev: &str, name: &str, new: &str) -> RoomRow {
        let mut row = RoomRow::occupied(new, name);
        row.status = "이동".to_string();
        row.prev_room = prev.to_string();
        row.new_room = new.to_string();
        row
    }

    fn status_row(room: &str, name: &str, status: &str) -> RoomRow {
        let mut row = RoomRow::occupied(room, name);
        row.status = status.to_string();
        row
    }

    #[test]
    fn selector_splits_building_and_floor() {
        let sel = FloorSelector::new("A3");
        assert_eq!(sel.building(), "A");
        assert_eq!(sel.floor_id(), "3");
        assert_eq!(sel.prefix(), "A3");

        let sel = FloorSelector::new("B12");
        assert_eq!(sel.building(), "B");
        assert_eq!(sel.floor_id(), "12");
        assert_eq!(sel.prefix(), "B1");
    }

    #[test]
    fn partitions_by_status() {
        let table = RoomTable::from_rows(vec![
            status_row("A301", "Kim", "퇴소"),
            status_row("A302", "Lee", "외박"),
            status_row("A303", "Park", "신규"),
            RoomRow::occupied("A304", "Choi"),
        ]);
        let summary = summarize(&table, &FloorSelector::new("A3"));
        assert_eq!(summary.checkout.len(), 1);
        assert_eq!(summary.leave.len(), 1);
        assert_eq!(summary.new.len(), 1);
        assert!(summary.moves.is_empty());
        // Park (신규) and Choi are present; Kim and Lee are away.
        assert_eq!(summary.present, 2);
    }

    #[test]
    fn internal_move_counts_both_ways() {
        let table = RoomTable::from_rows(vec![move_row("A301", "Kim", "A305")]);
        let summary = summarize(&table, &FloorSelector::new("A3"));
        assert_eq!(summary.moves[0].class, MoveClass::Internal);
        assert_eq!(summary.plus, 1);
        assert_eq!(summary.minus, 1);
    }

    #[test]
    fn inbound_and_outbound_moves() {
        let table = RoomTable::from_rows(vec![
            move_row("B201", "Kim", "A305"),
            move_row("A302", "Lee", "B210"),
        ]);
        let summary = summarize(&table, &FloorSelector::new("A3"));
        assert_eq!(summary.moves[0].class, MoveClass::Inbound);
        assert_eq!(summary.moves[1].class, MoveClass::Outbound);
        assert_eq!(summary.plus, 1);
        assert_eq!(summary.minus, 1);
    }

    #[test]
    fn unrelated_move_counts_nowhere_but_lists() {
        let table = RoomTable::from_rows(vec![move_row("B201", "Kim", "C105")]);
        let summary = summarize(&table, &FloorSelector::new("A3"));
        assert_eq!(summary.moves[0].class, MoveClass::Unrelated);
        assert_eq!(summary.plus, 0);
        assert_eq!(summary.minus, 0);
        // The move listing is not floor-filtered.
        assert_eq!(summary.fmt_moves(), "B201 Kim → C105");
    }

    #[test]
    fn listings_format_with_dash_for_empty() {
        let table = RoomTable::from_rows(vec![
            status_row("A301", "Kim", "퇴소"),
            status_row("A302", "Lee", "퇴소"),
        ]);
        let summary = summarize(&table, &FloorSelector::new("A3"));
        assert_eq!(Summary::fmt_rooms(&summary.checkout), "A301 Kim, A302 Lee");
        assert_eq!(Summary::fmt_rooms(&summary.leave), "-");
        assert_eq!(summary.fmt_moves(), "-");
    }

    #[test]
    fn present_requires_nonblank_trimmed_name() {
        let table = RoomTable::from_rows(vec![
            RoomRow::occupied("A301", "  "),
            RoomRow::vacant("A302"),
            RoomRow::occupied("A303", "Kim"),
        ]);
        let summary = summarize(&table, &FloorSelector::new("A3"));
        assert_eq!(summary.present, 1);
    }
}
