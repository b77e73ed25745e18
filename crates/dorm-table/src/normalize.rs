//! Raw sheet rows → [`RoomTable`]
//!
//! Sheets arrive with free-form headers: Korean column names, stray
//! whitespace, sometimes a UTF-8 BOM glued to the first header. This module
//! pins all of that down at the ingestion boundary so the rest of the
//! workspace only ever sees the six canonical fields.

use crate::row::RoomRow;
use crate::table::RoomTable;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One raw sheet row: header → cell, in sheet column order
pub type RawRow = IndexMap<String, String>;

/// Korean header → canonical field name
static HEADER_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("호실", "room"),
        ("이름", "name"),
        ("상태", "status"),
        ("이전호실", "prev_room"),
        ("이전상태", "prev_status"),
        ("이동호실", "new_room"),
    ])
});

/// Schema resolution failure at the ingestion boundary
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// No header resolves to the `room` key column after cleanup/renaming
    #[error("no 'room' column resolvable from sheet headers: {headers:?}")]
    MissingRoomColumn {
        /// The cleaned headers that were actually seen
        headers: Vec<String>,
    },
}

/// Strip surrounding whitespace and any BOM characters from a header cell
fn clean_header(raw: &str) -> String {
    raw.replace('\u{feff}', "").trim().to_string()
}

/// Map a raw header to its canonical field name, if it is one of the six
fn canonical_field(raw: &str) -> Option<&'static str> {
    let cleaned = clean_header(raw);
    if let Some(&renamed) = HEADER_ALIASES.get(cleaned.as_str()) {
        return Some(renamed);
    }
    // A previously written-back sheet already carries canonical headers.
    crate::table::CANONICAL_HEADER
        .iter()
        .find(|&&c| c == cleaned)
        .copied()
}

/// Normalize raw sheet rows into a [`RoomTable`]
///
/// # Steps
/// 1. Clean every header (trim + strip BOM) and rename via the alias table
/// 2. Default each of the six canonical fields to `""` when absent
/// 3. Trim `room` and drop rows whose trimmed `room` is empty
///
/// # Errors
/// [`SchemaError::MissingRoomColumn`] when rows exist but no header resolves
/// to `room`. An empty input is not an error; it yields an empty table, as
/// does a sheet whose every `room` cell is blank.
pub fn normalize(raw: &[RawRow]) -> Result<RoomTable, SchemaError> {
    if raw.is_empty() {
        return Ok(RoomTable::new());
    }

    let mut room_column_seen = false;
    let mut rows = Vec::with_capacity(raw.len());

    for raw_row in raw {
        let mut fields: HashMap<&'static str, String> = HashMap::new();
        for (header, cell) in raw_row {
            if let Some(canonical) = canonical_field(header) {
                if canonical == "room" {
                    room_column_seen = true;
                }
                // First matching header wins when two raw headers collide.
                fields.entry(canonical).or_insert_with(|| cell.clone());
            }
        }

        let take = |fields: &mut HashMap<&'static str, String>, key| {
            fields.remove(key).unwrap_or_default()
        };

        let row = RoomRow {
            room: take(&mut fields, "room").trim().to_string(),
            name: take(&mut fields, "name"),
            status: take(&mut fields, "status"),
            prev_room: take(&mut fields, "prev_room"),
            prev_status: take(&mut fields, "prev_status"),
            new_room: take(&mut fields, "new_room"),
        };

        if !row.room.is_empty() {
            rows.push(row);
        }
    }

    if !room_column_seen {
        let headers = raw
            .first()
            .map(|r| r.keys().map(|h| clean_header(h)).collect())
            .unwrap_or_default();
        return Err(SchemaError::MissingRoomColumn { headers });
    }

    Ok(RoomTable::from_rows(rows))
}
