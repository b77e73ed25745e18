//! The dashboard edit cycle
//!
//! [`Dashboard`] owns a record store and runs one load → mutate → write →
//! summarize cycle per call. The engine mutation is computed fully in memory
//! before any write is attempted, so a store failure never leaves a partial
//! table behind.

use dorm_engine::{apply_transition, summarize, FloorSelector, Summary, Transition, TransitionError};
use dorm_store::{RecordStore, StoreError};
use dorm_table::{normalize, RoomRow, RoomTable, SchemaError, CANONICAL_HEADER};

/// Operator-facing failure of one dashboard cycle
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// Sheet headers did not resolve a room column
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// The spreadsheet has no floor-sheets at all
    #[error("no floor-sheets available")]
    NoFloors,

    /// The floor-sheet normalized to zero rooms
    #[error("no rooms registered on floor '{0}'")]
    EmptyTable(String),

    /// The requested transition was rejected by the engine
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// Backing store failure; fatal for this cycle, not retried
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// One operator edit: which room, which action, which inputs
#[derive(Debug, Clone)]
pub struct EditRequest {
    /// Selected room number
    pub room: String,
    /// Requested transition
    pub transition: Transition,
    /// Name input (used by new check-in, overnight leave, and move)
    pub new_name: String,
    /// Move destination; only meaningful for [`Transition::Move`]
    pub target_room: Option<String>,
}

/// One floor's state as rendered to the operator
#[derive(Debug, Clone)]
pub struct FloorView {
    /// The floor this view was computed for
    pub selector: FloorSelector,
    /// Display rows (deduped on room, first occurrence wins)
    pub rows: Vec<RoomRow>,
    /// Aggregated counts and listings
    pub summary: Summary,
}

/// The dashboard orchestrator
///
/// Stateless between calls: every method runs a complete cycle against the
/// backing store.
#[derive(Debug)]
pub struct Dashboard<S> {
    store: S,
}

impl<S: RecordStore> Dashboard<S> {
    /// Create a dashboard over a record store
    #[inline]
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Titles of all floor-sheets
    ///
    /// # Errors
    /// [`BoardError::NoFloors`] when the spreadsheet has no sheets.
    pub async fn floors(&self) -> Result<Vec<String>, BoardError> {
        let floors = self.store.list_sheets().await?;
        if floors.is_empty() {
            return Err(BoardError::NoFloors);
        }
        Ok(floors)
    }

    /// Load and normalize one floor's table
    async fn load_table(&self, selector: &FloorSelector) -> Result<RoomTable, BoardError> {
        let raw = self.store.load_rows(selector.title()).await?;
        let table = normalize(&raw)?;
        if table.is_empty() {
            return Err(BoardError::EmptyTable(selector.title().to_string()));
        }
        tracing::debug!(floor = %selector, rooms = table.len(), "loaded floor table");
        Ok(table)
    }

    /// Read-only view of one floor: board rows plus summary
    pub async fn view(&self, selector: &FloorSelector) -> Result<FloorView, BoardError> {
        let table = self.load_table(selector).await?;
        Ok(Self::view_of(selector, &table))
    }

    /// Apply one operator edit and write the result back
    ///
    /// The mutation is computed in memory first; the store write only happens
    /// after the engine succeeded, and the returned view reflects the table
    /// that was actually written.
    pub async fn apply(
        &self,
        selector: &FloorSelector,
        request: &EditRequest,
    ) -> Result<FloorView, BoardError> {
        let table = self.load_table(selector).await?;

        let next = apply_transition(
            &table,
            &request.room,
            request.transition,
            &request.new_name,
            request.target_room.as_deref(),
        )?;
        tracing::info!(
            floor = %selector,
            room = %request.room,
            transition = %request.transition,
            "applied transition"
        );

        let header: Vec<String> = CANONICAL_HEADER.iter().map(|s| s.to_string()).collect();
        self.store
            .write_rows(selector.title(), &header, &next.to_cells())
            .await?;

        Ok(Self::view_of(selector, &next))
    }

    fn view_of(selector: &FloorSelector, table: &RoomTable) -> FloorView {
        FloorView {
            selector: selector.clone(),
            rows: table.display_rows().into_iter().cloned().collect(),
            summary: summarize(table, selector),
        }
    }
}

/// Default transition proposed to the operator for a row
///
/// Presentation policy, not an engine rule: reset when the row already has a
/// status, overnight leave otherwise.
#[inline]
#[must_use]
pub fn suggested_transition(row: &RoomRow) -> Transition {
    if row.status.is_empty() {
        Transition::OvernightLeave
    } else {
        Transition::Reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_follows_current_status() {
        let row = RoomRow::occupied("A301", "Kim");
        assert_eq!(suggested_transition(&row), Transition::OvernightLeave);

        let mut row = row;
        row.status = "외박".to_string();
        assert_eq!(suggested_transition(&row), Transition::Reset);
    }
}
