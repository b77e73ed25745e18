//! The record-store trait
//!
//! One floor-sheet is one named table. Loads return ordered header→cell maps
//! per row; writes replace the entire remote table. No partial updates exist
//! at this seam, by contract.

use async_trait::async_trait;
use dorm_table::RawRow;

/// Failures at the record-store boundary
///
/// All of these are fatal for the current edit cycle; nothing retries.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Transport-level failure (network, TLS, timeouts)
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the backing API
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or status text
        message: String,
    },

    /// Response payload did not decode into the expected shape
    #[error("decode error: {0}")]
    Decode(String),

    /// Named floor-sheet does not exist in the spreadsheet
    #[error("sheet not found: '{0}'")]
    SheetNotFound(String),
}

/// Tabular backing store for floor-sheets
///
/// # Contract
/// - `load_rows` zips the header row with each data row; short data rows pad
///   with empty strings, excess cells are dropped
/// - `write_rows` is a full overwrite of the named sheet: previous contents
///   are gone after it returns `Ok`
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Titles of all floor-sheets, in spreadsheet order
    async fn list_sheets(&self) -> Result<Vec<String>, StoreError>;

    /// All data rows of the named sheet as ordered header→cell maps
    async fn load_rows(&self, sheet: &str) -> Result<Vec<RawRow>, StoreError>;

    /// Replace the entire contents of the named sheet
    async fn write_rows(
        &self,
        sheet: &str,
        header: &[String],
        rows: &[Vec<String>],
    ) -> Result<(), StoreError>;
}

/// Zip one header row with data rows into [`RawRow`]s
///
/// Shared by every backend so padding/truncation behavior cannot drift.
pub(crate) fn zip_rows(header: &[String], data: &[Vec<String>]) -> Vec<RawRow> {
    data.iter()
        .map(|cells| {
            header
                .iter()
                .enumerate()
                .map(|(i, h)| (h.clone(), cells.get(i).cloned().unwrap_or_default()))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_pads_short_rows_and_drops_excess() {
        let header = vec!["room".to_string(), "name".to_string()];
        let data = vec![
            vec!["A301".to_string()],
            vec!["A302".to_string(), "Kim".to_string(), "extra".to_string()],
        ];
        let rows = zip_rows(&header, &data);
        assert_eq!(rows[0]["room"], "A301");
        assert_eq!(rows[0]["name"], "");
        assert_eq!(rows[1]["name"], "Kim");
        assert_eq!(rows[1].len(), 2);
    }

    #[test]
    fn zip_preserves_header_order() {
        let header = vec!["상태".to_string(), "호실".to_string()];
        let data = vec![vec!["외박".to_string(), "A301".to_string()]];
        let rows = zip_rows(&header, &data);
        let keys: Vec<_> = rows[0].keys().cloned().collect();
        assert_eq!(keys, header);
    }
}
