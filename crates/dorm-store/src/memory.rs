//! In-memory record store
//!
//! The workspace's test double, also handy for offline demos. Behaves like
//! the remote store: ordered sheets, header zip on load, full overwrite on
//! write.

use crate::store::{zip_rows, RecordStore, StoreError};
use async_trait::async_trait;
use dorm_table::RawRow;
use parking_lot::Mutex;

type Sheet = (Vec<String>, Vec<Vec<String>>);

/// Record store held entirely in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    // Vec keeps spreadsheet order; sheet count is tiny.
    sheets: Mutex<Vec<(String, Sheet)>>,
}

impl MemoryStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a sheet with the given header and cell rows
    pub fn put_sheet(&self, title: &str, header: Vec<String>, rows: Vec<Vec<String>>) {
        let mut sheets = self.sheets.lock();
        match sheets.iter_mut().find(|(t, _)| t == title) {
            Some((_, sheet)) => *sheet = (header, rows),
            None => sheets.push((title.to_string(), (header, rows))),
        }
    }

    /// Snapshot of a sheet's stored header and rows
    #[must_use]
    pub fn sheet(&self, title: &str) -> Option<Sheet> {
        self.sheets
            .lock()
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, sheet)| sheet.clone())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_sheets(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.sheets.lock().iter().map(|(t, _)| t.clone()).collect())
    }

    async fn load_rows(&self, sheet: &str) -> Result<Vec<RawRow>, StoreError> {
        let (header, rows) = self
            .sheet(sheet)
            .ok_or_else(|| StoreError::SheetNotFound(sheet.to_string()))?;
        Ok(zip_rows(&header, &rows))
    }

    async fn write_rows(
        &self,
        sheet: &str,
        header: &[String],
        rows: &[Vec<String>],
    ) -> Result<(), StoreError> {
        self.put_sheet(sheet, header.to_vec(), rows.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn korean_header() -> Vec<String> {
        ["호실", "이름", "상태"].map(String::from).to_vec()
    }

    #[tokio::test]
    async fn load_zips_header_with_rows() {
        let store = MemoryStore::new();
        store.put_sheet(
            "A3",
            korean_header(),
            vec![vec!["A301".into(), "Kim".into(), "외박".into()]],
        );

        let rows = store.load_rows("A3").await.unwrap();
        assert_eq!(rows[0]["호실"], "A301");
        assert_eq!(rows[0]["상태"], "외박");
    }

    #[tokio::test]
    async fn write_is_full_overwrite() {
        let store = MemoryStore::new();
        store.put_sheet(
            "A3",
            korean_header(),
            vec![
                vec!["A301".into(), "Kim".into(), String::new()],
                vec!["A302".into(), "Lee".into(), String::new()],
            ],
        );

        let header = vec!["room".to_string(), "name".to_string()];
        store
            .write_rows("A3", &header, &[vec!["A301".into(), "Park".into()]])
            .await
            .unwrap();

        let (stored_header, stored_rows) = store.sheet("A3").unwrap();
        assert_eq!(stored_header, header);
        assert_eq!(stored_rows.len(), 1);
    }

    #[tokio::test]
    async fn unknown_sheet_errors() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.load_rows("Z9").await,
            Err(StoreError::SheetNotFound(_))
        ));
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = MemoryStore::new();
        store.put_sheet("A3", korean_header(), vec![]);
        store.put_sheet("B1", korean_header(), vec![]);
        assert_eq!(store.list_sheets().await.unwrap(), vec!["A3", "B1"]);
    }
}
