//! Google Sheets v4 REST backend
//!
//! Three endpoints cover the whole contract:
//!
//! - spreadsheet metadata for the sheet (floor) titles
//! - `values/{title}` GET for the cell grid
//! - `values/{title}:clear` POST + `values/{title}` PUT for write-back
//!
//! Reads treat the first grid row as the header; the remaining rows zip
//! against it. Writes clear first so rows deleted in memory do not linger in
//! the remote tail.

use crate::config::StoreConfig;
use crate::store::{zip_rows, RecordStore, StoreError};
use async_trait::async_trait;
use dorm_table::RawRow;
use serde::Deserialize;
use serde_json::json;

/// Record store backed by the Google Sheets v4 API
#[derive(Debug, Clone)]
pub struct SheetsStore {
    client: reqwest::Client,
    config: StoreConfig,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Debug, Deserialize)]
struct SheetMeta {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetsStore {
    /// Create a store from connection settings
    #[inline]
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn spreadsheet_url(&self) -> String {
        format!(
            "{}/v4/spreadsheets/{}",
            self.config.api_base, self.config.spreadsheet_id
        )
    }

    fn values_url(&self, sheet: &str, suffix: &str) -> String {
        format!("{}/values/{}{}", self.spreadsheet_url(), sheet, suffix)
    }

    /// Fail on non-2xx, preserving the response body for the operator
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| status.to_string());
        Err(StoreError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Raw cell grid of a sheet, header row included
    async fn fetch_grid(&self, sheet: &str) -> Result<Vec<Vec<String>>, StoreError> {
        let response = self
            .client
            .get(self.values_url(sheet, ""))
            .bearer_auth(&self.config.access_token)
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::BAD_REQUEST {
            // The values endpoint reports an unknown range as 400.
            return Err(StoreError::SheetNotFound(sheet.to_string()));
        }
        let range: ValueRange = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(range.values)
    }
}

#[async_trait]
impl RecordStore for SheetsStore {
    async fn list_sheets(&self) -> Result<Vec<String>, StoreError> {
        let response = self
            .client
            .get(self.spreadsheet_url())
            .query(&[("fields", "sheets.properties.title")])
            .bearer_auth(&self.config.access_token)
            .send()
            .await?;
        let meta: SpreadsheetMeta = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        let titles: Vec<String> = meta
            .sheets
            .into_iter()
            .map(|s| s.properties.title)
            .collect();
        tracing::debug!(count = titles.len(), "listed floor-sheets");
        Ok(titles)
    }

    async fn load_rows(&self, sheet: &str) -> Result<Vec<RawRow>, StoreError> {
        let grid = self.fetch_grid(sheet).await?;
        let mut iter = grid.into_iter();
        let header = match iter.next() {
            Some(h) => h,
            None => return Ok(Vec::new()),
        };
        let data: Vec<Vec<String>> = iter.collect();
        tracing::debug!(sheet, rows = data.len(), "loaded sheet rows");
        Ok(zip_rows(&header, &data))
    }

    async fn write_rows(
        &self,
        sheet: &str,
        header: &[String],
        rows: &[Vec<String>],
    ) -> Result<(), StoreError> {
        // Clear first: the in-memory table may be shorter than the remote one.
        let response = self
            .client
            .post(self.values_url(sheet, ":clear"))
            .bearer_auth(&self.config.access_token)
            .json(&json!({}))
            .send()
            .await?;
        Self::check(response).await?;

        let mut values: Vec<&[String]> = Vec::with_capacity(rows.len() + 1);
        values.push(header);
        values.extend(rows.iter().map(|r| r.as_slice()));

        let response = self
            .client
            .put(self.values_url(sheet, ""))
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(&self.config.access_token)
            .json(&json!({ "values": values }))
            .send()
            .await?;
        Self::check(response).await?;

        tracing::info!(sheet, rows = rows.len(), "wrote sheet back");
        Ok(())
    }
}
