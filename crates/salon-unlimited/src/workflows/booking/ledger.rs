//! CSV import for historical reservation rows.
//!
//! Salons migrating from a spreadsheet hand over their visit ledger as
//! `Customer ID,Date,Status` rows. The importer turns that into per-customer
//! histories the eligibility engine can consume. Bad rows fail the whole
//! import: an unparseable date or status is a data problem to fix at the
//! source, not something to skip silently.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::domain::{CustomerId, InvalidStatus, ReservationRecord, ReservationStatus};

#[derive(Debug, thiserror::Error)]
pub enum LedgerImportError {
    #[error("failed to read reservation ledger: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid ledger CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid reservation date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error(transparent)]
    Status(#[from] InvalidStatus),
}

#[derive(Debug, Deserialize)]
struct LedgerRow {
    #[serde(rename = "Customer ID")]
    customer_id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Status")]
    status: String,
}

/// Parsed ledger holding every imported reservation record.
#[derive(Debug, Clone)]
pub struct ReservationLedger {
    records: Vec<ReservationRecord>,
}

impl ReservationLedger {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LedgerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LedgerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for row in csv_reader.deserialize::<LedgerRow>() {
            let row = row?;
            let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
                .map_err(|_| LedgerImportError::InvalidDate(row.date.clone()))?;
            let status: ReservationStatus = row.status.parse()?;
            records.push(ReservationRecord {
                customer_id: CustomerId(row.customer_id),
                date,
                status,
            });
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[ReservationRecord] {
        &self.records
    }

    /// Customers present in the ledger, in order of first appearance.
    pub fn customers(&self) -> Vec<CustomerId> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.customer_id) {
                seen.push(record.customer_id.clone());
            }
        }
        seen
    }

    /// One customer's rows sorted most-recent-first, ready for the engine.
    pub fn history_for(&self, customer: &CustomerId) -> Vec<ReservationRecord> {
        let mut history: Vec<ReservationRecord> = self
            .records
            .iter()
            .filter(|record| &record.customer_id == customer)
            .cloned()
            .collect();
        history.sort_by(|a, b| b.date.cmp(&a.date));
        history
    }
}
