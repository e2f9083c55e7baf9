use serde::{Deserialize, Serialize};

/// Product — one tracked stock record.
///
/// `pid` is assigned by the store on insert and never changes. `barcode`
/// is logically unique per product; the scan operation enforces this in
/// handler logic rather than with a store constraint. Nullable fields
/// serialize as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub pid: i64,
    pub barcode: String,
    pub quantity: i64,
    pub title: Option<String>,
    pub comment: Option<String>,
}

/// Outcome of a scan upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// No row matched the barcode; a new one was inserted.
    Inserted,
    /// An existing row's quantity was incremented.
    Updated,
}

impl ScanOutcome {
    /// Wire code carried in the scan response's `msg` field.
    pub fn code(self) -> &'static str {
        match self {
            ScanOutcome::Inserted => "i",
            ScanOutcome::Updated => "u",
        }
    }
}
