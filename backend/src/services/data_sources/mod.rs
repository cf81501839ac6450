//! Turns an uploaded file into a `RawTable` of untyped text cells.
//!
//! The format is picked from the file name: `.csv` goes through the `csv`
//! reader, `.xlsx` through `calamine`. Any failure becomes
//! `WorkflowError::FileParse` carrying the underlying parser message, raised
//! before the session is touched.

mod delimited;
mod spreadsheet;

use common::error::{WorkflowError, WorkflowResult};
use common::model::record::RawTable;

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Xlsx,
}

impl FileKind {
    /// Picks the format from the file extension, ignoring case.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".csv") {
            Some(FileKind::Csv)
        } else if lower.ends_with(".xlsx") {
            Some(FileKind::Xlsx)
        } else {
            None
        }
    }
}

/// Parses the bytes of an uploaded file named `filename`.
pub fn parse_upload(filename: &str, bytes: &[u8]) -> WorkflowResult<RawTable> {
    match FileKind::from_filename(filename) {
        Some(FileKind::Csv) => delimited::parse_csv(bytes),
        Some(FileKind::Xlsx) => spreadsheet::parse_xlsx(bytes),
        None => Err(WorkflowError::FileParse(format!(
            "tipo de arquivo não suportado: '{}' (use .csv ou .xlsx)",
            filename
        ))),
    }
}
