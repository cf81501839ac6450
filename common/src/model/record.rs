//! Untyped rows read from an uploaded spreadsheet.
//!
//! Every cell is kept as text regardless of the type the source file gave it.
//! The only column the workflow reads is [`PHONE_COLUMN`]; the rest travel along
//! untouched.

use std::collections::HashMap;

/// Header of the column holding the phone numbers. Matched exactly, case-sensitive.
pub const PHONE_COLUMN: &str = "telefone";

/// One input row: header title to cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Cell of [`PHONE_COLUMN`], or an empty string when the row has no such cell.
    pub fn phone(&self) -> &str {
        self.get(PHONE_COLUMN).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A parsed upload: the header row and every data row, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl RawTable {
    /// Zips each row's cells with `headers`. Cells beyond the header count are dropped
    /// and missing trailing cells become empty text. With duplicated titles the
    /// leftmost column wins.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let records = rows
            .into_iter()
            .map(|row| {
                let mut cells = row.into_iter();
                let mut fields = HashMap::with_capacity(headers.len());
                for title in &headers {
                    let cell = cells.next().unwrap_or_default();
                    fields.entry(title.clone()).or_insert(cell);
                }
                RawRecord::new(fields)
            })
            .collect();

        Self { headers, records }
    }

    pub fn has_column(&self, title: &str) -> bool {
        self.headers.iter().any(|h| h == title)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
