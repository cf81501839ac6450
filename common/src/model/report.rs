use crate::model::phone::{format_phone, validate_phone, ValidationReason};
use crate::model::record::RawRecord;
use serde::{Deserialize, Serialize};

/// A row whose phone failed validation, kept with its original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidPhone {
    pub raw: String,
    pub reason: ValidationReason,
}

/// Result of validating every row of an upload.
///
/// `valid` holds formatted phones and `invalid` the raw text of rejected rows,
/// both in file order. Row failures are collected here, they never abort the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub total: usize,
    pub valid: Vec<String>,
    pub invalid: Vec<InvalidPhone>,
}

impl ValidationReport {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a RawRecord>,
    {
        let mut report = Self::default();
        for record in records {
            report.push(record.phone());
        }
        report
    }

    fn push(&mut self, raw: &str) {
        self.total += 1;
        let validation = validate_phone(raw);
        if validation.is_valid {
            self.valid.push(format_phone(raw));
        } else {
            self.invalid.push(InvalidPhone {
                raw: raw.to_string(),
                reason: validation.reason,
            });
        }
    }

    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid.len()
    }

    pub fn has_valid(&self) -> bool {
        !self.valid.is_empty()
    }
}
