//! Screen controller: the `validate`, `back` and `generate` actions.
//!
//! Each action reads the current [`SessionState`] and returns a [`Transition`]
//! with the next state and the data to show. On error the caller keeps its
//! current state, so a failed action never leaves a half-applied change behind.

use super::SessionState;
use crate::error::{WorkflowError, WorkflowResult};
use crate::model::link::LinkRecord;
use crate::model::record::{RawTable, PHONE_COLUMN};
use crate::model::report::ValidationReport;
use crate::model::screen::Screen;

pub const NO_VALID_NUMBERS_WARNING: &str = "Nenhum número válido encontrado";
pub const NO_STORED_NUMBERS_WARNING: &str = "Por favor, volte e carregue os números primeiro.";

/// Next state of a session plus what the action produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<T> {
    pub state: SessionState,
    pub output: T,
}

impl<T> Transition<T> {
    fn new(state: SessionState, output: T) -> Self {
        Self { state, output }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub report: ValidationReport,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub links: Vec<LinkRecord>,
    pub warning: Option<String>,
}

/// Validates every row of `table` and moves to the message screen when at least
/// one number passed.
///
/// The stored numbers are replaced by the new valid list. With no valid number the
/// state is returned unchanged and the outcome carries a warning instead.
pub fn validate(
    state: &SessionState,
    table: &RawTable,
) -> WorkflowResult<Transition<ValidationOutcome>> {
    if !table.has_column(PHONE_COLUMN) {
        return Err(WorkflowError::MissingColumn);
    }

    let report = ValidationReport::from_records(&table.records);

    if !report.has_valid() {
        let outcome = ValidationOutcome {
            report,
            warning: Some(NO_VALID_NUMBERS_WARNING.to_string()),
        };
        return Ok(Transition::new(state.clone(), outcome));
    }

    let mut next = state.clone();
    next.replace_valid_numbers(report.valid.clone());
    next.advance_to_message_screen();

    Ok(Transition::new(
        next,
        ValidationOutcome {
            report,
            warning: None,
        },
    ))
}

/// Returns to the upload screen from anywhere, keeping the stored numbers.
pub fn back(state: &SessionState) -> Transition<()> {
    let mut next = state.clone();
    next.return_to_upload_screen();
    Transition::new(next, ())
}

/// Builds one link per stored number, in stored order, all with `message`.
///
/// Only available on the message screen. The state itself never changes.
pub fn generate(
    state: &SessionState,
    message: &str,
) -> WorkflowResult<Transition<GenerationOutcome>> {
    if state.current_screen() != Screen::Message {
        return Err(WorkflowError::WrongScreen {
            expected: Screen::Message,
            actual: state.current_screen(),
        });
    }

    if state.valid_numbers().is_empty() {
        let outcome = GenerationOutcome {
            links: Vec::new(),
            warning: Some(NO_STORED_NUMBERS_WARNING.to_string()),
        };
        return Ok(Transition::new(state.clone(), outcome));
    }

    if message.is_empty() {
        return Err(WorkflowError::EmptyMessage);
    }

    let links = state
        .valid_numbers()
        .iter()
        .map(|phone| LinkRecord::new(phone, message))
        .collect();

    Ok(Transition::new(
        state.clone(),
        GenerationOutcome {
            links,
            warning: None,
        },
    ))
}
