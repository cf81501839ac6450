//! Payloads returned by the backend API and decoded by the frontend.

use crate::model::link::LinkRecord;
use crate::model::report::ValidationReport;
use crate::model::screen::Screen;
use serde::{Deserialize, Serialize};

/// Snapshot of one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub session_id: String,
    pub screen: Screen,
    pub valid_numbers: Vec<String>,
}

/// Answer to a validation request.
///
/// `screen` is the screen the session moved to: `MESSAGE` when at least one
/// number was valid, `UPLOAD` otherwise (with `warning` set).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub screen: Screen,
    pub report: ValidationReport,
    pub warning: Option<String>,
}

/// Answer to a link generation request, links in stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateLinksResponse {
    pub links: Vec<LinkRecord>,
    pub warning: Option<String>,
}

/// Body of every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
