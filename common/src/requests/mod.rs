use serde::{Deserialize, Serialize};

/// Request payload for the link generation endpoint.
/// Carries the message text shared by every generated link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateLinksRequest {
    pub message: String,
}
