use serde::{Deserialize, Serialize};
use std::fmt;

/// The two screens of the workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Screen {
    /// Upload a spreadsheet and validate its phone numbers.
    #[default]
    Upload,
    /// Compose a message and generate one link per valid number.
    Message,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Upload => f.write_str("UPLOAD"),
            Screen::Message => f.write_str("MESSAGE"),
        }
    }
}
