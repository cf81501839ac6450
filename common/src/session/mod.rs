//! Per-session workflow state and the actions that move it between screens.
//!
//! A [`SessionState`] belongs to exactly one user session. The backend keeps one
//! per session id and hands it to the [`controller`] actions, which return the
//! next state instead of mutating shared data in place.

pub mod controller;

use crate::model::screen::Screen;
use serde::{Deserialize, Serialize};

/// Current screen plus the numbers carried from the upload screen to the message screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    current_screen: Screen,
    valid_numbers: Vec<String>,
}

impl SessionState {
    /// Fresh session on the upload screen with no numbers.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    /// Formatted phones from the last successful validation, in file order.
    pub fn valid_numbers(&self) -> &[String] {
        &self.valid_numbers
    }

    /// Swaps in a new list. The previous one is discarded, never appended to.
    pub fn replace_valid_numbers(&mut self, numbers: Vec<String>) {
        self.valid_numbers = numbers;
    }

    pub fn advance_to_message_screen(&mut self) {
        self.current_screen = Screen::Message;
    }

    /// Goes back to the upload screen. Stored numbers are kept.
    pub fn return_to_upload_screen(&mut self) {
        self.current_screen = Screen::Upload;
    }
}
