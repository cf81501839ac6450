//! Keeps the workflow state of every open user session.
//!
//! Each browser tab works in its own session, identified by a UUID handed out by
//! `POST /api/sessions`. The session's `SessionState` (current screen plus the
//! validated numbers) lives here for as long as the process runs or until the
//! client ends the session; nothing is written to disk.
//!
//! The main components are:
//! - `SessionsState`: a clonable, thread-safe map from session id to `SessionState`.
//!   It is injected into the Actix application state in `main.rs`.
//! - `SessionsState::update`: runs one controller action against one session and
//!   stores the resulting state only when the action succeeded.

use crate::error::ApiError;
use common::session::SessionState;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

/// A thread-safe, shareable container for the state of all sessions.
///
/// Sessions never see each other's entries. The lock only serializes access to
/// the map; actions of the same session already run one after the other.
#[derive(Clone, Default)]
pub struct SessionsState {
    /// A map from a session id (String) to that session's `SessionState`.
    pub sessions: Arc<RwLock<HashMap<String, SessionState>>>,
}

impl SessionsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new session on the upload screen and returns its id.
    pub async fn create(&self) -> String {
        let session_id = uuid::Uuid::new_v4().to_string();
        self.sessions
            .write()
            .await
            .insert(session_id.clone(), SessionState::new());
        session_id
    }

    /// Returns a copy of the session's current state.
    pub async fn get(&self, session_id: &str) -> Result<SessionState, ApiError> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .ok_or_else(|| ApiError::SessionNotFound(session_id.to_string()))
    }

    /// Ends a session, dropping its state.
    pub async fn remove(&self, session_id: &str) -> Result<(), ApiError> {
        self.sessions
            .write()
            .await
            .remove(session_id)
            .map(|_| ())
            .ok_or_else(|| ApiError::SessionNotFound(session_id.to_string()))
    }

    /// Applies `action` to the session and stores the state it returns.
    ///
    /// `action` receives the current state and returns the next one together with
    /// its output. When it fails, the stored state is left untouched.
    pub async fn update<T, F>(&self, session_id: &str, action: F) -> Result<T, ApiError>
    where
        F: FnOnce(&SessionState) -> Result<(SessionState, T), ApiError>,
    {
        let mut sessions = self.sessions.write().await;
        let current = sessions
            .get_mut(session_id)
            .ok_or_else(|| ApiError::SessionNotFound(session_id.to_string()))?;

        let (next, output) = action(current)?;
        *current = next;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::error::WorkflowError;
    use common::model::screen::Screen;
    use common::session::controller;

    #[actix_web::test]
    async fn sessions_are_isolated() {
        let state = SessionsState::new();
        let first = state.create().await;
        let second = state.create().await;
        assert_ne!(first, second);

        state
            .update(&first, |current| {
                let mut next = current.clone();
                next.replace_valid_numbers(vec!["+5585989659006".into()]);
                next.advance_to_message_screen();
                Ok((next, ()))
            })
            .await
            .unwrap();

        assert_eq!(
            state.get(&first).await.unwrap().current_screen(),
            Screen::Message
        );
        let untouched = state.get(&second).await.unwrap();
        assert_eq!(untouched.current_screen(), Screen::Upload);
        assert!(untouched.valid_numbers().is_empty());
    }

    #[actix_web::test]
    async fn failed_action_leaves_state_untouched() {
        let state = SessionsState::new();
        let id = state.create().await;
        let before = state.get(&id).await.unwrap();

        let result: Result<(), ApiError> = state
            .update(&id, |current| {
                let transition = controller::generate(current, "Oi")?;
                Ok((transition.state, ()))
            })
            .await;

        assert!(matches!(
            result,
            Err(ApiError::Workflow(WorkflowError::WrongScreen { .. }))
        ));
        assert_eq!(state.get(&id).await.unwrap(), before);
    }

    #[actix_web::test]
    async fn removed_session_is_gone() {
        let state = SessionsState::new();
        let id = state.create().await;
        state.remove(&id).await.unwrap();
        assert!(matches!(
            state.get(&id).await,
            Err(ApiError::SessionNotFound(_))
        ));
        assert!(state.remove(&id).await.is_err());
    }
}
