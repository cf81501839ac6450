//! HTTP API of the two-screen workflow.
//!
//! Every route works on one session, created by the client on load and
//! addressed by its id afterwards. Handlers read the stored `SessionState`, run
//! the matching action from `common::session::controller`, and store the next
//! state only when the action succeeded.
//!
//! The provided routes are:
//! - `POST /api/sessions`: opens a session on the upload screen and returns its `SessionView`.
//!
//! - `GET /api/sessions/{session_id}`: returns the current screen and stored numbers.
//!
//! - `DELETE /api/sessions/{session_id}`: ends the session and drops its state.
//!
//! - `POST /api/sessions/{session_id}/validate`: multipart/form-data upload with a `file`
//!   field (`.csv` or `.xlsx`). Validates every `telefone` cell, replaces the stored numbers
//!   and moves to the message screen when at least one number is valid. Returns a
//!   `ValidateResponse` with the per-row report.
//!
//! - `POST /api/sessions/{session_id}/back`: returns to the upload screen, keeping the numbers.
//!
//! - `POST /api/sessions/{session_id}/generate`: takes a `GenerateLinksRequest` and returns one
//!   WhatsApp link per stored number, in stored order.

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;
use common::responses::SessionView;
use common::session::SessionState;

// Test service wired like `main.rs`, sharing `$sessions` with the caller.
#[cfg(test)]
macro_rules! init_test_app {
    ($sessions:expr) => {
        init_test_app!($sessions, crate::config::AppConfig::default())
    };
    ($sessions:expr, $config:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($sessions.clone()))
                .app_data(actix_web::web::Data::new($config))
                .service(crate::services::sessions::configure_routes()),
        )
        .await
    };
}

mod back;
mod create;
mod end;
mod generate;
mod read;
mod validate;

const API_PATH: &str = "/api/sessions";

/// Configures and returns the Actix scope for the session routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("/{session_id}", get().to(read::process))
        .route("/{session_id}", delete().to(end::process))
        .route("/{session_id}/validate", post().to(validate::process))
        .route("/{session_id}/back", post().to(back::process))
        .route("/{session_id}/generate", post().to(generate::process))
}

fn session_view(session_id: &str, state: &SessionState) -> SessionView {
    SessionView {
        session_id: session_id.to_string(),
        screen: state.current_screen(),
        valid_numbers: state.valid_numbers().to_vec(),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    pub const BOUNDARY: &str = "----phone-upload-boundary";

    /// Builds a multipart/form-data body with a single `file` field.
    pub fn multipart_body(filename: &str, contents: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
                filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(contents);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    pub fn multipart_content_type() -> String {
        format!("multipart/form-data; boundary={}", BOUNDARY)
    }
}
