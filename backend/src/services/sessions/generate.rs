use crate::error::ApiError;
use crate::session_controller::state::SessionsState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::requests::GenerateLinksRequest;
use common::responses::GenerateLinksResponse;
use common::session::controller;
use log::{info, warn};

pub(crate) async fn process(
    session_id: web::Path<String>,
    state: web::Data<SessionsState>,
    req: web::Json<GenerateLinksRequest>,
) -> impl Responder {
    match generate_links(&session_id, &state, &req.message).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            warn!("Link generation failed for session {}: {}", session_id, e);
            e.error_response()
        }
    }
}

/// Builds one link per stored number. The session state itself does not change.
async fn generate_links(
    session_id: &str,
    state: &SessionsState,
    message: &str,
) -> Result<GenerateLinksResponse, ApiError> {
    let response = state
        .update(session_id, |current| {
            let transition = controller::generate(current, message)?;
            let response = GenerateLinksResponse {
                links: transition.output.links,
                warning: transition.output.warning,
            };
            Ok((transition.state, response))
        })
        .await?;

    info!(
        "Session {}: {} links generated",
        session_id,
        response.links.len()
    );
    Ok(response)
}
