use super::session_view;
use crate::error::ApiError;
use crate::session_controller::state::SessionsState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::responses::SessionView;

pub(crate) async fn process(
    session_id: web::Path<String>,
    state: web::Data<SessionsState>,
) -> impl Responder {
    match get_session(&session_id, &state).await {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => e.error_response(),
    }
}

async fn get_session(session_id: &str, state: &SessionsState) -> Result<SessionView, ApiError> {
    let session = state.get(session_id).await?;
    Ok(session_view(session_id, &session))
}
