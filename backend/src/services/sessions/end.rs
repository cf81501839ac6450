use crate::session_controller::state::SessionsState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use log::info;

pub(crate) async fn process(
    session_id: web::Path<String>,
    state: web::Data<SessionsState>,
) -> impl Responder {
    match state.remove(&session_id).await {
        Ok(()) => {
            info!("Session {} ended", session_id);
            HttpResponse::NoContent().finish()
        }
        Err(e) => e.error_response(),
    }
}

#[cfg(test)]
mod tests {
    use crate::session_controller::state::SessionsState;
    use actix_web::{http::StatusCode, test};

    #[actix_web::test]
    async fn ends_session_once() {
        let sessions = SessionsState::new();
        let id = sessions.create().await;
        let app = init_test_app!(sessions);
        let uri = format!("/api/sessions/{}", id);

        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(sessions.get(&id).await.is_err());

        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
