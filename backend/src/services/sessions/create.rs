use super::session_view;
use crate::session_controller::state::SessionsState;
use actix_web::{web, HttpResponse, Responder};
use common::session::SessionState;
use log::info;

pub(crate) async fn process(state: web::Data<SessionsState>) -> impl Responder {
    let session_id = state.create().await;
    info!("Session {} opened", session_id);
    HttpResponse::Created().json(session_view(&session_id, &SessionState::new()))
}

#[cfg(test)]
mod tests {
    use crate::session_controller::state::SessionsState;
    use actix_web::{http::StatusCode, test};
    use common::model::screen::Screen;
    use common::responses::SessionView;

    #[actix_web::test]
    async fn opens_session_on_upload_screen() {
        let sessions = SessionsState::new();
        let app = init_test_app!(sessions);

        let resp = test::call_service(&app, test::TestRequest::post().uri("/api/sessions").to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let view: SessionView = test::read_body_json(resp).await;
        assert_eq!(view.screen, Screen::Upload);
        assert!(view.valid_numbers.is_empty());
        assert!(sessions.get(&view.session_id).await.is_ok());
    }
}
