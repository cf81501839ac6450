use super::session_view;
use crate::session_controller::state::SessionsState;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use common::session::controller;

/// `MESSAGE -> UPLOAD`, unconditionally. Stored numbers are kept.
pub(crate) async fn process(
    session_id: web::Path<String>,
    state: web::Data<SessionsState>,
) -> impl Responder {
    let result = state
        .update(&session_id, |current| {
            let transition = controller::back(current);
            let view = session_view(&session_id, &transition.state);
            Ok((transition.state, view))
        })
        .await;

    match result {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => e.error_response(),
    }
}

#[cfg(test)]
mod tests {
    use crate::session_controller::state::SessionsState;
    use actix_web::{http::StatusCode, test};
    use common::model::screen::Screen;
    use common::responses::SessionView;

    #[actix_web::test]
    async fn returns_to_upload_keeping_numbers() {
        let sessions = SessionsState::new();
        let id = sessions.create().await;
        sessions
            .update(&id, |current| {
                let mut next = current.clone();
                next.replace_valid_numbers(vec!["+5585989659006".into()]);
                next.advance_to_message_screen();
                Ok((next, ()))
            })
            .await
            .unwrap();
        let app = init_test_app!(sessions);

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/back", id))
            .to_request();
        let view: SessionView = test::call_and_read_body_json(&app, req).await;

        assert_eq!(view.screen, Screen::Upload);
        assert_eq!(view.valid_numbers, vec!["+5585989659006"]);
        assert_eq!(sessions.get(&id).await.unwrap().current_screen(), Screen::Upload);
    }

    #[actix_web::test]
    async fn unknown_session_is_not_found() {
        let sessions = SessionsState::new();
        let app = init_test_app!(sessions);
        let req = test::TestRequest::post()
            .uri("/api/sessions/missing/back")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
