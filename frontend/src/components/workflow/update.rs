//! Update function for the workflow component.
//!
//! Elm-style: mutates the component for each `Msg` and returns whether the view
//! must re-render. Actions that need the backend (`Validate`, `Back`,
//! `Generate`) spawn the request and answer with a follow-up message. The
//! screen only changes when the backend says so.

use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::WorkflowComponent;
use crate::api;

pub fn update(component: &mut WorkflowComponent, ctx: &Context<WorkflowComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SessionOpened(view) => {
            log!("session opened", view.session_id.clone());
            component.screen = view.screen;
            component.stored_numbers = view.valid_numbers;
            component.session_id = Some(view.session_id);
            true
        }
        Msg::FileSelected(file) => {
            component.selected_file = file;
            component.error = None;
            true
        }
        Msg::Validate => {
            let (Some(session_id), Some(file)) =
                (component.session_id.clone(), component.selected_file.clone())
            else {
                show_toast("Selecione um arquivo .csv ou .xlsx primeiro.");
                return false;
            };

            component.busy = true;
            component.error = None;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::validate(&session_id, &file).await {
                    Ok(response) => link.send_message(Msg::Validated(response)),
                    Err(e) => link.send_message(Msg::RequestFailed(e)),
                }
            });
            true
        }
        Msg::Validated(response) => {
            if let Some(toast) = component.apply_validation(response) {
                show_toast(&toast);
            }
            true
        }
        Msg::Back => {
            let Some(session_id) = component.session_id.clone() else {
                return false;
            };

            component.busy = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::back(&session_id).await {
                    Ok(view) => link.send_message(Msg::WentBack(view)),
                    Err(e) => link.send_message(Msg::RequestFailed(e)),
                }
            });
            true
        }
        Msg::WentBack(view) => {
            component.busy = false;
            component.error = None;
            component.screen = view.screen;
            component.stored_numbers = view.valid_numbers;
            true
        }
        Msg::UpdateMessage(message) => {
            component.message = message;
            true
        }
        Msg::Generate => {
            let Some(session_id) = component.session_id.clone() else {
                return false;
            };
            if component.message.is_empty() {
                return false;
            }

            component.busy = true;
            component.error = None;
            let message = component.message.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::generate(&session_id, &message).await {
                    Ok(response) => link.send_message(Msg::Generated(response)),
                    Err(e) => link.send_message(Msg::RequestFailed(e)),
                }
            });
            true
        }
        Msg::Generated(response) => {
            component.busy = false;
            if !response.links.is_empty() {
                show_toast(&format!("✅ {} links gerados com sucesso!", response.links.len()));
            }
            component.links = response.links;
            component.links_warning = response.warning;
            true
        }
        Msg::RequestFailed(error) => {
            log!("request failed", error.clone());
            component.busy = false;
            component.error = Some(error);
            true
        }
    }
}
