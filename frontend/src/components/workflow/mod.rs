//! Two-screen workflow: upload and validate phone numbers, then generate
//! WhatsApp links for them.
//!
//! Wires the Yew `Component` implementation to the `update` and `view`
//! submodules. On first render it opens a backend session; every later action
//! goes through that session.

use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::WorkflowComponent;

impl Component for WorkflowComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        WorkflowComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                match crate::api::open_session().await {
                    Ok(view) => link.send_message(Msg::SessionOpened(view)),
                    Err(e) => link.send_message(Msg::RequestFailed(format!(
                        "Não foi possível iniciar a sessão: {}",
                        e
                    ))),
                }
            });
        }
    }
}
