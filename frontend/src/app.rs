use crate::components::workflow::WorkflowComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div style="max-width: 1100px; margin: 0 auto; padding: 24px;">
                <WorkflowComponent />
            </div>
        }
    }
}
