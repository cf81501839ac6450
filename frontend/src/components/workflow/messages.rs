use common::responses::{GenerateLinksResponse, SessionView, ValidateResponse};

pub enum Msg {
    SessionOpened(SessionView),
    FileSelected(Option<web_sys::File>),
    Validate,
    Validated(ValidateResponse),
    Back,
    WentBack(SessionView),
    UpdateMessage(String),
    Generate,
    Generated(GenerateLinksResponse),
    RequestFailed(String),
}
