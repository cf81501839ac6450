//! Runtime state of the workflow component.
//!
//! `screen` and `stored_numbers` mirror the backend session; everything else is
//! what the current screen displays.

use common::model::link::LinkRecord;
use common::model::report::ValidationReport;
use common::model::screen::Screen;
use common::responses::ValidateResponse;

pub struct WorkflowComponent {
    /// Backend session id, `None` until `POST /api/sessions` answered.
    pub session_id: Option<String>,

    pub screen: Screen,

    /// Formatted phones the backend stored at the last successful validation.
    pub stored_numbers: Vec<String>,

    /// File picked in the upload input, not yet sent.
    pub selected_file: Option<web_sys::File>,

    /// Report of the last validation, shown on both screens until the next upload.
    pub report: Option<ValidationReport>,
    pub report_warning: Option<String>,

    /// Message typed on the message screen.
    pub message: String,

    pub links: Vec<LinkRecord>,
    pub links_warning: Option<String>,

    /// Last action failure, shown above the current screen.
    pub error: Option<String>,

    /// A request is in flight; action buttons are disabled.
    pub busy: bool,
}

impl WorkflowComponent {
    pub fn new() -> Self {
        Self {
            session_id: None,
            screen: Screen::Upload,
            stored_numbers: Vec::new(),
            selected_file: None,
            report: None,
            report_warning: None,
            message: String::new(),
            links: Vec::new(),
            links_warning: None,
            error: None,
            busy: false,
        }
    }

    /// Stores a validation answer. The report stays visible on whichever screen
    /// the session moved to. Returns the toast to show when numbers were loaded.
    pub fn apply_validation(&mut self, response: ValidateResponse) -> Option<String> {
        self.busy = false;
        self.screen = response.screen;
        let loaded = if response.screen == Screen::Message {
            self.stored_numbers = response.report.valid.clone();
            self.links.clear();
            self.links_warning = None;
            Some(format!(
                "{} números válidos carregados.",
                response.report.valid_count()
            ))
        } else {
            None
        };
        self.report_warning = response.warning;
        self.report = Some(response.report);
        loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::phone::ValidationReason;
    use common::model::report::InvalidPhone;

    fn mixed_report() -> ValidationReport {
        ValidationReport {
            total: 2,
            valid: vec!["+5585989659006".to_string()],
            invalid: vec![InvalidPhone {
                raw: "123".to_string(),
                reason: ValidationReason::WrongLength,
            }],
        }
    }

    #[test]
    fn report_survives_the_move_to_the_message_screen() {
        let mut component = WorkflowComponent::new();
        component.busy = true;
        component.links_warning = Some("antigo".to_string());

        let toast = component.apply_validation(ValidateResponse {
            screen: Screen::Message,
            report: mixed_report(),
            warning: None,
        });

        assert_eq!(component.screen, Screen::Message);
        assert_eq!(component.report, Some(mixed_report()));
        assert_eq!(component.stored_numbers, vec!["+5585989659006"]);
        assert_eq!(component.links_warning, None);
        assert!(!component.busy);
        assert_eq!(toast.as_deref(), Some("1 números válidos carregados."));
    }

    #[test]
    fn report_without_valid_numbers_keeps_stored_numbers() {
        let mut component = WorkflowComponent::new();
        component.stored_numbers = vec!["+5511989659006".to_string()];
        let report = ValidationReport {
            total: 1,
            valid: Vec::new(),
            invalid: mixed_report().invalid,
        };

        let toast = component.apply_validation(ValidateResponse {
            screen: Screen::Upload,
            report: report.clone(),
            warning: Some("Nenhum número válido encontrado".to_string()),
        });

        assert_eq!(toast, None);
        assert_eq!(component.screen, Screen::Upload);
        assert_eq!(component.report, Some(report));
        assert_eq!(component.stored_numbers, vec!["+5511989659006"]);
        assert_eq!(
            component.report_warning.as_deref(),
            Some("Nenhum número válido encontrado")
        );
    }
}
