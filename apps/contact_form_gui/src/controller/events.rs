//! Events queued for the UI thread and drained at the start of each frame.

use form_core::FieldId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A snapshot passed validation; `report` is its JSON rendering.
    Submitted { report: String },
    /// Submit was blocked; the fields carry inline errors.
    SubmitBlocked { failing: Vec<FieldId> },
    Info(String),
}

impl UiEvent {
    pub fn status_line(&self) -> String {
        match self {
            UiEvent::Submitted { .. } => "Submitted".to_string(),
            UiEvent::SubmitBlocked { failing } => match failing.len() {
                1 => "1 field needs attention".to_string(),
                n => format!("{n} fields need attention"),
            },
            UiEvent::Info(message) => message.clone(),
        }
    }
}
