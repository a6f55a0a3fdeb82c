//! Application state definitions

use super::forms::{RegistrationDraft, RegistrationForm};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Registration form, mounted at `/`
    #[default]
    Form,
    /// Confirmation of a submitted draft, mounted at `/success`
    Success,
}

impl View {
    /// Route path of the view
    pub fn path(&self) -> &'static str {
        match self {
            Self::Form => "/",
            Self::Success => "/success",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Form => "Registration Form",
            Self::Success => "Form Submitted Successfully!",
        }
    }
}

/// A navigation request together with the state handed to the target view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Mount the form view with a fresh draft
    Form,
    /// Mount the success view. `None` when reached without a submitted draft.
    Success(Option<RegistrationDraft>),
}

impl Transition {
    pub fn target(&self) -> View {
        match self {
            Self::Form => View::Form,
            Self::Success(_) => View::Success,
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    /// Form view state; rebuilt every time the form view is mounted
    pub form: RegistrationForm,
    /// Draft transferred to the success view
    pub submitted: Option<RegistrationDraft>,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Mount the transition's target view with its transferred state
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Form => {
                self.form = RegistrationForm::new();
                self.submitted = None;
                self.current_view = View::Form;
            }
            Transition::Success(draft) => {
                self.submitted = draft;
                self.current_view = View::Success;
            }
        }
    }
}
