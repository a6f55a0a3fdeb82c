//! Form domain layer
//!
//! Type-safe registration form handling: field descriptors, the draft
//! record, the country/city table, validation and the form controller.

mod country;
mod draft;
mod field;
mod form_state;
mod validator;

pub use country::Country;
pub use draft::RegistrationDraft;
pub use field::{Field, FieldKind};
pub use form_state::{FocusTarget, RegistrationForm, FOCUS_ORDER};
