//! The registration draft record

use super::country::Country;
use super::field::Field;
use serde::{Serialize, Serializer};

/// In-progress registration record held by the form view.
///
/// Field order matters: it is the order the confirmation view lists entries in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    /// UI-only flag; carried along to the confirmation view
    pub show_password: bool,
    pub phone: String,
    #[serde(serialize_with = "serialize_country")]
    pub country: Option<Country>,
    pub city: String,
    pub pan: String,
    pub aadhar: String,
}

fn serialize_country<S: Serializer>(
    country: &Option<Country>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match country {
        Some(c) => serializer.collect_str(c),
        None => serializer.serialize_str(""),
    }
}

impl RegistrationDraft {
    /// Borrow a free-text field. Returns None for country.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Phone => &self.phone,
            Field::City => &self.city,
            Field::Pan => &self.pan,
            Field::Aadhar => &self.aadhar,
            Field::Country => return None,
        };
        Some(value)
    }

    /// Mutable access to a typed text field. Selects (country, city) are
    /// excluded so the cascade can only be changed through the form controller.
    pub(crate) fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let value = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Phone => &mut self.phone,
            Field::Pan => &mut self.pan,
            Field::Aadhar => &mut self.aadhar,
            Field::Country | Field::City => return None,
        };
        Some(value)
    }
}
