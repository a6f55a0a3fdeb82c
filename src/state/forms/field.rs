//! Form field descriptors

use strum::{EnumIter, IntoStaticStr};

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text input
    Text,
    /// Free text input holding an email address
    Email,
    /// Free text input that can be masked
    Secret,
    /// Choice from a fixed option list
    Select,
}

/// The validated fields of a registration draft.
///
/// Declaration order is the draft order and therefore the order in which
/// validation errors are reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    Phone,
    Country,
    City,
    Pan,
    Aadhar,
}

impl Field {
    /// Key used for this field in the transferred record
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Phone => "Phone",
            Self::Country => "Country",
            Self::City => "City",
            Self::Pan => "PAN",
            Self::Aadhar => "Aadhar",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Email => FieldKind::Email,
            Self::Password => FieldKind::Secret,
            Self::Country | Self::City => FieldKind::Select,
            _ => FieldKind::Text,
        }
    }

    /// Placeholder shown while a select has no value
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Country => "Select Country",
            Self::City => "Select City",
            _ => "",
        }
    }
}
