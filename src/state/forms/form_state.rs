//! Registration form state and edit operations

use super::country::{cities_for, Country};
use super::draft::RegistrationDraft;
use super::field::{Field, FieldKind};
use super::validator::{validate, ErrorSet};
use crate::state::Transition;

/// A focusable row of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(Field),
    /// Show/Hide password button under the password input
    PasswordToggle,
    Submit,
}

/// Focus traversal order, matching the on-screen layout
pub const FOCUS_ORDER: [FocusTarget; 12] = [
    FocusTarget::Field(Field::FirstName),
    FocusTarget::Field(Field::LastName),
    FocusTarget::Field(Field::Username),
    FocusTarget::Field(Field::Email),
    FocusTarget::Field(Field::Phone),
    FocusTarget::Field(Field::Pan),
    FocusTarget::Field(Field::Aadhar),
    FocusTarget::Field(Field::Password),
    FocusTarget::PasswordToggle,
    FocusTarget::Field(Field::Country),
    FocusTarget::Field(Field::City),
    FocusTarget::Submit,
];

/// Registration form controller: the draft, the last validation result,
/// and which row has keyboard focus.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub draft: RegistrationDraft,
    pub errors: ErrorSet,
    pub active_field_index: usize,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently focused row
    pub fn focus(&self) -> FocusTarget {
        FOCUS_ORDER[self.active_field_index.min(FOCUS_ORDER.len() - 1)]
    }

    /// Field under focus, if the focused row is a field
    pub fn active_field(&self) -> Option<Field> {
        match self.focus() {
            FocusTarget::Field(field) => Some(field),
            _ => None,
        }
    }

    /// Focus a specific row. Disabled rows cannot take focus.
    pub fn set_focus(&mut self, target: FocusTarget) {
        if !self.is_focusable(target) {
            return;
        }
        if let Some(index) = FOCUS_ORDER.iter().position(|t| *t == target) {
            self.active_field_index = index;
        }
    }

    fn is_focusable(&self, target: FocusTarget) -> bool {
        match target {
            FocusTarget::Field(Field::City) => self.city_enabled(),
            _ => true,
        }
    }

    /// Move focus to the next enabled row (wraps around)
    pub fn next_field(&mut self) {
        let count = FOCUS_ORDER.len();
        let mut index = self.active_field_index;
        for _ in 0..count {
            index = (index + 1) % count;
            if self.is_focusable(FOCUS_ORDER[index]) {
                break;
            }
        }
        self.active_field_index = index;
    }

    /// Move focus to the previous enabled row (wraps around)
    pub fn prev_field(&mut self) {
        let count = FOCUS_ORDER.len();
        let mut index = self.active_field_index;
        for _ in 0..count {
            index = if index == 0 { count - 1 } else { index - 1 };
            if self.is_focusable(FOCUS_ORDER[index]) {
                break;
            }
        }
        self.active_field_index = index;
    }

    /// Replace the value of a text field, leaving every other field untouched.
    /// Select fields are ignored; use [`set_country`](Self::set_country) and
    /// [`select_city`](Self::select_city) for those.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        if let Some(slot) = self.draft.text_mut(field) {
            *slot = value.into();
            tracing::debug!("Edited {}", field.name());
        }
    }

    /// Append a typed character to the focused text field
    pub fn input_char(&mut self, c: char) {
        self.edit_focused(|value| value.push(c));
    }

    /// Remove the last character of the focused text field
    pub fn backspace(&mut self) {
        self.edit_focused(|value| {
            value.pop();
        });
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.active_field() else {
            return;
        };
        if field.kind() == FieldKind::Select {
            return;
        }
        if let Some(current) = self.draft.text(field) {
            let mut value = current.to_string();
            edit(&mut value);
            self.set_text(field, value);
        }
    }

    /// Change the country. The city is always reset in the same update.
    pub fn set_country(&mut self, country: Option<Country>) {
        self.draft.country = country;
        self.draft.city.clear();
        tracing::debug!(
            "Country set to {:?}, city reset",
            country.map(|c| c.to_string())
        );
    }

    /// Select a city of the current country, or clear it with `""`.
    /// Returns false when the city does not belong to the selected country.
    pub fn select_city(&mut self, city: &str) -> bool {
        if city.is_empty() {
            self.draft.city.clear();
            return true;
        }
        match self.draft.country {
            Some(country) if country.has_city(city) => {
                self.draft.city = city.to_string();
                true
            }
            country => {
                tracing::warn!("Rejected city {city:?} for {country:?}");
                false
            }
        }
    }

    /// Step the focused select through `[placeholder, options...]`
    pub fn cycle_select(&mut self, forward: bool) {
        match self.active_field() {
            Some(Field::Country) => {
                let options: Vec<Option<Country>> = std::iter::once(None)
                    .chain(Country::all().into_iter().map(Some))
                    .collect();
                let current = options
                    .iter()
                    .position(|c| *c == self.draft.country)
                    .unwrap_or(0);
                let next = step(current, options.len(), forward);
                self.set_country(options[next]);
            }
            Some(Field::City) if self.city_enabled() => {
                let options: Vec<&str> = std::iter::once("")
                    .chain(self.available_cities().iter().copied())
                    .collect();
                let current = options
                    .iter()
                    .position(|c| *c == self.draft.city)
                    .unwrap_or(0);
                let next = step(current, options.len(), forward);
                self.select_city(options[next]);
            }
            _ => {}
        }
    }

    /// Flip password visibility. Never touches the password itself.
    pub fn toggle_password(&mut self) {
        self.draft.show_password = !self.draft.show_password;
    }

    /// Cities selectable for the current country
    pub fn available_cities(&self) -> &'static [&'static str] {
        cities_for(self.draft.country)
    }

    /// The city select is only interactive once a country is chosen
    pub fn city_enabled(&self) -> bool {
        self.draft.country.is_some()
    }

    /// Validate the draft. On success returns the transition to the success
    /// view carrying a copy of the draft; otherwise keeps the errors for
    /// display and stays put.
    pub fn submit(&mut self) -> Option<Transition> {
        let errors = validate(&self.draft);
        if errors.is_empty() {
            self.errors = errors;
            tracing::info!("Registration for {:?} accepted", self.draft.username);
            Some(Transition::Success(Some(self.draft.clone())))
        } else {
            let names: Vec<&str> = errors.fields().into_iter().map(Field::name).collect();
            tracing::info!("Registration rejected, invalid: {}", names.join(", "));
            self.errors = errors;
            None
        }
    }
}

fn step(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % len
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}
