//! Registration form view

use super::field_renderer::{action_line, field_lines, help_line, FieldDisplay};
use crate::app::App;
use crate::platform::{SUBMIT_SHORTCUT, TOGGLE_PASSWORD_SHORTCUT};
use crate::state::{
    Country, Field, FieldKind, FocusTarget, RegistrationForm, View, FOCUS_ORDER,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the submit button box
const SUBMIT_WIDTH: u16 = 14;

/// Draw the registration form
pub fn draw_registration_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {} ", View::Form.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Fields
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    let form = &app.state.form;
    let masked = masked_password(form, app.password_mask());
    let country = form.draft.country.as_ref().map(Country::to_string);
    let (lines, focus_line) = form_lines(form, &masked, country.as_deref());

    // Keep the focused row (and its error line) visible
    let visible = chunks[0].height as usize;
    let offset = (focus_line + 2).saturating_sub(visible);
    let fields = Paragraph::new(lines).scroll((offset as u16, 0));
    frame.render_widget(fields, chunks[0]);

    let button_area = Rect {
        width: SUBMIT_WIDTH.min(chunks[1].width),
        ..chunks[1]
    };
    render_button(
        frame,
        button_area,
        "Submit",
        form.focus() == FocusTarget::Submit,
        true,
    );

    let help = Paragraph::new(help_line(&[
        ("Tab", "next"),
        ("←/→", "choose"),
        (SUBMIT_SHORTCUT, "submit"),
        (TOGGLE_PASSWORD_SHORTCUT, "show/hide password"),
        ("Esc", "quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}

/// Password as drawn: plain when visible, one mask char per character otherwise
pub fn masked_password(form: &RegistrationForm, mask: char) -> String {
    if form.draft.show_password {
        form.draft.password.clone()
    } else {
        std::iter::repeat(mask)
            .take(form.draft.password.chars().count())
            .collect()
    }
}

/// Build every form row in focus order. Returns the lines and the index of
/// the focused row's first line.
fn form_lines<'a>(
    form: &'a RegistrationForm,
    masked_password: &'a str,
    country: Option<&'a str>,
) -> (Vec<Line<'a>>, usize) {
    let focus = form.focus();
    let mut lines = Vec::new();
    let mut focus_line = 0;

    for target in FOCUS_ORDER {
        if target == focus {
            focus_line = lines.len();
        }
        let is_active = target == focus;
        match target {
            FocusTarget::Field(field) => {
                let display = field_display(form, field, masked_password, country);
                lines.extend(field_lines(
                    field.label(),
                    display,
                    is_active,
                    form.errors.get(field),
                ));
            }
            FocusTarget::PasswordToggle => {
                let text = if form.draft.show_password {
                    "Hide Password"
                } else {
                    "Show Password"
                };
                lines.push(action_line(text, is_active));
            }
            // Drawn as a button below the fields
            FocusTarget::Submit => {}
        }
    }

    (lines, focus_line)
}

fn field_display<'a>(
    form: &'a RegistrationForm,
    field: Field,
    masked_password: &'a str,
    country: Option<&'a str>,
) -> FieldDisplay<'a> {
    match (field, field.kind()) {
        (Field::Country, _) => FieldDisplay::Choice {
            value: country,
            placeholder: field.placeholder(),
        },
        (Field::City, _) if !form.city_enabled() => FieldDisplay::Disabled(field.placeholder()),
        (Field::City, _) => FieldDisplay::Choice {
            value: Some(form.draft.city.as_str()).filter(|c| !c.is_empty()),
            placeholder: field.placeholder(),
        },
        (_, FieldKind::Secret) => FieldDisplay::Text(masked_password),
        _ => FieldDisplay::Text(form.draft.text(field).unwrap_or_default()),
    }
}
