//! Field rendering utilities for forms
//!
//! Fields render as lines of one scrollable paragraph: a label/value row,
//! followed by a red message row when the field failed validation.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Width reserved for field labels
pub const LABEL_WIDTH: usize = 12;

const CURSOR: &str = "▌";

/// What a row shows as its value
pub enum FieldDisplay<'a> {
    /// Typed text (already masked if needed)
    Text(&'a str),
    /// Select with its current choice, or the placeholder when unset
    Choice {
        value: Option<&'a str>,
        placeholder: &'a str,
    },
    /// Non-interactive select
    Disabled(&'a str),
}

fn label_span(label: &str, is_active: bool) -> Span<'static> {
    let style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if is_active { "›" } else { " " };
    Span::styled(format!("{marker} {label:<width$} ", width = LABEL_WIDTH), style)
}

/// Build the lines for one form field
pub fn field_lines<'a>(
    label: &str,
    display: FieldDisplay<'a>,
    is_active: bool,
    error: Option<&'a str>,
) -> Vec<Line<'a>> {
    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![label_span(label, is_active)];
    match display {
        FieldDisplay::Text(value) => {
            if value.is_empty() && !is_active {
                spans.push(Span::styled("(empty)", value_style));
            } else {
                spans.push(Span::styled(value, value_style));
            }
            if is_active {
                spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
            }
        }
        FieldDisplay::Choice { value, placeholder } => {
            let text = value.unwrap_or(placeholder);
            let style = if value.is_some() {
                value_style
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if is_active {
                spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
                spans.push(Span::styled(text, style));
                spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
            } else {
                spans.push(Span::styled(text, style));
            }
        }
        FieldDisplay::Disabled(text) => {
            spans.push(Span::styled(
                text,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            ));
        }
    }

    let mut lines = vec![Line::from(spans)];
    if let Some(message) = error {
        lines.push(error_line(message));
    }
    lines
}

/// Validation message shown under a field
pub fn error_line(message: &str) -> Line<'_> {
    Line::from(vec![
        Span::raw(" ".repeat(LABEL_WIDTH + 3)),
        Span::styled(message, Style::default().fg(Color::Red)),
    ])
}

/// Inline action row (e.g. the password visibility toggle)
pub fn action_line(text: &str, is_active: bool) -> Line<'_> {
    let style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue)
    };
    Line::from(vec![
        Span::raw(" ".repeat(LABEL_WIDTH + 3)),
        Span::styled(format!("[ {text} ]"), style),
    ])
}

/// Key hints line shown at the bottom of a form
pub fn help_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    Line::from(spans)
}
