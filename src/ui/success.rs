//! Confirmation view listing the submitted draft

use crate::app::App;
use crate::state::{confirmation_entries, View};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const BACK_WIDTH: u16 = 13;

/// Draw the success view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {} ", View::Success.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .margin(1)
        .split(area);

    let lines: Vec<Line> = confirmation_entries(app.state.submitted.as_ref())
        .into_iter()
        .map(|(key, value)| {
            Line::from(vec![
                Span::raw("• "),
                Span::styled(
                    format!("{key}:"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" {value}")),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        chunks[0],
    );

    let button_area = Rect {
        width: BACK_WIDTH.min(chunks[1].width),
        ..chunks[1]
    };
    render_button(frame, button_area, "Go Back", true, true);
}
