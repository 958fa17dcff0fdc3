//! Contact page: form, feedback panels and direct contact details

use super::field_renderer::{draw_field, draw_help_text, field_height};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{PageFocus, CONTACT_PHONE, CONTACT_PHONE_URI, RECIPIENT_EMAIL};
use crate::ui::components::{panel_height, render_feedback_panel, render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the contact page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(34), // Contact details
        ])
        .split(area);

    draw_form_column(frame, main_chunks[0], app);
    draw_details(frame, main_chunks[1]);
}

fn draw_form_column(frame: &mut Frame, area: Rect, app: &App) {
    let contact = &app.state.contact;
    let form_focused = matches!(app.state.focus, PageFocus::Main);

    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Send a Message ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Panels stack above the form, newest first
    let mut constraints: Vec<Constraint> = contact
        .panels
        .iter()
        .rev()
        .map(|panel| Constraint::Length(panel_height(panel, inner.width)))
        .collect();

    if !contact.hidden {
        constraints.extend(
            contact
                .fields
                .iter()
                .map(|field| Constraint::Length(field_height(field) + 1)),
        );
        constraints.push(Constraint::Length(BUTTON_HEIGHT));
        constraints.push(Constraint::Length(1)); // Help text
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    let mut row = 0;
    for panel in contact.panels.iter().rev() {
        render_feedback_panel(frame, chunks[row], panel);
        row += 1;
    }

    if contact.hidden {
        return;
    }

    for (idx, field) in contact.fields.iter().enumerate() {
        let is_active = form_focused && contact.active_field_index == idx;
        draw_field(frame, chunks[row], field, is_active);
        row += 1;
    }

    let button_area = Rect {
        width: chunks[row].width.min(24),
        ..chunks[row]
    };
    render_submit_button(
        frame,
        button_area,
        &contact.submit,
        form_focused && contact.is_submit_focused(),
    );
    row += 1;

    draw_help_text(
        frame,
        chunks[row],
        &format!("Tab: next field  Enter: choose topic  {SUBMIT_SHORTCUT}: send  Esc: menu"),
    );
}

fn draw_details(frame: &mut Frame, area: Rect) {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled("Phone", label)),
        Line::from(Span::styled(CONTACT_PHONE, value)),
        Line::from(Span::styled(CONTACT_PHONE_URI, Style::default().fg(Color::Blue))),
        Line::from(""),
        Line::from(Span::styled("Email", label)),
        Line::from(Span::styled(RECIPIENT_EMAIL, value)),
        Line::from(""),
        Line::from(Span::styled(
            "Fields marked * are required.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Reach Us Directly ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
