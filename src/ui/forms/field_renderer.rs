//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field box takes, not counting its error line
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline() {
        6
    } else {
        3
    }
}

/// Draw a form field with its inline error below the box
///
/// `area` must leave one row under the box for the error message.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let box_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let error_area = Rect {
        y: area.y + box_area.height,
        height: area.height.min(1),
        ..area
    };

    let has_error = field.error.is_some();
    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let placeholder = field.is_select() && field.value.is_empty();
    let value_style = if placeholder {
        Style::default().fg(Color::DarkGray)
    } else {
        style
    };

    let cursor = if is_active && !field.is_select() {
        "▌"
    } else {
        ""
    };

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_value
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let title = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), box_area);

    if let Some(error) = &field.error {
        let error_line = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
        ));
        frame.render_widget(error_line, error_area);
    }
}

/// Draw help text at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)));
    frame.render_widget(help, area);
}
