//! FAQ accordion

use crate::app::App;
use crate::state::{FaqAccordion, PageFocus};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Build the accordion lines; only the expanded item shows its answer
fn accordion_lines(faq: &FaqAccordion, focused: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (idx, item) in faq.items.iter().enumerate() {
        let is_selected = focused && idx == faq.selected;
        let marker = if item.expanded { "▾" } else { "▸" };

        let style = if is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else if item.expanded {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        lines.push(Line::from(Span::styled(
            format!("{marker} {}", item.question),
            style,
        )));
        if item.expanded {
            lines.push(Line::from(Span::styled(
                format!("  {}", item.answer),
                Style::default().fg(Color::White),
            )));
        }
        lines.push(Line::from(""));
    }
    lines
}

/// Draw the FAQ page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let focused = matches!(app.state.focus, PageFocus::Main);
    let border_color = if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Frequently Asked Questions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(accordion_lines(&app.state.faq, focused))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
