//! Feedback panels shown above the contact form

use super::dialog::wrap_text;
use crate::state::{FeedbackPanel, PanelKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn panel_color(kind: PanelKind) -> Color {
    match kind {
        PanelKind::Success => Color::Green,
        PanelKind::Error => Color::Red,
    }
}

fn body_lines(panel: &FeedbackPanel, width: u16) -> Vec<String> {
    let inner = width.saturating_sub(4).max(10) as usize;
    panel
        .lines
        .iter()
        .flat_map(|line| wrap_text(line, inner))
        .collect()
}

/// Rows a panel needs at the given width
pub fn panel_height(panel: &FeedbackPanel, width: u16) -> u16 {
    // title + body + borders
    1 + body_lines(panel, width).len() as u16 + 2
}

/// Render a success or error panel
pub fn render_feedback_panel(frame: &mut Frame, area: Rect, panel: &FeedbackPanel) {
    let color = panel_color(panel.kind);

    let mut lines = vec![Line::from(Span::styled(
        panel.title.as_str(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(body_lines(panel, area.width).into_iter().map(Line::from));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
