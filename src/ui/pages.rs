//! Text pages (Home, About, Services)

use crate::app::App;
use crate::state::content::page_text;
use crate::state::PageFocus;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a static text page at the current scroll position
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let view = &app.state.current_view;
    let focused = matches!(app.state.focus, PageFocus::Main);

    let lines: Vec<Line> = page_text(view).iter().map(|l| Line::from(*l)).collect();

    let border_color = if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(format!(" {} ", view.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(app.state.scroll_offset).unwrap_or(u16::MAX), 0));

    frame.render_widget(paragraph, area);
}
