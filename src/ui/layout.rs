//! Layout components (header, footer, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::content::{PRACTICE_NAME, TAGLINE};
use crate::state::{PageFocus, View, NARROW_WIDTH, NAV_LINKS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen regions for one frame
pub struct PageLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub status: Rect,
}

/// Split the screen into header, body, footer and status bar
pub fn create_layout(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Page content
            Constraint::Length(1), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    PageLayout {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
        status: chunks[3],
    }
}

/// Shift an area down by `offset` rows, shrinking it to stay on screen
pub fn offset_area(area: Rect, offset: u16) -> Rect {
    let offset = offset.min(area.height);
    Rect {
        y: area.y + offset,
        height: area.height - offset,
        ..area
    }
}

/// Draw the site header with the practice name and navigation
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let scrolled = app.state.is_scrolled();
    let header_focused = matches!(app.state.focus, PageFocus::Header);

    let border_style = if scrolled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    // The tagline is dropped once the page scrolls to keep the header compact
    let mut title_spans = vec![Span::styled(format!(" {PRACTICE_NAME}"), title_style)];
    if !scrolled {
        title_spans.push(Span::styled(
            format!("  {TAGLINE}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let nav_line = if app.terminal_width() <= NARROW_WIDTH {
        menu_toggle_line(app, header_focused)
    } else {
        nav_bar_line(&app.state.current_view, header_focused)
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(Paragraph::new(Line::from(title_spans)), rows[0]);
    frame.render_widget(Paragraph::new(nav_line), rows[1]);
}

fn nav_bar_line(current_view: &View, header_focused: bool) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (idx, (view, label)) in NAV_LINKS.iter().enumerate() {
        let style = if view == current_view {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else if header_focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("{}:{label}", idx + 1), style));
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}

fn menu_toggle_line(app: &App, header_focused: bool) -> Line<'static> {
    let expanded = app.state.nav.open;
    let toggle_style = if header_focused || app.state.nav.toggle_focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let icon = if expanded { "✕" } else { "☰" };

    Line::from(vec![
        Span::styled(format!(" {icon} Menu"), toggle_style),
        Span::styled(
            format!("  {}", app.state.current_view.title()),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// Draw the footer line
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" © {} {PRACTICE_NAME}", app.state.copyright_year),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            "  All rights reserved.",
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(footer, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_view_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    // Polite announcements, e.g. after a successful send
    if let Some(message) = app.state.live_region.current() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Green),
        ));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current focus and view
fn get_view_hints(app: &App) -> String {
    if app.state.nav.open {
        return "j/k:nav  Enter:go  Esc:close".to_string();
    }
    match app.state.focus {
        PageFocus::Header => "s:skip to content  1-5:page  h/l:prev/next  m:menu  q:quit".to_string(),
        PageFocus::Main => match app.state.current_view {
            View::Faq => "j/k:select  Enter:expand  Esc:header".to_string(),
            View::Contact => format!("Tab:next  {SUBMIT_SHORTCUT}:send  Esc:header"),
            _ => "j/k:scroll  Esc:header".to_string(),
        },
    }
}
