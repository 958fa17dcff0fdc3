//! Navigation menu overlay

use super::base::{render_dialog, DialogConfig};
use crate::state::{NavMenu, View, NAV_LINKS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the open navigation menu centered on the screen
pub fn render_nav_menu(frame: &mut Frame, nav: &NavMenu, current_view: &View) {
    let lines: Vec<Line> = NAV_LINKS
        .iter()
        .enumerate()
        .map(|(idx, (view, label))| {
            let is_focused = idx == nav.focused_link;
            let is_current = view == current_view;

            let marker = if is_focused { "▸ " } else { "  " };
            let mut style = if is_focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            if is_current {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            let mut spans = vec![Span::styled(format!("{marker}{label}"), style)];
            if is_current {
                spans.push(Span::styled(" (current)", Style::default().fg(Color::DarkGray)));
            }
            Line::from(spans)
        })
        .collect();

    let hint = vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": go  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": close"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Menu",
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            lines,
            hint: Some(hint),
            max_width: 40,
        },
    );
}
