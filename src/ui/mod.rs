//! UI module for rendering the TUI

mod components;
mod faq;
mod forms;
mod layout;
mod pages;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let regions = layout::create_layout(frame.area());

    layout::draw_header(frame, regions.header, app);

    // Newly shown pages slide up into place
    let offset = app
        .state
        .reveal
        .offset(&app.state.current_view, Instant::now());
    let body = layout::offset_area(regions.body, offset);

    match &app.state.current_view {
        View::Home | View::About | View::Services => pages::draw(frame, body, app),
        View::Faq => faq::draw(frame, body, app),
        View::Contact => forms::draw_contact(frame, body, app),
    }

    layout::draw_footer(frame, regions.footer, app);
    layout::draw_status_bar(frame, regions.status, app);

    if app.state.nav.open {
        components::render_nav_menu(frame, &app.state.nav, &app.state.current_view);
    }
}
