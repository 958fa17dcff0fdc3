//! Reusable UI components

mod button;
mod dialog;
mod panel;

pub use button::{render_submit_button, BUTTON_HEIGHT};
pub use dialog::render_nav_menu;
pub use panel::{panel_height, render_feedback_panel};
