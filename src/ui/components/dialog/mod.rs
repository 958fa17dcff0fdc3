//! Dialog components for TUI

mod base;
mod nav_menu_dialog;

pub use base::wrap_text;
pub use nav_menu_dialog::render_nav_menu;
