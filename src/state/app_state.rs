//! Application state definitions

use super::content::{page_text, FAQ_ENTRIES};
use super::forms::ContactForm;
use super::site::{FaqAccordion, LiveRegion, NavMenu, Reveal};
use chrono::Datelike;
use std::time::Instant;

/// Rows scrolled before the header switches to its compact style
pub const SCROLLED_THRESHOLD: usize = 2;

/// Current page of the site
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Home,
    About,
    Services,
    Faq,
    Contact,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Faq => "Frequently Asked Questions",
            Self::Contact => "Contact",
        }
    }
}

/// Where keyboard focus sits on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFocus {
    /// Header: skip link and navigation
    #[default]
    Header,
    /// Main content of the current view
    Main,
}

/// Main application state
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub nav: NavMenu,
    pub focus: PageFocus,

    // Page content
    pub faq: FaqAccordion,
    pub contact: ContactForm,

    // UI state
    pub scroll_offset: usize,
    pub live_region: LiveRegion,
    pub reveal: Reveal,
    pub copyright_year: i32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            nav: NavMenu::default(),
            focus: PageFocus::default(),
            faq: FaqAccordion::new(FAQ_ENTRIES),
            contact: ContactForm::contact_page(),
            scroll_offset: 0,
            live_region: LiveRegion::default(),
            reveal: Reveal::default(),
            copyright_year: chrono::Local::now().year(),
        }
    }
}

impl AppState {
    /// Switch to a view, starting at its top with focus in its content
    pub fn navigate(&mut self, view: View, now: Instant) {
        tracing::debug!("Navigating to {:?}", view);
        self.reveal.mark_shown(&view, now);
        self.current_view = view;
        self.scroll_offset = 0;
        self.focus = PageFocus::Main;
    }

    /// Skip link: jump from the header straight to the main content
    pub fn skip_to_content(&mut self) {
        self.nav.close();
        self.focus = PageFocus::Main;
    }

    /// Scroll one row, stopping at the last line of the page
    pub fn scroll_down(&mut self) {
        let last_line = page_text(&self.current_view).len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + 1).min(last_line);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Whether the header should use its scrolled style
    pub fn is_scrolled(&self) -> bool {
        self.scroll_offset > SCROLLED_THRESHOLD
    }

    /// Advance every timer-driven piece of state
    pub fn tick(&mut self, now: Instant) {
        self.contact.tick(now);
        self.live_region.tick(now);
    }
}
