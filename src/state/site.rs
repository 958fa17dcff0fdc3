//! State for the page furniture around the contact form: navigation menu,
//! FAQ accordion, section reveal and the live region.

use super::app_state::View;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Terminal width at or below which the navigation collapses into a menu.
/// 768px at roughly 8px per column.
pub const NARROW_WIDTH: u16 = 96;

/// Navigation links in display order
pub const NAV_LINKS: &[(View, &str)] = &[
    (View::Home, "Home"),
    (View::About, "About"),
    (View::Services, "Services"),
    (View::Faq, "FAQ"),
    (View::Contact, "Contact"),
];

/// Collapsible navigation menu
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    pub open: bool,
    /// Focused link while open
    pub focused_link: usize,
    /// Whether keyboard focus is on the menu toggle
    pub toggle_focused: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Open the menu and focus its first link
    pub fn open(&mut self) {
        self.open = true;
        self.focused_link = 0;
        self.toggle_focused = false;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Escape: close and hand focus back to the toggle
    pub fn escape(&mut self) -> bool {
        if self.open {
            self.close();
            self.toggle_focused = true;
            true
        } else {
            false
        }
    }

    /// Tab inside the open menu; focus wraps so it never leaves the list
    pub fn focus_next(&mut self) {
        self.focused_link = (self.focused_link + 1) % NAV_LINKS.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused_link = if self.focused_link == 0 {
            NAV_LINKS.len() - 1
        } else {
            self.focused_link - 1
        };
    }

    /// Follow the focused link. The menu closes on narrow terminals.
    pub fn select(&mut self, terminal_width: u16) -> View {
        if terminal_width <= NARROW_WIDTH {
            self.close();
        }
        NAV_LINKS[self.focused_link].0.clone()
    }

    /// Widening past the breakpoint closes the menu
    pub fn handle_resize(&mut self, terminal_width: u16) {
        if terminal_width > NARROW_WIDTH {
            self.close();
        }
    }
}

/// One question in the FAQ
#[derive(Debug, Clone)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
    pub expanded: bool,
}

/// FAQ accordion; at most one item is expanded
#[derive(Debug, Clone)]
pub struct FaqAccordion {
    pub items: Vec<FaqItem>,
    pub selected: usize,
}

impl FaqAccordion {
    pub fn new(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            items: entries
                .iter()
                .map(|&(question, answer)| FaqItem {
                    question,
                    answer,
                    expanded: false,
                })
                .collect(),
            selected: 0,
        }
    }

    /// Collapse every other item, then flip item `index`
    pub fn toggle(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        let was_expanded = self.items[index].expanded;
        for item in &mut self.items {
            item.expanded = false;
        }
        self.items[index].expanded = !was_expanded;
    }

    pub fn toggle_selected(&mut self) {
        self.toggle(self.selected);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn expanded_index(&self) -> Option<usize> {
        self.items.iter().position(|i| i.expanded)
    }
}

/// Polite live region: holds an announcement for a short while
#[derive(Debug, Clone, Default)]
pub struct LiveRegion {
    message: Option<(String, Instant)>,
}

impl LiveRegion {
    const CLEAR_AFTER: Duration = Duration::from_secs(1);

    pub fn announce(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        tracing::debug!("Announcing: {}", message);
        self.message = Some((message, now + Self::CLEAR_AFTER));
    }

    pub fn current(&self) -> Option<&str> {
        self.message.as_ref().map(|(m, _)| m.as_str())
    }

    pub fn tick(&mut self, now: Instant) {
        if self.message.as_ref().is_some_and(|(_, due)| *due <= now) {
            self.message = None;
        }
    }
}

/// Slide-in animation played the first time each view is shown
#[derive(Debug, Clone, Default)]
pub struct Reveal {
    first_shown: HashMap<View, Instant>,
}

impl Reveal {
    const DURATION: Duration = Duration::from_millis(600);
    /// Rows the body starts below its resting place
    const DISTANCE: f32 = 3.0;

    /// Record the first showing of a view; later showings are ignored
    pub fn mark_shown(&mut self, view: &View, now: Instant) {
        self.first_shown.entry(view.clone()).or_insert(now);
    }

    /// Rows the view body is still displaced by
    pub fn offset(&self, view: &View, now: Instant) -> u16 {
        let Some(start) = self.first_shown.get(view) else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(*start);
        if elapsed >= Self::DURATION {
            return 0;
        }
        let progress = elapsed.as_secs_f32() / Self::DURATION.as_secs_f32();
        let eased = simple_easing::cubic_out(progress);
        ((1.0 - eased) * Self::DISTANCE).round() as u16
    }

    pub fn is_animating(&self, view: &View, now: Instant) -> bool {
        self.offset(view, now) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod nav_menu {
        use super::*;

        #[test]
        fn test_toggle_opens_and_focuses_first_link() {
            let mut nav = NavMenu {
                focused_link: 3,
                ..Default::default()
            };
            nav.toggle();
            assert!(nav.open);
            assert_eq!(nav.focused_link, 0);
            nav.toggle();
            assert!(!nav.open);
        }

        #[test]
        fn test_escape_returns_focus_to_toggle() {
            let mut nav = NavMenu::default();
            assert!(!nav.escape());
            nav.open();
            assert!(nav.escape());
            assert!(!nav.open);
            assert!(nav.toggle_focused);
        }

        #[test]
        fn test_focus_is_trapped_inside_menu() {
            let mut nav = NavMenu::default();
            nav.open();
            nav.focus_prev();
            assert_eq!(nav.focused_link, NAV_LINKS.len() - 1);
            nav.focus_next();
            assert_eq!(nav.focused_link, 0);
        }

        #[test]
        fn test_select_closes_only_when_narrow() {
            let mut nav = NavMenu::default();
            nav.open();
            nav.focus_next();
            assert_eq!(nav.select(120), View::About);
            assert!(nav.open);
            assert_eq!(nav.select(80), View::About);
            assert!(!nav.open);
        }

        #[test]
        fn test_resize_wide_closes() {
            let mut nav = NavMenu::default();
            nav.open();
            nav.handle_resize(90);
            assert!(nav.open);
            nav.handle_resize(140);
            assert!(!nav.open);
        }
    }

    mod faq {
        use super::*;

        fn accordion() -> FaqAccordion {
            FaqAccordion::new(&[("Q1", "A1"), ("Q2", "A2"), ("Q3", "A3")])
        }

        #[test]
        fn test_toggle_opens_one_at_a_time() {
            let mut faq = accordion();
            faq.toggle(0);
            assert_eq!(faq.expanded_index(), Some(0));
            faq.toggle(2);
            assert_eq!(faq.expanded_index(), Some(2));
            assert_eq!(faq.items.iter().filter(|i| i.expanded).count(), 1);
        }

        #[test]
        fn test_toggle_twice_collapses() {
            let mut faq = accordion();
            faq.toggle(1);
            faq.toggle(1);
            assert_eq!(faq.expanded_index(), None);
        }

        #[test]
        fn test_out_of_range_toggle_is_noop() {
            let mut faq = accordion();
            faq.toggle(9);
            assert_eq!(faq.expanded_index(), None);
        }

        #[test]
        fn test_selection_is_clamped() {
            let mut faq = accordion();
            faq.select_prev();
            assert_eq!(faq.selected, 0);
            for _ in 0..5 {
                faq.select_next();
            }
            assert_eq!(faq.selected, 2);
            faq.toggle_selected();
            assert_eq!(faq.expanded_index(), Some(2));
        }
    }

    mod live_region {
        use super::*;

        #[test]
        fn test_announcement_clears_after_a_second() {
            let mut region = LiveRegion::default();
            let now = Instant::now();
            region.announce("Sent", now);
            region.tick(now + Duration::from_millis(500));
            assert_eq!(region.current(), Some("Sent"));
            region.tick(now + Duration::from_secs(1));
            assert_eq!(region.current(), None);
        }
    }

    mod reveal {
        use super::*;

        #[test]
        fn test_offset_eases_to_zero() {
            let mut reveal = Reveal::default();
            let now = Instant::now();
            reveal.mark_shown(&View::About, now);
            assert_eq!(reveal.offset(&View::About, now), 3);
            assert!(reveal.is_animating(&View::About, now));
            assert_eq!(reveal.offset(&View::About, now + Duration::from_millis(600)), 0);
        }

        #[test]
        fn test_reveals_only_once() {
            let mut reveal = Reveal::default();
            let now = Instant::now();
            reveal.mark_shown(&View::Faq, now);
            let later = now + Duration::from_secs(5);
            reveal.mark_shown(&View::Faq, later);
            assert_eq!(reveal.offset(&View::Faq, later), 0);
        }

        #[test]
        fn test_unseen_view_has_no_offset() {
            let reveal = Reveal::default();
            assert_eq!(reveal.offset(&View::Home, Instant::now()), 0);
        }
    }
}
