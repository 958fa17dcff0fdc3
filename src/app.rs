//! Application state and core logic

use crate::config::SiteConfig;
use crate::delivery::{build_adapter, DeliveryAdapter, DeliveryError};
use crate::state::{AppState, ContactForm, PageFocus, View, NAV_LINKS};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::Instrument;
use uuid::Uuid;

/// Results coming back from background tasks
#[derive(Debug)]
pub enum AppEvent {
    /// A contact form send finished
    DeliveryFinished {
        attempt: Uuid,
        result: Result<(), DeliveryError>,
    },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where contact form submissions go
    delivery: Arc<dyn DeliveryAdapter>,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let delivery = build_adapter(config)?;
        Ok(Self::with_delivery(delivery, config.panel_timeout()))
    }

    /// Create an App that sends through the given adapter
    pub fn with_delivery(delivery: Arc<dyn DeliveryAdapter>, panel_timeout: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut state = AppState::default();
        state.contact = ContactForm::contact_page().with_panel_timeout(panel_timeout);
        let initial_view = state.current_view.clone();
        state.reveal.mark_shown(&initial_view, Instant::now());

        Self {
            state,
            delivery,
            events_tx,
            events_rx,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Terminal width, assuming 80 columns until the first draw
    pub fn terminal_width(&self) -> u16 {
        self.terminal_size.map(|(_, w)| w).unwrap_or(80)
    }

    /// Whether something on screen is moving and needs fast redraws
    pub fn is_animating(&self) -> bool {
        let now = Instant::now();
        self.state.reveal.is_animating(&self.state.current_view, now)
            || self.state.contact.is_busy()
    }

    /// Collect finished background work and fire due timers
    pub fn tick(&mut self) {
        let now = Instant::now();
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event, now);
        }
        self.state.tick(now);
    }

    fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::DeliveryFinished { attempt, result } => {
                tracing::debug!("Delivery {} finished", attempt);
                if let Some(message) = self.state.contact.finish_submit(result, now) {
                    self.state.live_region.announce(message, now);
                }
            }
        }
    }

    /// Start sending the contact form if it validates
    fn submit_contact(&mut self) {
        let Some(payload) = self.state.contact.begin_submit() else {
            return;
        };

        let attempt = Uuid::new_v4();
        let adapter = Arc::clone(&self.delivery);
        let tx = self.events_tx.clone();
        let span = tracing::info_span!("delivery", %attempt, channel = ?adapter.channel());

        tokio::spawn(
            async move {
                let result = adapter.send(&payload).await;
                if tx.send(AppEvent::DeliveryFinished { attempt, result }).is_err() {
                    tracing::warn!("App closed before delivery finished");
                }
            }
            .instrument(span),
        );
    }

    /// Terminal was resized
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = Some((height, width));
        self.state.nav.handle_resize(width);
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.nav.open {
            return self.handle_menu_key(key);
        }

        match self.state.focus {
            PageFocus::Header => self.handle_header_key(key),
            PageFocus::Main => match self.state.current_view {
                View::Contact => self.handle_contact_key(key),
                View::Faq => self.handle_faq_key(key),
                _ => self.handle_page_key(key),
            },
        }
    }

    fn navigate(&mut self, view: View) {
        self.state.navigate(view, Instant::now());
    }

    /// Keys while the navigation menu is open; focus stays inside it
    fn handle_menu_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.state.nav.escape();
                self.state.focus = PageFocus::Header;
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => self.state.nav.focus_next(),
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => self.state.nav.focus_prev(),
            KeyCode::Enter => {
                let width = self.terminal_width();
                let view = self.state.nav.select(width);
                self.navigate(view);
            }
            KeyCode::Char('m') => self.state.nav.toggle(),
            _ => {}
        }
        Ok(())
    }

    /// Keys while focus is in the header (skip link and navigation bar)
    fn handle_header_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('m') => self.state.nav.toggle(),
            KeyCode::Char('s') | KeyCode::Tab | KeyCode::Enter => self.state.skip_to_content(),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                if let Some((view, _)) = NAV_LINKS.get(index) {
                    self.navigate(view.clone());
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.cycle_view(false),
            KeyCode::Right | KeyCode::Char('l') => self.cycle_view(true),
            _ => {}
        }
        Ok(())
    }

    /// Move to the neighbouring page in navigation order, keeping focus in
    /// the header
    fn cycle_view(&mut self, forward: bool) {
        let count = NAV_LINKS.len();
        let current = NAV_LINKS
            .iter()
            .position(|(v, _)| *v == self.state.current_view)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.navigate(NAV_LINKS[next].0.clone());
        self.state.focus = PageFocus::Header;
    }

    /// Keys on text pages (Home, About, Services)
    fn handle_page_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('m') => self.state.nav.toggle(),
            KeyCode::Esc | KeyCode::BackTab => self.state.focus = PageFocus::Header,
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            _ => {}
        }
        Ok(())
    }

    fn handle_faq_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('m') => self.state.nav.toggle(),
            KeyCode::Esc | KeyCode::BackTab => self.state.focus = PageFocus::Header,
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.state.faq.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.state.faq.select_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => self.state.faq.toggle_selected(),
            _ => {}
        }
        Ok(())
    }

    fn handle_contact_key(&mut self, key: KeyEvent) -> Result<()> {
        let submit_modifier = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER);

        match key.code {
            KeyCode::Esc => {
                let active = self.state.contact.active_field_index;
                self.state.contact.handle_blur(active);
                self.state.focus = PageFocus::Header;
            }
            KeyCode::Char('s') if submit_modifier => self.submit_contact(),
            KeyCode::Tab => self.state.contact.focus_next(),
            KeyCode::BackTab => self.state.contact.focus_prev(),
            KeyCode::Enter if self.state.contact.is_submit_focused() => self.submit_contact(),
            KeyCode::Enter => {
                self.state.contact.handle_enter();
            }
            KeyCode::Char(c) if !submit_modifier => self.state.contact.handle_input(c),
            KeyCode::Backspace => self.state.contact.handle_backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle mouse input; only the wheel is used
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        match mouse.kind {
            MouseEventKind::ScrollDown => match self.state.current_view {
                View::Faq => self.state.faq.select_next(),
                View::Contact => {}
                _ => self.state.scroll_down(),
            },
            MouseEventKind::ScrollUp => match self.state.current_view {
                View::Faq => self.state.faq.select_prev(),
                View::Contact => {}
                _ => self.state.scroll_up(),
            },
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::{MailtoFallback, MockComposeLauncher, MockDeliveryAdapter};
    use crate::state::SubmissionState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    /// Open the contact page and fill in the scenario A values
    async fn fill_contact_form(app: &mut App) {
        app.handle_key(key(KeyCode::Char('5'))).await.unwrap();
        assert_eq!(app.state.current_view, View::Contact);
        assert_eq!(app.state.focus, PageFocus::Main);

        type_text(app, "Jo").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_text(app, "jo@x.com").await;
        app.handle_key(key(KeyCode::Tab)).await.unwrap(); // phone, left blank
        app.handle_key(key(KeyCode::Tab)).await.unwrap(); // topic
        app.handle_key(key(KeyCode::Tab)).await.unwrap(); // message
        type_text(app, "Hello there, testing.").await;
    }

    /// Wait for the background send and apply its outcome
    async fn finish_delivery(app: &mut App) {
        let event = app.events_rx.recv().await.unwrap();
        app.handle_event(event, Instant::now());
    }

    fn app_with(adapter: MockDeliveryAdapter) -> App {
        App::with_delivery(Arc::new(adapter), Duration::from_secs(10))
    }

    mod navigation {
        use super::*;

        #[tokio::test]
        async fn test_menu_open_select_and_escape() {
            let mut app = app_with(MockDeliveryAdapter::new());
            app.handle_resize(80, 24);

            app.handle_key(key(KeyCode::Char('m'))).await.unwrap();
            assert!(app.state.nav.open);
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::About);
            assert!(!app.state.nav.open);

            app.handle_key(key(KeyCode::Char('m'))).await.unwrap();
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(!app.state.nav.open);
            assert!(app.state.nav.toggle_focused);
            assert_eq!(app.state.focus, PageFocus::Header);
        }

        #[tokio::test]
        async fn test_menu_traps_typing() {
            let mut app = app_with(MockDeliveryAdapter::new());
            app.handle_key(key(KeyCode::Char('m'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(!app.should_quit());
        }

        #[tokio::test]
        async fn test_header_arrows_cycle_pages() {
            let mut app = app_with(MockDeliveryAdapter::new());
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            assert_eq!(app.state.current_view, View::Contact);
            assert_eq!(app.state.focus, PageFocus::Header);
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.state.current_view, View::Home);
        }

        #[tokio::test]
        async fn test_skip_link_moves_focus_to_main() {
            let mut app = app_with(MockDeliveryAdapter::new());
            app.handle_key(key(KeyCode::Char('s'))).await.unwrap();
            assert_eq!(app.state.focus, PageFocus::Main);
        }

        #[tokio::test]
        async fn test_faq_enter_toggles_selected() {
            let mut app = app_with(MockDeliveryAdapter::new());
            app.handle_key(key(KeyCode::Char('4'))).await.unwrap();
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.faq.expanded_index(), Some(1));
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert_eq!(app.state.faq.expanded_index(), None);
        }

        #[tokio::test]
        async fn test_wide_resize_closes_menu() {
            let mut app = app_with(MockDeliveryAdapter::new());
            app.handle_key(key(KeyCode::Char('m'))).await.unwrap();
            app.handle_resize(150, 40);
            assert!(!app.state.nav.open);
        }

        #[tokio::test]
        async fn test_q_quits_from_header() {
            let mut app = app_with(MockDeliveryAdapter::new());
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(app.should_quit());
        }
    }

    mod contact {
        use super::*;

        #[tokio::test]
        async fn test_typing_q_in_form_does_not_quit() {
            let mut app = app_with(MockDeliveryAdapter::new());
            app.handle_key(key(KeyCode::Char('5'))).await.unwrap();
            type_text(&mut app, "q").await;
            assert!(!app.should_quit());
            assert_eq!(app.state.contact.fields[0].value, "q");
        }

        #[tokio::test]
        async fn test_submit_sends_payload_and_shows_success() {
            let mut adapter = MockDeliveryAdapter::new();
            adapter
                .expect_channel()
                .return_const(crate::delivery::DeliveryChannel::EmailService);
            adapter
                .expect_send()
                .withf(|p| p.name == "Jo" && p.phone == "Not provided")
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(adapter);

            fill_contact_form(&mut app).await;
            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(app.state.contact.state, SubmissionState::Sending);
            assert!(app.state.contact.submit.is_busy());

            finish_delivery(&mut app).await;
            assert_eq!(app.state.contact.state, SubmissionState::Succeeded);
            assert!(!app.state.contact.submit.is_busy());
            assert_eq!(
                app.state.live_region.current(),
                Some("Your message has been sent successfully!")
            );
        }

        #[tokio::test]
        async fn test_enter_on_submit_button_with_blank_form_does_not_send() {
            let mut adapter = MockDeliveryAdapter::new();
            adapter.expect_send().times(0);
            let mut app = app_with(adapter);

            app.handle_key(key(KeyCode::Char('5'))).await.unwrap();
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            assert!(app.state.contact.is_submit_focused());
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.contact.state, SubmissionState::Idle);
            assert!(app.events_rx.try_recv().is_err());
        }

        #[tokio::test]
        async fn test_failed_send_shows_error_panel() {
            let mut adapter = MockDeliveryAdapter::new();
            adapter
                .expect_channel()
                .return_const(crate::delivery::DeliveryChannel::EmailService);
            adapter
                .expect_send()
                .returning(|_| Err(DeliveryError::Transport("network down".to_string())));
            let mut app = app_with(adapter);

            fill_contact_form(&mut app).await;
            app.handle_key(ctrl('s')).await.unwrap();
            finish_delivery(&mut app).await;

            assert_eq!(app.state.contact.state, SubmissionState::Failed);
            assert_eq!(app.state.contact.panels.len(), 1);
            assert!(app.state.contact.submit.enabled);
            assert_eq!(app.state.live_region.current(), None);
        }

        #[tokio::test]
        async fn test_scenario_d_mail_compose_fallback() {
            let mut launcher = MockComposeLauncher::new();
            launcher
                .expect_launch()
                .withf(|uri| uri.starts_with("mailto:worldsedgewellness@gmail.com?"))
                .times(1)
                .returning(|_| Ok(()));
            let fallback = MailtoFallback::new(Box::new(launcher), Duration::from_millis(10));
            let mut app = App::with_delivery(Arc::new(fallback), Duration::from_secs(10));

            fill_contact_form(&mut app).await;
            app.handle_key(ctrl('s')).await.unwrap();
            finish_delivery(&mut app).await;

            let contact = &app.state.contact;
            assert_eq!(contact.state, SubmissionState::Succeeded);
            assert!(contact.hidden);
            assert_eq!(contact.panels.len(), 1);
            assert!(contact.fields.iter().all(|f| f.value.is_empty()));
        }
    }
}
