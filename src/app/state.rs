use std::sync::mpsc::{Receiver, Sender, channel};

use super::config::SiteConfig;
use super::controllers::navigation::NavBar;
use super::controllers::preferences::PreferenceStore;
use super::domain::messages::Message;
use super::domain::sections::{PAGE_SECTIONS, Section, SectionId};
use super::infrastructure::events::{ScrollEvents, ScrollSubscription};
use super::infrastructure::storage::KeyValueStore;
use super::services::contact::{ContactController, EmailRelay};
use super::services::navigation::{ScrollCapability, ScrollRequest};
use crate::ui::theme::PageTheme;

/// Outside capabilities the page shell drives.
pub struct Capabilities<'a> {
    pub scroller: &'a mut dyn ScrollCapability,
    pub relay: &'a mut dyn EmailRelay,
}

/// The page shell. Owns every piece of page state; event handlers only
/// send [`Message`]s, which [`AppState::dispatch`] applies in order.
pub struct AppState<S: KeyValueStore> {
    pub config: SiteConfig,
    pub preferences: PreferenceStore<S>,
    pub nav: NavBar,
    pub contact: ContactController,
    sender: Sender<Message>,
    receiver: Receiver<Message>,
    scroll_subscription: Option<ScrollSubscription>,
}

impl<S: KeyValueStore> AppState<S> {
    pub fn new(config: SiteConfig, storage: S, layout: Vec<Section>) -> Self {
        let (sender, receiver) = channel();
        let nav = NavBar::new(layout, config.scroll_duration_ms);

        Self {
            config,
            preferences: PreferenceStore::initialize(storage),
            nav,
            contact: ContactController::new(),
            sender,
            receiver,
            scroll_subscription: None,
        }
    }

    /// Sender for handlers and asynchronous completions.
    pub fn sender(&self) -> Sender<Message> {
        self.sender.clone()
    }

    /// Start listening to scroll events. Re-mounting replaces the previous
    /// registration.
    pub fn mount(&mut self, events: &ScrollEvents) {
        let sender = self.sender.clone();
        let subscription = events.subscribe(move |y| {
            // The receiver lives as long as the state that owns the subscription
            let _ = sender.send(Message::Scrolled(y));
        });
        self.scroll_subscription = Some(subscription);
    }

    pub fn unmount(&mut self) {
        self.scroll_subscription = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.scroll_subscription.is_some()
    }

    /// Apply every queued message. Returns how many were handled.
    pub fn pump(&mut self, caps: &mut Capabilities<'_>) -> usize {
        let mut handled = 0;
        while let Ok(message) = self.receiver.try_recv() {
            self.dispatch(message, caps);
            handled += 1;
        }
        handled
    }

    pub fn dispatch(&mut self, message: Message, caps: &mut Capabilities<'_>) {
        match message {
            Message::SetTheme(theme) => self.preferences.set_theme(theme),
            Message::SetFont(font) => self.preferences.set_font(font),
            Message::OpenCustomize => self.preferences.set_dialog_open(true),
            Message::ToggleCustomize => self.preferences.toggle_dialog(),
            Message::CloseCustomize => self.preferences.set_dialog_open(false),

            Message::Scrolled(y) => {
                self.nav.on_scroll(y);
            }
            Message::LayoutChanged(layout) => self.nav.set_layout(layout),
            Message::Navigate(target) => {
                self.nav.navigate(&target, &mut *caps.scroller);
            }
            Message::CallToAction(target) => {
                if PAGE_SECTIONS.contains(&target.as_str()) {
                    let request = ScrollRequest::call_to_action(
                        SectionId::new(target),
                        self.config.cta_duration_ms,
                        self.config.scroll_offset,
                    );
                    caps.scroller.scroll_to(&request);
                } else {
                    log::warn!("No section named '{}' for call to action", target);
                }
            }
            Message::ToggleDrawer => self.nav.toggle_drawer(),

            Message::ContactInput(field, value) => self.contact.update(field, value),
            Message::ContactSubmit => {
                let result = self.contact.submit(&mut *caps.relay, &self.config.relay);
                log::debug!("Contact submit: {:?}", result);
            }
            Message::ContactSettled(outcome) => self.contact.complete(outcome),
            Message::DismissNotification => self.contact.close_notification(),
        }
    }

    /// Styling tokens for the current preferences.
    pub fn page_theme(&self) -> PageTheme {
        PageTheme::new(self.preferences.theme(), self.preferences.font())
    }
}
