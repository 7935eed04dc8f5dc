use crate::app::infrastructure::error::AppError;

use super::contact::ContactField;
use super::font::FontChoice;
use super::sections::Section;
use super::theme::ColorTheme;

/// Everything the page shell reacts to. Event handlers send one of these;
/// `AppState::dispatch` applies it.
#[derive(Debug)]
pub enum Message {
    // Customize dialog
    SetTheme(ColorTheme),
    SetFont(FontChoice),
    OpenCustomize,
    ToggleCustomize,
    CloseCustomize,

    // Navigation
    Scrolled(f64),
    LayoutChanged(Vec<Section>),
    Navigate(String),
    CallToAction(String),
    ToggleDrawer,

    // Contact form
    ContactInput(ContactField, String),
    ContactSubmit,
    ContactSettled(Result<(), AppError>),
    DismissNotification,
}
