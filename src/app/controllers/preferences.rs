//! Visual customization state shared by every section of the page.
//!
//! `PreferenceStore` is the single owner of the active colour theme, the
//! active font and the customize dialog flag. Consumers borrow it; changes
//! only go through the setters below, which also write the new value to the
//! backing [`KeyValueStore`].

use crate::app::domain::font::{FONT_PRESETS, FontChoice};
use crate::app::domain::theme::{COLOR_PRESETS, ColorPreset, ColorTheme};
use crate::app::infrastructure::storage::KeyValueStore;
use crate::app::services::persistence::{FONT_KEY, THEME_KEY, load_preference, save_preference};

#[derive(Debug)]
pub struct PreferenceStore<S: KeyValueStore> {
    theme: ColorTheme,
    font: FontChoice,
    dialog_open: bool,
    storage: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Restore saved preferences from `storage`, keeping the first preset
    /// for anything missing or malformed. The dialog always starts closed.
    pub fn initialize(storage: S) -> Self {
        let theme = load_preference::<ColorTheme>(&storage, THEME_KEY).unwrap_or_default();
        let font = load_preference::<FontChoice>(&storage, FONT_KEY).unwrap_or_default();

        log::debug!("Preferences restored: theme {}, font {}", theme, font);

        Self {
            theme,
            font,
            dialog_open: false,
            storage,
        }
    }

    pub fn theme(&self) -> &ColorTheme {
        &self.theme
    }

    pub fn font(&self) -> &FontChoice {
        &self.font
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn color_presets(&self) -> &'static [ColorPreset] {
        &COLOR_PRESETS
    }

    pub fn font_presets(&self) -> &'static [FontChoice] {
        &FONT_PRESETS
    }

    pub fn set_theme(&mut self, theme: ColorTheme) {
        log::debug!("Theme set to {}", theme);
        self.theme = theme;
        // Advisory: the in-memory value stays authoritative
        if let Err(e) = save_preference(&mut self.storage, THEME_KEY, &self.theme) {
            log::warn!("Failed to persist theme: {}", e);
        }
    }

    pub fn set_font(&mut self, font: FontChoice) {
        log::debug!("Font set to {}", font);
        self.font = font;
        if let Err(e) = save_preference(&mut self.storage, FONT_KEY, &self.font) {
            log::warn!("Failed to persist font: {}", e);
        }
    }

    pub fn toggle_dialog(&mut self) {
        self.dialog_open = !self.dialog_open;
    }

    pub fn set_dialog_open(&mut self, open: bool) {
        self.dialog_open = open;
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Hand the storage back, e.g. to simulate a reload.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
