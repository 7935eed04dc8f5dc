use crate::app::controllers::preferences::PreferenceStore;
use crate::app::domain::font::FontChoice;
use crate::app::domain::theme::ColorTheme;
use crate::app::infrastructure::storage::KeyValueStore;

pub const UNSELECTED_BORDER: &str = "2px solid rgba(255, 255, 255, 0.1)";
const SELECTED_TINT_ALPHA: f32 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct FontTile {
    pub font: FontChoice,
    pub selected: bool,
    pub border: String,
    /// `None` means the dialog's paper colour.
    pub background: Option<String>,
    pub text_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorSwatch {
    pub label: &'static str,
    pub theme: ColorTheme,
    pub selected: bool,
    pub border: String,
}

/// What the "Customize" dialog shows for the current preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomizeDialog {
    pub open: bool,
    pub title_color: String,
    pub fonts: Vec<FontTile>,
    pub colors: Vec<ColorSwatch>,
}

impl CustomizeDialog {
    pub fn build<S: KeyValueStore>(prefs: &PreferenceStore<S>) -> Self {
        let current = prefs.theme();
        let selected_border = format!("2px solid {}", current.primary());

        let fonts = prefs
            .font_presets()
            .iter()
            .map(|font| {
                let selected = font.name() == prefs.font().name();
                FontTile {
                    font: font.clone(),
                    selected,
                    border: if selected {
                        selected_border.clone()
                    } else {
                        UNSELECTED_BORDER.to_string()
                    },
                    background: selected.then(|| current.rgba(SELECTED_TINT_ALPHA)),
                    text_color: selected.then(|| current.primary().to_string()),
                }
            })
            .collect();

        let colors = prefs
            .color_presets()
            .iter()
            .map(|preset| {
                let selected = preset.theme.is_same(current);
                ColorSwatch {
                    label: preset.label,
                    theme: preset.theme.clone(),
                    selected,
                    // A selected swatch is outlined in its own colour
                    border: if selected {
                        format!("2px solid {}", preset.theme.primary())
                    } else {
                        UNSELECTED_BORDER.to_string()
                    },
                }
            })
            .collect();

        Self {
            open: prefs.dialog_open(),
            title_color: current.primary().to_string(),
            fonts,
            colors,
        }
    }

    pub fn selected_font(&self) -> Option<&FontTile> {
        self.fonts.iter().find(|t| t.selected)
    }

    pub fn selected_color(&self) -> Option<&ColorSwatch> {
        self.colors.iter().find(|s| s.selected)
    }
}
