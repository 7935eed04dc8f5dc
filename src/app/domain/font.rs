use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::app::infrastructure::error::AppError;

/// Typeface selection: a unique display label plus the CSS `font-family`
/// descriptor it stands for. Neither part may be blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFontChoice")]
pub struct FontChoice {
    name: Cow<'static, str>,
    family: Cow<'static, str>,
}

#[derive(Deserialize)]
struct RawFontChoice {
    name: String,
    family: String,
}

impl TryFrom<RawFontChoice> for FontChoice {
    type Error = AppError;

    fn try_from(raw: RawFontChoice) -> Result<Self, Self::Error> {
        FontChoice::parse(raw.name, raw.family)
    }
}

impl FontChoice {
    const fn preset(name: &'static str, family: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            family: Cow::Borrowed(family),
        }
    }

    pub fn parse(name: impl Into<String>, family: impl Into<String>) -> Result<Self, AppError> {
        let name = name.into();
        let family = family.into();

        if name.trim().is_empty() {
            return Err(AppError::InvalidFont("name is empty".to_string()));
        }
        if family.trim().is_empty() {
            return Err(AppError::InvalidFont(format!("family for '{}' is empty", name)));
        }

        Ok(Self {
            name: Cow::Owned(name),
            family: Cow::Owned(family),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> &str {
        &self.family
    }
}

impl Default for FontChoice {
    fn default() -> Self {
        FONT_PRESETS[0].clone()
    }
}

impl fmt::Display for FontChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

pub static FONT_PRESETS: [FontChoice; 9] = [
    FontChoice::preset("Poppins", "\"Poppins\", sans-serif"),
    FontChoice::preset("Playfair", "\"Playfair Display\", serif"),
    FontChoice::preset("Montserrat", "\"Montserrat\", sans-serif"),
    FontChoice::preset("Roboto", "\"Roboto\", sans-serif"),
    FontChoice::preset("Open Sans", "\"Open Sans\", sans-serif"),
    FontChoice::preset("Raleway", "\"Raleway\", sans-serif"),
    FontChoice::preset("Lora", "\"Lora\", serif"),
    FontChoice::preset("Nunito", "\"Nunito\", sans-serif"),
    FontChoice::preset("Source", "\"Source Sans Pro\", sans-serif"),
];

/// Look up a preset by its label, case-insensitively.
pub fn find_font_preset(name: &str) -> Option<&'static FontChoice> {
    FONT_PRESETS
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(name.trim()))
}
