use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::app::infrastructure::error::AppError;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex colour pattern is valid"));

/// Returns true for `#RRGGBB` strings.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Accent colour pair. Both colours are always `#RRGGBB`; deserialization
/// goes through the same check as [`ColorTheme::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawColorTheme")]
pub struct ColorTheme {
    primary: Cow<'static, str>,
    secondary: Cow<'static, str>,
}

#[derive(Deserialize)]
struct RawColorTheme {
    primary: String,
    secondary: String,
}

impl TryFrom<RawColorTheme> for ColorTheme {
    type Error = AppError;

    fn try_from(raw: RawColorTheme) -> Result<Self, Self::Error> {
        ColorTheme::parse(raw.primary, raw.secondary)
    }
}

impl ColorTheme {
    const fn preset(primary: &'static str, secondary: &'static str) -> Self {
        Self {
            primary: Cow::Borrowed(primary),
            secondary: Cow::Borrowed(secondary),
        }
    }

    /// Build an ad-hoc theme, rejecting anything that isn't `#RRGGBB`.
    pub fn parse(
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Result<Self, AppError> {
        let primary = primary.into();
        let secondary = secondary.into();

        if !is_hex_color(&primary) {
            return Err(AppError::InvalidTheme(format!(
                "primary '{}' is not a #RRGGBB colour",
                primary
            )));
        }
        if !is_hex_color(&secondary) {
            return Err(AppError::InvalidTheme(format!(
                "secondary '{}' is not a #RRGGBB colour",
                secondary
            )));
        }

        Ok(Self {
            primary: Cow::Owned(primary),
            secondary: Cow::Owned(secondary),
        })
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    /// Same colours, ignoring hex digit case.
    pub fn is_same(&self, other: &ColorTheme) -> bool {
        self.primary.eq_ignore_ascii_case(&other.primary)
            && self.secondary.eq_ignore_ascii_case(&other.secondary)
    }

    /// Red, green and blue channels of the primary colour.
    pub fn primary_rgb(&self) -> [u8; 3] {
        let mut rgb = [0u8; 3];
        // Validated on construction, so the decode cannot fail
        let _ = hex::decode_to_slice(&self.primary[1..], &mut rgb);
        rgb
    }

    /// Primary colour as a CSS `rgba()` with the given alpha.
    pub fn rgba(&self, alpha: f32) -> String {
        let [r, g, b] = self.primary_rgb();
        format!("rgba({}, {}, {}, {})", r, g, b, alpha)
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        COLOR_PRESETS[0].theme.clone()
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.primary, self.secondary)
    }
}

/// A named entry in the colour picker.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPreset {
    pub label: &'static str,
    pub theme: ColorTheme,
}

pub static COLOR_PRESETS: [ColorPreset; 11] = [
    ColorPreset { label: "Coral", theme: ColorTheme::preset("#FF6B6B", "#4ECDC4") },
    ColorPreset { label: "Blue", theme: ColorTheme::preset("#3498db", "#2980b9") },
    ColorPreset { label: "Green", theme: ColorTheme::preset("#2ecc71", "#27ae60") },
    ColorPreset { label: "Red", theme: ColorTheme::preset("#e74c3c", "#c0392b") },
    ColorPreset { label: "Orange", theme: ColorTheme::preset("#f39c12", "#d35400") },
    ColorPreset { label: "Purple", theme: ColorTheme::preset("#9b59b6", "#8e44ad") },
    ColorPreset { label: "Pink", theme: ColorTheme::preset("#f368e0", "#e84393") },
    ColorPreset { label: "Amber", theme: ColorTheme::preset("#FF9A00", "#FF7B00") },
    ColorPreset { label: "Teal", theme: ColorTheme::preset("#00b894", "#00a884") },
    ColorPreset { label: "Yellow", theme: ColorTheme::preset("#fdcb6e", "#f9ca24") },
    ColorPreset { label: "Cyan", theme: ColorTheme::preset("#00cec9", "#00b5ad") },
];

/// Find a preset whose colours match `theme`.
pub fn find_color_preset(theme: &ColorTheme) -> Option<&'static ColorPreset> {
    COLOR_PRESETS.iter().find(|p| p.theme.is_same(theme))
}
