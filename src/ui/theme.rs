//! Page-wide styling tokens derived from the visitor's preferences.

use std::fmt::Write;

use crate::app::domain::font::FontChoice;
use crate::app::domain::theme::ColorTheme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub main: String,
    pub light: String,
    pub dark: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backgrounds {
    pub default: &'static str,
    pub paper: &'static str,
    pub darker: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: String,
}

/// Dark palette plus typography, rebuilt whenever the theme or font changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTheme {
    pub primary: Swatch,
    pub secondary: Swatch,
    pub accent: Swatch,
    pub background: Backgrounds,
    pub text: TextColors,
    pub font_family: String,
    pub border_radius: u32,
}

impl PageTheme {
    pub fn new(theme: &ColorTheme, font: &FontChoice) -> Self {
        let primary = theme.primary().to_string();
        let secondary = theme.secondary().to_string();

        Self {
            primary: Swatch {
                main: primary.clone(),
                light: secondary.clone(),
                dark: primary.clone(),
            },
            secondary: Swatch {
                main: secondary.clone(),
                light: secondary,
                dark: primary.clone(),
            },
            accent: Swatch {
                main: "#FFE66D".to_string(),
                light: "#FFF0A8".to_string(),
                dark: "#E6C92A".to_string(),
            },
            background: Backgrounds {
                default: "#1A1A2E",
                paper: "#16213E",
                darker: "#0F172A",
            },
            text: TextColors {
                primary: "#F7F7F7",
                secondary: "#B2B2B2",
                accent: primary,
            },
            font_family: font.family().to_string(),
            border_radius: 12,
        }
    }

    /// Render as CSS custom properties, one declaration per line.
    pub fn to_css_variables(&self) -> String {
        let vars: [(&str, &str); 14] = [
            ("color-primary", self.primary.main.as_str()),
            ("color-primary-light", self.primary.light.as_str()),
            ("color-primary-dark", self.primary.dark.as_str()),
            ("color-secondary", self.secondary.main.as_str()),
            ("color-secondary-light", self.secondary.light.as_str()),
            ("color-secondary-dark", self.secondary.dark.as_str()),
            ("color-accent", self.accent.main.as_str()),
            ("color-background", self.background.default),
            ("color-paper", self.background.paper),
            ("color-background-darker", self.background.darker),
            ("color-text", self.text.primary),
            ("color-text-secondary", self.text.secondary),
            ("color-text-accent", self.text.accent.as_str()),
            ("font-family", self.font_family.as_str()),
        ];

        let mut css = String::new();
        for (name, value) in vars {
            let _ = writeln!(css, "--{}: {};", name, value);
        }
        let _ = writeln!(css, "--radius: {}px;", self.border_radius);
        css
    }
}

/// Header background and blur. The bar firms up once the page has scrolled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeStyle {
    pub background_alpha: f32,
    pub blur_px: u32,
}

pub fn chrome_style(scrolled: bool) -> ChromeStyle {
    if scrolled {
        ChromeStyle {
            background_alpha: 0.9,
            blur_px: 10,
        }
    } else {
        ChromeStyle {
            background_alpha: 0.7,
            blur_px: 8,
        }
    }
}
