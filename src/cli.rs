//! Command-line interface for folio.
//!
//! Inspects and changes the stored preferences and replays scroll positions
//! through the section tracker.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::app::config::SiteConfig;
use crate::app::domain::font::{FONT_PRESETS, FontChoice, find_font_preset};
use crate::app::domain::sections::{Section, uniform_layout};
use crate::app::domain::theme::{COLOR_PRESETS, ColorTheme, find_color_preset};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::storage::KeyValueStore;
use crate::app::state::AppState;
use crate::ui::theme::chrome_style;

/// Height used for every section when no layout is given.
const DEFAULT_SECTION_HEIGHT: f64 = 800.0;

/// folio - portfolio theme preferences and scroll spy
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Key-value file holding the saved preferences
    #[arg(long, value_name = "PATH", global = true)]
    pub storage: Option<PathBuf>,

    /// Site config file (default: <config dir>/folio/config.json)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the colour and font presets
    Presets,
    /// Show the active theme and font
    Show,
    /// Print the page theme as CSS custom properties
    Css,
    /// Select a colour theme: a preset index or label, or two #RRGGBB colours
    Theme {
        #[arg(required = true, num_args = 1..=2)]
        values: Vec<String>,
    },
    /// Select a font by preset index or name
    Font { value: String },
    /// Report the highlighted section for a scroll position
    Scroll {
        /// Vertical scroll offset in pixels (negative for overscroll)
        #[arg(allow_negative_numbers = true)]
        y: f64,

        /// Section layout as id=offset, in document order
        #[arg(long = "section", value_name = "ID=OFFSET", value_parser = parse_section)]
        sections: Vec<Section>,
    },
}

fn parse_section(value: &str) -> std::result::Result<Section, String> {
    let (id, offset) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ID=OFFSET, got '{}'", value))?;
    if id.trim().is_empty() {
        return Err("section id is empty".to_string());
    }
    let offset: f64 = offset
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", offset))?;
    Ok(Section::new(id.trim(), offset))
}

impl Cli {
    /// Config from `--config` (which must exist and parse) or the default
    /// location, with `--storage` applied on top.
    pub fn site_config(&self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::try_load_from(path)?,
            None => SiteConfig::load(),
        };
        if let Some(storage) = &self.storage {
            config.storage_path = Some(storage.clone());
        }
        Ok(config)
    }
}

fn resolve_theme(values: &[String]) -> Result<ColorTheme> {
    match values {
        [primary, secondary] => ColorTheme::parse(primary.as_str(), secondary.as_str()),
        [value] => {
            if let Ok(index) = value.parse::<usize>() {
                return COLOR_PRESETS
                    .get(index)
                    .map(|p| p.theme.clone())
                    .ok_or_else(|| {
                        AppError::InvalidTheme(format!(
                            "preset index {} out of range (0-{})",
                            index,
                            COLOR_PRESETS.len() - 1
                        ))
                    });
            }
            COLOR_PRESETS
                .iter()
                .find(|p| p.label.eq_ignore_ascii_case(value))
                .map(|p| p.theme.clone())
                .ok_or_else(|| AppError::InvalidTheme(format!("no preset named '{}'", value)))
        }
        _ => Err(AppError::InvalidTheme("expected a preset or two colours".to_string())),
    }
}

fn resolve_font(value: &str) -> Result<FontChoice> {
    if let Ok(index) = value.parse::<usize>() {
        return FONT_PRESETS.get(index).cloned().ok_or_else(|| {
            AppError::InvalidFont(format!(
                "preset index {} out of range (0-{})",
                index,
                FONT_PRESETS.len() - 1
            ))
        });
    }
    find_font_preset(value)
        .cloned()
        .ok_or_else(|| AppError::InvalidFont(format!("no font named '{}'", value)))
}

fn describe_theme(theme: &ColorTheme) -> String {
    match find_color_preset(theme) {
        Some(preset) => format!("{} ({})", preset.label, theme),
        None => format!("custom ({})", theme),
    }
}

/// Run one command against `app`, writing the report to `out`.
pub fn execute<S: KeyValueStore>(
    command: Commands,
    app: &mut AppState<S>,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Commands::Presets => {
            writeln!(out, "Colours:")?;
            for (i, preset) in app.preferences.color_presets().iter().enumerate() {
                writeln!(out, "  {:>2}  {:<8} {}", i, preset.label, preset.theme)?;
            }
            writeln!(out, "Fonts:")?;
            for (i, font) in app.preferences.font_presets().iter().enumerate() {
                writeln!(out, "  {:>2}  {:<10} {}", i, font.name(), font.family())?;
            }
        }
        Commands::Show => {
            writeln!(out, "theme: {}", describe_theme(app.preferences.theme()))?;
            let font = app.preferences.font();
            writeln!(out, "font:  {} ({})", font.name(), font.family())?;
        }
        Commands::Css => {
            write!(out, "{}", app.page_theme().to_css_variables())?;
        }
        Commands::Theme { values } => {
            let theme = resolve_theme(&values)?;
            app.preferences.set_theme(theme);
            writeln!(out, "theme: {}", describe_theme(app.preferences.theme()))?;
        }
        Commands::Font { value } => {
            let font = resolve_font(&value)?;
            app.preferences.set_font(font);
            writeln!(out, "font:  {}", app.preferences.font())?;
        }
        Commands::Scroll { y, sections } => {
            let layout = if sections.is_empty() {
                uniform_layout(DEFAULT_SECTION_HEIGHT)
            } else {
                sections
            };
            app.nav.set_layout(layout);
            app.nav.on_scroll(y);

            let chrome = chrome_style(app.nav.scrolled());
            writeln!(out, "active:   {}", app.nav.active())?;
            writeln!(out, "scrolled: {}", app.nav.scrolled())?;
            writeln!(
                out,
                "chrome:   alpha {} blur {}px",
                chrome.background_alpha, chrome.blur_px
            )?;
        }
    }
    Ok(())
}
