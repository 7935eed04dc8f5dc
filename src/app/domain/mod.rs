//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Colour themes and fonts, with their presets
//! - Page sections and navigation links
//! - Contact form fields
//! - Message types for the event system

pub mod contact;
pub mod font;
pub mod messages;
pub mod sections;
pub mod theme;

pub use contact::ContactField;
pub use font::{FONT_PRESETS, FontChoice};
pub use messages::Message;
pub use sections::{NAV_ITEMS, NavItem, PAGE_SECTIONS, Section, SectionId};
pub use theme::{COLOR_PRESETS, ColorPreset, ColorTheme};
