//! State core for a single-page portfolio site.
//!
//! The two stateful pieces are [`PreferenceStore`], which owns the visitor's
//! colour theme and font and persists them to a [`KeyValueStore`], and
//! [`SectionTracker`], which turns scroll positions into the section the
//! navigation bar highlights. [`AppState`] wires both together with the
//! contact form and the navigation bar behind a message dispatch loop.

pub mod app;
pub mod cli;
pub mod ui;

pub use app::{
    AppError, AppState, Capabilities, ColorTheme, FileStore, FontChoice, KeyValueStore,
    MemoryStore, Message, NavBar, PreferenceStore, Result, Section, SectionId, SectionTracker,
    SiteConfig, track_scroll,
};
