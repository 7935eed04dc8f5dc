//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (ColorTheme, FontChoice, Section, Message)
//! - `controllers/` - State owners (PreferenceStore, SectionTracker, NavBar)
//! - `services/` - Business operations (persistence, contact form, navigation)
//! - `infrastructure/` - External integrations (storage, scroll events, error)
//! - `config.rs` - Site configuration
//! - `state.rs` - Page shell coordinator

pub mod config;
pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use config::SiteConfig;
pub use controllers::navigation::NavBar;
pub use controllers::preferences::PreferenceStore;
pub use controllers::sections::{ScrollSnapshot, SectionTracker, track_scroll};
pub use domain::{ColorTheme, FontChoice, Message, Section, SectionId};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::storage::{FileStore, KeyValueStore, MemoryStore};
pub use state::{AppState, Capabilities};
