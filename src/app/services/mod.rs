//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Preference persistence
//! - Contact form submission
//! - Scroll-to-section requests

pub mod contact;
pub mod navigation;
pub mod persistence;
