//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that own page state and coordinate
//! between domain models and services:
//! - Theme and font preferences
//! - Scroll spy
//! - Navigation bar

pub mod navigation;
pub mod preferences;
pub mod sections;
