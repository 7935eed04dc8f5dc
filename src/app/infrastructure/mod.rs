//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Key-value persistence (memory and file backed)
//! - Scroll event registration
//! - Error types

pub mod error;
pub mod events;
pub mod storage;
