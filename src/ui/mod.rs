//! Presentation-side models: styling tokens, dialog view models and
//! reveal animations. Nothing here draws; a renderer consumes these.

pub mod animation;
pub mod dialogs;
pub mod theme;
