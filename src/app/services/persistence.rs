use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::storage::KeyValueStore;

pub const THEME_KEY: &str = "currentTheme";
pub const FONT_KEY: &str = "currentFont";

/// Read and decode one slot. Absent, unreadable and malformed values all
/// come back as `None`; the latter two are logged.
pub fn load_preference<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::error!("Could not read saved '{}': {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Could not parse saved '{}': {}", key, e);
            None
        }
    }
}

/// Encode and write one slot.
pub fn save_preference<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}
