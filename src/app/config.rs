use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::infrastructure::error::AppError;
use super::infrastructure::storage::FileStore;
use super::services::contact::RelayConfig;
use super::services::navigation::{
    CTA_SCROLL_DURATION_MS, CTA_SCROLL_OFFSET, NAV_SCROLL_DURATION_MS,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_owner_name")]
    pub owner_name: String,

    /// Overrides where preferences are stored.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,

    #[serde(default = "default_scroll_duration")]
    pub scroll_duration_ms: u32,

    /// Duration and offset used by the hero call-to-action buttons.
    #[serde(default = "default_cta_duration")]
    pub cta_duration_ms: u32,

    #[serde(default = "default_scroll_offset")]
    pub scroll_offset: i32,

    #[serde(default)]
    pub relay: RelayConfig,
}

fn default_owner_name() -> String {
    "M.Hussain Ahmadi".to_string()
}

fn default_scroll_duration() -> u32 {
    NAV_SCROLL_DURATION_MS
}

fn default_cta_duration() -> u32 {
    CTA_SCROLL_DURATION_MS
}

fn default_scroll_offset() -> i32 {
    CTA_SCROLL_OFFSET
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: default_owner_name(),
            storage_path: None,
            scroll_duration_ms: default_scroll_duration(),
            cta_duration_ms: default_cta_duration(),
            scroll_offset: default_scroll_offset(),
            relay: RelayConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load config from the default location, or create it if missing.
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    log::error!("Failed to parse config: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                if let Err(e) = default.save_to(path) {
                    log::debug!("Could not write default config to {}: {}", path.display(), e);
                }
                default
            }
        }
    }

    /// Strict load for a file the user named explicitly: a missing or
    /// unparsable file is an error instead of a silent fallback.
    pub fn try_load_from(path: &Path) -> Result<Self, AppError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("folio");
        path.push("config.json");
        path
    }

    pub fn storage_path(&self) -> PathBuf {
        self.storage_path
            .clone()
            .unwrap_or_else(FileStore::default_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.owner_name, "M.Hussain Ahmadi");
        assert_eq!(config.scroll_duration_ms, 500);
        assert_eq!(config.cta_duration_ms, 800);
        assert_eq!(config.scroll_offset, -70);
        assert!(config.storage_path.is_none());
        assert_eq!(config.relay.service_id, "service_s648v8q");
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"owner_name": "Jane Doe"}"#;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.owner_name, "Jane Doe");
        assert_eq!(config.scroll_duration_ms, 500);
        assert_eq!(config.relay, RelayConfig::default());
    }

    #[test]
    fn test_missing_file_is_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio").join("config.json");

        let config = SiteConfig::load_from(&path);
        assert_eq!(config, SiteConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_corrupted_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ owner_name: ").unwrap();

        assert_eq!(SiteConfig::load_from(&path), SiteConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let config = SiteConfig {
            storage_path: Some(dir.path().join("prefs.json")),
            scroll_duration_ms: 300,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = SiteConfig::load_from(&path);
        assert_eq!(loaded, config);
        assert_eq!(loaded.storage_path(), dir.path().join("prefs.json"));
    }

    #[test]
    fn test_strict_load_reports_config_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        assert!(matches!(SiteConfig::try_load_from(&path), Err(AppError::Config(_))));
        assert!(!path.exists());

        fs::write(&path, "{ owner_name: ").unwrap();
        assert!(matches!(SiteConfig::try_load_from(&path), Err(AppError::Config(_))));

        fs::write(&path, r#"{"scroll_offset": -90}"#).unwrap();
        assert_eq!(SiteConfig::try_load_from(&path).unwrap().scroll_offset, -90);
    }
}
