//! Configuration handling for the TUI

use crate::state::DrawerState;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Delay before a drawer save completes, in milliseconds
    pub save_delay_ms: Option<u64>,
    /// Initial drawer placement (left, right, top, bottom)
    pub drawer_placement: Option<String>,
    /// Initial drawer size (sm, md, lg)
    pub drawer_size: Option<String>,
    /// Render form checkboxes with the margin modifier
    pub checkbox_margin: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formkit", "formkit-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn save_delay(&self) -> Duration {
        self.save_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DrawerState::DEFAULT_SAVE_DELAY)
    }

    pub fn checkbox_margin(&self) -> bool {
        self.checkbox_margin.unwrap_or(false)
    }

    /// Build the initial drawer state, falling back to defaults on bad values
    pub fn drawer(&self) -> DrawerState {
        let mut drawer = DrawerState::new(self.save_delay());
        if let Some(placement) = &self.drawer_placement {
            if let Err(err) = drawer.set_placement(placement) {
                tracing::warn!("ignoring config drawer_placement: {err}");
            }
        }
        if let Some(size) = &self.drawer_size {
            if let Err(err) = drawer.set_size(size) {
                tracing::warn!("ignoring config drawer_size: {err}");
            }
        }
        drawer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DrawerSize, Placement};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.save_delay_ms.is_none());
        assert!(config.drawer_placement.is_none());
        assert!(config.drawer_size.is_none());
        assert!(config.checkbox_margin.is_none());
        assert_eq!(config.save_delay(), Duration::from_millis(1000));
        assert!(!config.checkbox_margin());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            save_delay_ms: Some(250),
            drawer_placement: Some("left".to_string()),
            drawer_size: Some("lg".to_string()),
            checkbox_margin: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.save_delay_ms, Some(250));
        assert_eq!(parsed.drawer_placement, Some("left".to_string()));
        assert_eq!(parsed.drawer_size, Some("lg".to_string()));
        assert_eq!(parsed.checkbox_margin, Some(true));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.save_delay_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"drawer_size": "sm", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.drawer_size, Some("sm".to_string()));
    }

    #[test]
    fn test_drawer_from_config() {
        let config = TuiConfig {
            save_delay_ms: Some(50),
            drawer_placement: Some("bottom".to_string()),
            drawer_size: Some("sm".to_string()),
            ..Default::default()
        };
        let drawer = config.drawer();
        assert_eq!(drawer.placement, Placement::Bottom);
        assert_eq!(drawer.size, DrawerSize::Sm);
        assert_eq!(drawer.save_delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_drawer_ignores_bad_values() {
        let config = TuiConfig {
            drawer_placement: Some("center".to_string()),
            drawer_size: Some("huge".to_string()),
            ..Default::default()
        };
        let drawer = config.drawer();
        assert_eq!(drawer.placement, Placement::Right);
        assert_eq!(drawer.size, DrawerSize::Md);
    }

    #[test]
    fn test_load_returns_ok() {
        // Default config when the file does not exist
        assert!(TuiConfig::load().is_ok());
    }
}
