use crate::error::{OpsError, Result};
use crate::session::Role;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for opsdesk, stored in the app config dir as config.json.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpsConfig {
    /// Default view mode for listings ("table" or "cards")
    #[serde(default = "default_view")]
    pub default_view: String,

    /// Directory export artifacts are written to ("." = current dir)
    #[serde(default = "default_export_dir")]
    pub export_dir: String,

    /// Identity resolved at startup
    #[serde(default = "default_user_name")]
    pub user_name: String,

    #[serde(default = "default_user_role")]
    pub user_role: Role,
}

fn default_view() -> String {
    "table".to_string()
}

fn default_export_dir() -> String {
    ".".to_string()
}

fn default_user_name() -> String {
    "Admin User".to_string()
}

fn default_user_role() -> Role {
    Role::Admin
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            default_view: default_view(),
            export_dir: default_export_dir(),
            user_name: default_user_name(),
            user_role: default_user_role(),
        }
    }
}

impl OpsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(OpsError::Io)?;
        let config: OpsConfig = serde_json::from_str(&content).map_err(OpsError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(OpsError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(OpsError::Serialization)?;
        fs::write(config_path, content).map_err(OpsError::Io)?;
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![
            ("default-view", self.default_view.clone()),
            ("export-dir", self.export_dir.clone()),
            ("user-name", self.user_name.clone()),
            ("user-role", self.user_role.to_string()),
        ]
    }

    pub fn set_key(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-view" => {
                value
                    .parse::<crate::query::ViewMode>()
                    .map_err(OpsError::Validation)?;
                self.default_view = value.to_string();
            }
            "export-dir" => self.export_dir = value.to_string(),
            "user-name" => self.user_name = value.to_string(),
            "user-role" => {
                self.user_role = value.parse::<Role>().map_err(OpsError::Validation)?;
            }
            other => {
                return Err(OpsError::Validation(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OpsConfig::default();
        assert_eq!(config.default_view, "table");
        assert_eq!(config.user_role, Role::Admin);
    }

    #[test]
    fn test_set_key_validates_view_mode() {
        let mut config = OpsConfig::default();
        config.set_key("default-view", "cards").unwrap();
        assert_eq!(config.default_view, "cards");
        assert!(config.set_key("default-view", "grid").is_err());
    }

    #[test]
    fn test_set_unknown_key_rejected() {
        let mut config = OpsConfig::default();
        assert!(config.set_key("theme", "dark").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = std::env::temp_dir().join("opsdesk_test_config_save");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let mut config = OpsConfig::default();
        config.set_key("user-role", "Member").unwrap();
        config.save(&temp_dir).unwrap();

        let loaded = OpsConfig::load(&temp_dir).unwrap();
        assert_eq!(loaded.user_role, Role::Member);

        let _ = fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = std::env::temp_dir().join("opsdesk_test_config_missing");
        let _ = fs::remove_dir_all(&temp_dir);

        let config = OpsConfig::load(&temp_dir).unwrap();
        assert_eq!(config, OpsConfig::default());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = OpsConfig {
            default_view: "cards".to_string(),
            export_dir: "/tmp/exports".to_string(),
            user_name: "Priya Nair".to_string(),
            user_role: Role::TeamLead,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: OpsConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
