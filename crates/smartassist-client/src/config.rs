//! # Client Configuration
//!
//! Configuration management for the application layer.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SMARTASSIST_PROGRESS_FILE=/tmp/progress.json                       │
//! │     SMARTASSIST_UPCOMING_LIMIT=5                                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/smartassist-gst/client.toml (Linux)                      │
//! │     ~/Library/Application Support/in.smartassist.gst/client.toml       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     seeded content, progress file in the data dir, 3 upcoming dates    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # client.toml
//! [backend]
//! seed_content = true
//! fiscal_year = 2025     # April 2025 - March 2026 due dates
//!
//! [storage]
//! progress_file = "/home/asha/.local/share/smartassist-gst/learning-progress.json"
//!
//! [reminders]
//! upcoming_limit = 3
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{ClientError, ClientResult};

/// First fiscal year GST was in force (July 2017).
pub const FIRST_GST_FISCAL_YEAR: i32 = 2017;

const PROGRESS_FILE_NAME: &str = "learning-progress.json";

// =============================================================================
// Backend Settings
// =============================================================================

/// Settings for the backend actor connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Load statutory due dates, tax tips and learning content on startup.
    #[serde(default = "default_true")]
    pub seed_content: bool,

    /// Fiscal year (starting April) whose statutory due dates are seeded.
    /// `None` means the fiscal year containing today.
    #[serde(default)]
    pub fiscal_year: Option<i32>,
}

fn default_true() -> bool {
    true
}

impl Default for BackendSettings {
    fn default() -> Self {
        BackendSettings {
            seed_content: true,
            fiscal_year: None,
        }
    }
}

// =============================================================================
// Storage Settings
// =============================================================================

/// Where on-device data lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Learning progress file. Defaults to the platform data directory.
    #[serde(default)]
    pub progress_file: Option<PathBuf>,
}

// =============================================================================
// Reminder Settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderSettings {
    /// How many upcoming due dates the dashboard shows.
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
}

fn default_upcoming_limit() -> usize {
    3
}

impl Default for ReminderSettings {
    fn default() -> Self {
        ReminderSettings {
            upcoming_limit: default_upcoming_limit(),
        }
    }
}

// =============================================================================
// Main Client Configuration
// =============================================================================

/// Complete client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub reminders: ReminderSettings,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (client.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading client config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| ClientError::Config(e.to_string()))?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load client config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ClientResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ClientError::Config("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ClientError::Config(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ClientError::Config(e.to_string()))?;

        info!(?path, "Client config saved");
        Ok(())
    }

    pub fn validate(&self) -> ClientResult<()> {
        if self.reminders.upcoming_limit == 0 {
            return Err(ClientError::Config(
                "upcoming_limit must be greater than 0".into(),
            ));
        }

        if let Some(year) = self.backend.fiscal_year {
            if !(FIRST_GST_FISCAL_YEAR..=2100).contains(&year) {
                return Err(ClientError::Config(format!(
                    "fiscal_year must be between {} and 2100, got: {}",
                    FIRST_GST_FISCAL_YEAR, year
                )));
            }
        }

        if let Some(ref path) = self.storage.progress_file {
            if path.as_os_str().is_empty() {
                return Err(ClientError::Config("progress_file must not be empty".into()));
            }
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("SMARTASSIST_PROGRESS_FILE") {
            debug!(path = %path, "Overriding progress file from environment");
            self.storage.progress_file = Some(PathBuf::from(path));
        }

        if let Ok(seed) = std::env::var("SMARTASSIST_SEED_CONTENT") {
            match seed.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.backend.seed_content = true,
                "0" | "false" | "no" => self.backend.seed_content = false,
                _ => warn!(value = %seed, "Unknown SMARTASSIST_SEED_CONTENT value"),
            }
        }

        if let Ok(year) = std::env::var("SMARTASSIST_FISCAL_YEAR") {
            if let Ok(y) = year.parse::<i32>() {
                debug!(fiscal_year = y, "Overriding fiscal year from environment");
                self.backend.fiscal_year = Some(y);
            }
        }

        if let Ok(limit) = std::env::var("SMARTASSIST_UPCOMING_LIMIT") {
            if let Ok(n) = limit.parse::<usize>() {
                self.reminders.upcoming_limit = n;
            }
        }
    }

    fn project_dirs() -> Option<directories::ProjectDirs> {
        directories::ProjectDirs::from("in", "smartassist", "gst")
    }

    fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("client.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// The learning progress file: configured path, else the platform data dir.
    pub fn progress_file(&self) -> Option<PathBuf> {
        self.storage.progress_file.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_dir().join(PROGRESS_FILE_NAME))
        })
    }

    pub fn upcoming_limit(&self) -> usize {
        self.reminders.upcoming_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.backend.seed_content);
        assert_eq!(config.backend.fiscal_year, None);
        assert_eq!(config.upcoming_limit(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ClientConfig::default();

        config.reminders.upcoming_limit = 0;
        assert!(config.validate().is_err());

        config.reminders.upcoming_limit = 3;
        config.backend.fiscal_year = Some(2016);
        assert!(config.validate().is_err());

        config.backend.fiscal_year = Some(2025);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"
            [reminders]
            upcoming_limit = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.upcoming_limit(), 5);
        assert!(config.backend.seed_content);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("client.toml");

        let mut config = ClientConfig::default();
        config.backend.fiscal_year = Some(2024);
        config.storage.progress_file = Some(dir.path().join("progress.json"));
        config.save(Some(path.clone())).unwrap();

        let loaded = ClientConfig::load(Some(path)).unwrap();
        assert_eq!(loaded.backend.fiscal_year, Some(2024));
        assert_eq!(
            loaded.progress_file(),
            Some(dir.path().join("progress.json"))
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.toml");
        std::fs::write(&path, "[reminders\nupcoming_limit = ").unwrap();

        assert!(matches!(
            ClientConfig::load(Some(path.clone())),
            Err(ClientError::Config(_))
        ));
        assert_eq!(ClientConfig::load_or_default(Some(path)).upcoming_limit(), 3);
    }
}
