use crate::seeder::SetupError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Placeholder the original scripts shipped with; seeding refuses to run
/// until it has been replaced with a real tenant id.
const APP_ID_PLACEHOLDER: &str = "YOUR_APP_ID_HERE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tenant identifier substituted into the collection path template.
    pub app_id: String,

    /// Path to the Firebase service account key JSON file.
    pub service_account_key: String,

    pub log_level: String,

    #[serde(default)]
    pub firestore: FirestoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FirestoreConfig {
    /// Override to point at a local emulator.
    pub base_url: String,

    pub database_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_id: "default-app-id".to_string(),
            service_account_key: "serviceAccountKey.json".to_string(),
            log_level: "info".to_string(),
            firestore: FirestoreConfig::default(),
        }
    }
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            base_url: "https://firestore.googleapis.com".to_string(),
            database_id: "(default)".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                return Self::load_from_path(path);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("jobseed").join("config.toml"));
        }

        paths
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = PathBuf::from("config.toml");
        if path.exists() {
            Ok(false)
        } else {
            Self::default().save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    /// Startup precondition check; a failure here means nothing gets written.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.app_id.is_empty() {
            return Err(SetupError::Config("app_id must not be empty".to_string()));
        }

        if self.app_id == APP_ID_PLACEHOLDER {
            return Err(SetupError::Config(format!(
                "app_id is still the '{APP_ID_PLACEHOLDER}' placeholder; set your tenant id in config.toml"
            )));
        }

        Ok(())
    }

    /// The jobs collection for this tenant.
    #[must_use]
    pub fn collection_path(&self) -> String {
        format!("artifacts/{}/public/data/jobs", self.app_id)
    }
}
