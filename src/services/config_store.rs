// Configuration Storage Service
// Handles config file read/write and version backup

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use super::detection::sensitivity::DEFAULT_SENSITIVITY;

const CONFIG_VERSION: &str = "1.0.0";
const BACKUP_KEEP: usize = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            detection: DetectionConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetectionConfig {
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f64,
    /// Shortest accepted input, in characters after trimming.
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
    #[serde(default)]
    pub normalize_punctuation: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            min_chars: 20,
            normalize_punctuation: false,
        }
    }
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_version() -> String { CONFIG_VERSION.to_string() }
fn default_sensitivity() -> f64 { DEFAULT_SENSITIVITY }
fn default_min_chars() -> usize { 20 }

pub struct ConfigStore {
    config_dir: PathBuf,
    config_file: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: PathBuf) -> Self {
        let config_file = config_dir.join("config.json");
        Self { config_dir, config_file }
    }

    /// Get default config directory
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("authorcheck"))
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Ensure config directory exists
    pub fn ensure_dir(&self) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.config_dir).map_err(|e| ConfigError::io(&self.config_dir, e))
    }

    /// Load configuration from file; a missing file yields defaults
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.config_file.exists() {
            debug!(path = %self.config_file.display(), "config.missing_using_defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_file)
            .map_err(|e| ConfigError::io(&self.config_file, e))?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to file
    pub fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        self.ensure_dir()?;

        // Create backup if file exists
        if self.config_file.exists() {
            self.create_backup()?;
        }

        let content = serde_json::to_string_pretty(config)?;

        fs::write(&self.config_file, content).map_err(|e| ConfigError::io(&self.config_file, e))
    }

    /// Create a backup of current config
    fn create_backup(&self) -> Result<(), ConfigError> {
        let backup_dir = self.config_dir.join("backups");
        fs::create_dir_all(&backup_dir).map_err(|e| ConfigError::io(&backup_dir, e))?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S%3f");
        let backup_file = backup_dir.join(format!("config_{}.json", timestamp));

        fs::copy(&self.config_file, &backup_file).map_err(|e| ConfigError::io(&backup_file, e))?;

        self.cleanup_old_backups(&backup_dir, BACKUP_KEEP)
    }

    /// Remove old backups, keeping only the most recent N
    fn cleanup_old_backups(&self, backup_dir: &Path, keep: usize) -> Result<(), ConfigError> {
        let mut entries: Vec<_> = fs::read_dir(backup_dir)
            .map_err(|e| ConfigError::io(backup_dir, e))?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
            .collect();

        if entries.len() <= keep {
            return Ok(());
        }

        // Oldest first; file names carry the timestamp
        entries.sort_by_key(|e| e.file_name());

        for entry in entries.iter().take(entries.len() - keep) {
            if let Err(e) = fs::remove_file(entry.path()) {
                warn!(path = %entry.path().display(), error = %e, "config.backup_cleanup_failed");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "authorcheck_cfg_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.detection.sensitivity, 0.75);
        assert_eq!(config.detection.min_chars, 20);
        assert!(!config.detection.normalize_punctuation);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: AppConfig =
            serde_json::from_str(r#"{"detection":{"sensitivity":0.9},"output":{"format":"json"}}"#)
                .unwrap();
        assert_eq!(parsed.version, "1.0.0");
        assert_eq!(parsed.detection.sensitivity, 0.9);
        assert_eq!(parsed.detection.min_chars, 20);
        assert_eq!(parsed.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"minChars\":20"));
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let store = ConfigStore::new(scratch_dir("missing"));
        assert_eq!(store.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_load_and_backup() {
        let dir = scratch_dir("roundtrip");
        let store = ConfigStore::new(dir.clone());

        let mut config = AppConfig::default();
        config.detection.sensitivity = 0.9;
        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap().detection.sensitivity, 0.9);

        config.detection.min_chars = 40;
        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap().detection.min_chars, 40);

        let backups = fs::read_dir(dir.join("backups")).unwrap().count();
        assert_eq!(backups, 1);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.json"), "{not json").unwrap();
        let store = ConfigStore::new(dir.clone());
        assert!(matches!(store.load(), Err(ConfigError::Parse(_))));
        let _ = fs::remove_dir_all(&dir);
    }
}
