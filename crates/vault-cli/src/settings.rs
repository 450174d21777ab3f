//! Persisted user preferences.
//!
//! Settings are read from a TOML file in the platform config directory.
//! A missing or unreadable file yields the defaults; command-line flags
//! override whatever the file says.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vault_model::ProcessingType;
use vault_persistence::DEFAULT_NAMESPACE;

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where entries are stored.
    pub storage: StorageSettings,

    /// Defaults for processing new text.
    pub editor: EditorSettings,

    /// Listing and preview display options.
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Data directory; the platform data dir when unset.
    pub directory: Option<PathBuf>,

    /// Storage key holding the entry collection.
    pub namespace: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            directory: None,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Selector used when `--type` is not given.
    pub default_type: ProcessingType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Characters of the original text shown as an entry title.
    pub title_length: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { title_length: 30 }
    }
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Self::default();
        };
        let mut settings: Self = match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!(%error, "Ignoring malformed settings file {}", path.display());
                return Self::default();
            }
        };
        settings.normalize();
        settings
    }

    /// Replace values this build cannot use with defaults.
    fn normalize(&mut self) {
        if !self.editor.default_type.is_known() {
            tracing::warn!(
                value = %self.editor.default_type,
                "Unknown default processing type in settings, using 'none'"
            );
            self.editor.default_type = ProcessingType::None;
        }
        if self.storage.namespace.trim().is_empty() {
            self.storage.namespace = DEFAULT_NAMESPACE.to_string();
        }
        if self.display.title_length == 0 {
            self.display.title_length = DisplaySettings::default().title_length;
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {e}"))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;

        std::fs::write(path, content).map_err(|e| format!("Failed to write settings: {e}"))
    }

    /// Get the settings file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "TextVault", "text-vault")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Directory holding the entry store.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.storage.directory {
            return dir.clone();
        }
        directories::ProjectDirs::from("com", "TextVault", "text-vault")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("text-vault-data"))
    }
}
