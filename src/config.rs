//! Packsmith configuration management.
//!
//! Handles the packsmith configuration file at:
//! - Linux/macOS: ~/.config/packsmith/config.toml
//! - Windows: %APPDATA%\packsmith\config.toml

use crate::error::{PackError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Packsmith configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PacksmithConfig {
    /// Workspace settings
    #[serde(default)]
    pub workspace: WorkspaceConfig,

    /// Generator defaults
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Workspace configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorkspaceConfig {
    /// Default workspace root
    #[serde(default)]
    pub root: Option<PathBuf>,
}

/// Generator defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Namespace used when none is given
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// pack_format written by scaffolding when none is given
    #[serde(default = "default_pack_format")]
    pub pack_format: u32,
}

fn default_namespace() -> String {
    "example".to_string()
}

fn default_pack_format() -> u32 {
    48
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            pack_format: default_pack_format(),
        }
    }
}

/// Default config file location, `None` when no config dir exists.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("packsmith").join("config.toml"))
}

impl PacksmithConfig {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| PackError::ConfigError {
            message: format!("Failed to parse config: {}", e),
        })
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = config_file_path().ok_or_else(|| PackError::ConfigError {
            message: "No config directory available on this platform".to_string(),
        })?;
        self.save_to(&path)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| PackError::ConfigError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        // Atomic write: temp file then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Get a configuration value by key path (e.g., "workspace.root")
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["workspace", "root"] => self
                .workspace
                .root
                .as_ref()
                .map(|p| p.display().to_string()),
            ["defaults", "namespace"] => Some(self.defaults.namespace.clone()),
            ["defaults", "pack_format"] => Some(self.defaults.pack_format.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key path
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["workspace", "root"] => {
                if value.is_empty() {
                    self.workspace.root = None;
                } else {
                    self.workspace.root = Some(PathBuf::from(value));
                }
            }
            ["defaults", "namespace"] => {
                self.defaults.namespace = value.to_string();
            }
            ["defaults", "pack_format"] => {
                self.defaults.pack_format =
                    value.parse().map_err(|_| PackError::ConfigError {
                        message: format!("pack_format must be a number, got: {}", value),
                    })?;
            }
            _ => {
                return Err(PackError::ConfigError {
                    message: format!("Unknown configuration key: {}", key),
                });
            }
        }
        Ok(())
    }

    /// Reset configuration to defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Display configuration as formatted text
    pub fn display(&self) -> String {
        let mut output = String::new();

        output.push_str("[workspace]\n");
        if let Some(root) = &self.workspace.root {
            output.push_str(&format!("root = \"{}\"\n", root.display()));
        } else {
            output.push_str("# root = (unset, uses --workspace or current dir)\n");
        }

        output.push_str("\n[defaults]\n");
        output.push_str(&format!("namespace = \"{}\"\n", self.defaults.namespace));
        output.push_str(&format!("pack_format = {}\n", self.defaults.pack_format));

        output
    }
}
