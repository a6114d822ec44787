// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of notification preferences in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[defaults]` - Options every new notification inherits
//! - `[layout]` - Placement of the notification stack
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Make notifications sticky by default
//! config.defaults.timeout_ms = Some(0);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::notifications::{Action, OptionsPatch};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Options applied to every notification that does not override them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Auto-dismiss timeout in milliseconds (0 = no auto-dismiss).
    #[serde(default = "default_timeout_ms", skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    #[serde(
        default = "default_dismissable",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismissable: Option<bool>,

    /// URL opened when a notification without its own action is clicked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            title: None,
            text: None,
            timeout_ms: default_timeout_ms(),
            dismissable: default_dismissable(),
            action_url: None,
        }
    }
}

impl DefaultsConfig {
    /// Converts this section into a patch for `Manager::set_default_options`.
    #[must_use]
    pub fn to_patch(&self) -> OptionsPatch {
        OptionsPatch {
            title: self.title.clone(),
            text: self.text.clone(),
            timeout: self.timeout_ms.map(|ms| match ms {
                0 => None,
                ms => Some(Duration::from_millis(ms)),
            }),
            action: self.action_url.clone().map(Action::Navigate),
            dismissable: self.dismissable,
        }
    }
}

/// Placement of the notification stack.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Viewport width at or below which the stack grows from the top.
    #[serde(
        default = "default_mobile_breakpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub mobile_breakpoint_px: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: default_mobile_breakpoint(),
        }
    }
}

impl LayoutConfig {
    /// Returns the breakpoint, clamped to the accepted range.
    #[must_use]
    pub fn mobile_breakpoint(&self) -> f32 {
        self.mobile_breakpoint_px
            .unwrap_or(DEFAULT_MOBILE_BREAKPOINT_PX)
            .clamp(MIN_MOBILE_BREAKPOINT_PX, MAX_MOBILE_BREAKPOINT_PX)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_timeout_ms() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_MS)
}

fn default_dismissable() -> Option<bool> {
    Some(DEFAULT_DISMISSABLE)
}

fn default_mobile_breakpoint() -> Option<f32> {
    Some(DEFAULT_MOBILE_BREAKPOINT_PX)
}

// =============================================================================
// Load Functions
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            defaults: DefaultsConfig {
                title: Some("Heads up".to_string()),
                text: None,
                timeout_ms: Some(5000),
                dismissable: Some(false),
                action_url: Some("https://example.org/inbox".to_string()),
            },
            layout: LayoutConfig {
                mobile_breakpoint_px: Some(600.0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_falls_back_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[defaults\n")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[layout]\n").expect("valid toml");
        assert_eq!(config.defaults.timeout_ms, Some(DEFAULT_TIMEOUT_MS));
        assert_eq!(config.defaults.dismissable, Some(DEFAULT_DISMISSABLE));
        assert_eq!(
            config.layout.mobile_breakpoint(),
            DEFAULT_MOBILE_BREAKPOINT_PX
        );
    }

    #[test]
    fn zero_timeout_means_no_auto_dismiss() {
        let defaults = DefaultsConfig {
            timeout_ms: Some(0),
            ..DefaultsConfig::default()
        };
        assert_eq!(defaults.to_patch().timeout, Some(None));
    }

    #[test]
    fn to_patch_maps_every_field() {
        let defaults = DefaultsConfig {
            title: Some("t".into()),
            text: Some("x".into()),
            timeout_ms: Some(1500),
            dismissable: Some(false),
            action_url: Some("https://example.org".into()),
        };
        let patch = defaults.to_patch();

        assert_eq!(patch.title.as_deref(), Some("t"));
        assert_eq!(patch.text.as_deref(), Some("x"));
        assert_eq!(patch.timeout, Some(Some(Duration::from_millis(1500))));
        assert_eq!(patch.dismissable, Some(false));
        assert!(matches!(patch.action, Some(Action::Navigate(url)) if url == "https://example.org"));
    }

    #[test]
    fn breakpoint_is_clamped() {
        let layout = LayoutConfig {
            mobile_breakpoint_px: Some(-10.0),
        };
        assert_eq!(layout.mobile_breakpoint(), MIN_MOBILE_BREAKPOINT_PX);
    }
}
