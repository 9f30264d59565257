// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Initial filter, reveal timing, swipe sensitivity, assets root
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Migration
//!
//! A top-level `theme = "dark"` from the flat format is read as
//! `[general] theme_mode`, also next to a `[gallery]` section. Once a
//! `[general]` section exists it takes precedence. The next save writes the
//! sectioned format.
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config::{self, Config};
//! use iced_folio::ui::theming::ThemeMode;
//!
//! let (mut config, _warning) = config::load();
//! config.general.theme_mode = ThemeMode::Dark;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::gallery::swipe::SwipeThreshold;
use crate::gallery::Filter;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when an existing config file cannot be read.
pub const CONFIG_LOAD_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ru").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Filter key selected on startup (`all` or a category key).
    #[serde(
        default = "default_filter_key",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_filter: Option<String>,

    /// Delay between consecutive tile reveals, in milliseconds.
    #[serde(
        default = "default_reveal_stagger_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub reveal_stagger_ms: Option<u64>,

    /// Horizontal travel needed for a lightbox swipe, in logical pixels.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold: Option<f32>,

    /// Directory the catalog's image locators are resolved against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            default_filter: default_filter_key(),
            reveal_stagger_ms: default_reveal_stagger_ms(),
            swipe_threshold: default_swipe_threshold(),
            assets_dir: None,
        }
    }
}

impl GalleryConfig {
    /// Startup filter. Unknown keys are kept and show an empty grid.
    #[must_use]
    pub fn filter(&self) -> Filter {
        Filter::parse(self.default_filter.as_deref().unwrap_or(DEFAULT_FILTER_KEY))
    }

    /// Reveal stagger, clamped to the supported range.
    #[must_use]
    pub fn reveal_stagger(&self) -> Duration {
        let ms = self
            .reveal_stagger_ms
            .unwrap_or(DEFAULT_REVEAL_STAGGER_MS)
            .min(MAX_REVEAL_STAGGER_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        self.swipe_threshold
            .map(SwipeThreshold::new)
            .unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery behavior settings.
    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Legacy Config (theme-only flat format)
// =============================================================================

#[derive(Debug, Deserialize)]
struct LegacyConfig {
    #[serde(default, deserialize_with = "deserialize_optional_theme_mode")]
    theme: Option<ThemeMode>,
}

impl From<LegacyConfig> for Config {
    fn from(legacy: LegacyConfig) -> Self {
        Config {
            general: GeneralConfig {
                language: None,
                theme_mode: legacy.theme.unwrap_or_else(default_theme_mode),
            },
            gallery: GalleryConfig::default(),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_filter_key() -> Option<String> {
    Some(DEFAULT_FILTER_KEY.to_string())
}

fn default_reveal_stagger_ms() -> Option<u64> {
    Some(DEFAULT_REVEAL_STAGGER_MS)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn parse_theme_mode(raw: &str) -> Option<ThemeMode> {
    match raw.to_lowercase().as_str() {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        "system" => Some(ThemeMode::System),
        _ => None,
    }
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    parse_theme_mode(&raw).ok_or_else(|| D::Error::custom(format!("invalid theme_mode: {}", raw)))
}

fn deserialize_optional_theme_mode<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<ThemeMode>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    parse_theme_mode(&raw)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("invalid theme: {}", raw)))
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// Automatically migrates the legacy theme-only format.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;

    if let Ok(mut config) = toml::from_str::<Config>(&content) {
        if content.contains("[general]") {
            return Ok(config);
        }
        if content.contains("[gallery]") {
            // A top-level `theme` left from the old format still applies
            // until a `[general]` section replaces it.
            if let Ok(LegacyConfig { theme: Some(theme) }) = toml::from_str(&content) {
                config.general.theme_mode = theme;
            }
            return Ok(config);
        }
    }

    if let Ok(legacy) = toml::from_str::<LegacyConfig>(&content) {
        if legacy.theme.is_some() {
            return Ok(Config::from(legacy));
        }
    }

    // Neither format matched; parse again to surface the real error.
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
    if let Some(path) = get_config_path_with_override(base_dir) {
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
