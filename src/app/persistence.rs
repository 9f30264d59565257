// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! The only preference the gallery changes at runtime is the theme mode.

use super::Message;
use crate::config;
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;

/// Persists the theme mode, keeping every other setting as it is on disk.
///
/// Guarded during tests to keep the user's settings file untouched.
pub fn persist_theme(theme_mode: ThemeMode) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    save_theme(theme_mode, None);
    Task::none()
}

/// Writes `theme_mode` into the settings file under `base_dir`.
///
/// A settings file that failed to load is left alone so its other values
/// are not replaced by defaults. Returns whether the file was written.
fn save_theme(theme_mode: ThemeMode, base_dir: Option<PathBuf>) -> bool {
    let (mut cfg, warning) = config::load_with_override(base_dir.clone());
    if warning.is_some() {
        tracing::warn!(?theme_mode, "settings file is unreadable, theme not saved");
        return false;
    }
    cfg.general.theme_mode = theme_mode;

    match config::save_with_override(&cfg, base_dir) {
        Ok(()) => {
            tracing::debug!(?theme_mode, "saved theme preference");
            true
        }
        Err(error) => {
            tracing::warn!(%error, "failed to save config");
            false
        }
    }
}
