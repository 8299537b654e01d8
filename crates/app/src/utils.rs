//! Settings location and loading.

use anyhow::Context;
use shared::settings::AppSettings;
use std::path::{Path, PathBuf};

pub fn config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com.local", "Quick Assist", "QuickAssist")
        .map(|proj| proj.config_dir().join("settings.json"))
}

pub fn load_settings_or_default() -> AppSettings {
    match config_path() {
        Some(path) => load_settings_at(&path),
        None => {
            tracing::warn!("No config directory available, using default theme");
            AppSettings::default()
        }
    }
}

/// Load settings from `path`. Nothing is ever written: a missing file means
/// the stock theme, an unreadable one is reported and ignored for this run.
pub fn load_settings_at(path: &Path) -> AppSettings {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No settings file, using default theme");
        return AppSettings::default();
    }

    match try_load(path) {
        Ok(settings) => {
            tracing::info!(path = %path.display(), "Loaded settings");
            settings
        }
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "Using default settings");
            AppSettings::default()
        }
    }
}

fn try_load(path: &Path) -> anyhow::Result<AppSettings> {
    AppSettings::load(path).context("settings file is ignored")
}
