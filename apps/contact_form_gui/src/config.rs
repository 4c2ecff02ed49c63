use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use form_core::{DateDisplayFormat, ResetPolicy};
use serde::Deserialize;

pub const SETTINGS_FILE_NAME: &str = "contact_form.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub reset_after_submit: bool,
    pub date_format: DateDisplayFormat,
    pub window_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reset_after_submit: false,
            date_format: DateDisplayFormat::default(),
            window_title: "Contact Form".into(),
        }
    }
}

impl Settings {
    pub fn reset_policy(&self) -> ResetPolicy {
        if self.reset_after_submit {
            ResetPolicy::ResetToDefaults
        } else {
            ResetPolicy::Keep
        }
    }
}

/// Defaults, then the settings file, then `APP__*` environment overrides.
/// An explicit `path` must exist; the implicit locations are optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match path {
        Some(path) => read_settings_file(path)?,
        None => match default_settings_path() {
            Some(found) => read_settings_file(&found)?,
            None => Settings::default(),
        },
    };

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

pub fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let settings = toml::from_str::<Settings>(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
    tracing::info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

fn default_settings_path() -> Option<PathBuf> {
    let local = PathBuf::from(SETTINGS_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|base| base.join("contact_form").join(SETTINGS_FILE_NAME))
        .filter(|candidate| candidate.is_file())
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__RESET_AFTER_SUBMIT") {
        match parse_flag(&v) {
            Some(flag) => settings.reset_after_submit = flag,
            None => tracing::warn!(value = %v, "ignoring APP__RESET_AFTER_SUBMIT"),
        }
    }

    if let Some(v) = lookup("APP__DATE_FORMAT") {
        match v.parse::<DateDisplayFormat>() {
            Ok(format) => settings.date_format = format,
            Err(err) => tracing::warn!(%err, "ignoring APP__DATE_FORMAT"),
        }
    }

    if let Some(v) = lookup("APP__WINDOW_TITLE") {
        if !v.trim().is_empty() {
            settings.window_title = v;
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
