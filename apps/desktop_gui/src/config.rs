use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "booking.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct DeskSettings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub seed_path: Option<PathBuf>,
}

impl Default for DeskSettings {
    fn default() -> Self {
        Self {
            window_title: "Doctor Appointment Booking".into(),
            window_width: 1100.0,
            window_height: 720.0,
            seed_path: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    window_title: Option<String>,
    window_width: Option<f32>,
    window_height: Option<f32>,
    seed_path: Option<PathBuf>,
}

/// Defaults, then the TOML file, then environment variables.
///
/// An explicit `config_path` must exist. Without one, `booking.toml` in the
/// working directory is tried, then the per-user config directory; a missing
/// file there is not an error.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<DeskSettings> {
    let mut settings = DeskSettings::default();

    let file_cfg = match config_path {
        Some(path) => Some(read_settings_file(path)?),
        None => default_config_candidates()
            .into_iter()
            .find(|path| path.is_file())
            .map(|path| read_settings_file(&path))
            .transpose()?,
    };
    if let Some(file_cfg) = file_cfg {
        apply_file_settings(&mut settings, file_cfg);
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn default_config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("booking_desk").join(CONFIG_FILE_NAME));
    }
    candidates
}

fn read_settings_file(path: &Path) -> anyhow::Result<FileSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    parse_settings(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))
}

fn parse_settings(raw: &str) -> anyhow::Result<FileSettings> {
    Ok(toml::from_str::<FileSettings>(raw)?)
}

fn apply_file_settings(settings: &mut DeskSettings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.window_title {
        settings.window_title = v;
    }
    if let Some(v) = file_cfg.window_width {
        settings.window_width = v;
    }
    if let Some(v) = file_cfg.window_height {
        settings.window_height = v;
    }
    if let Some(v) = file_cfg.seed_path {
        settings.seed_path = Some(v);
    }
}

fn apply_env_overrides(settings: &mut DeskSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("BOOKING_WINDOW_TITLE").filter(|v| !v.trim().is_empty()) {
        settings.window_title = v;
    }
    if let Some(v) = lookup("BOOKING_SEED_PATH").filter(|v| !v.trim().is_empty()) {
        settings.seed_path = Some(PathBuf::from(v));
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
