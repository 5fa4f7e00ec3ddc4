// src/config.rs
//
// Engine settings loaded once from a TOML profile. Variants of the engine
// (stricter acceptance, half-width passthrough) are expressed as
// configuration, not forked code paths.

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EngineSettings {
    /// Minimum similarity ratio for a pronunciation to count as acceptable.
    #[serde(default = "default_acceptance_threshold")]
    pub acceptance_threshold: f64,
    /// Minimum total character count before the doubled-output guard fires.
    #[serde(default = "default_repetition_min_len")]
    pub repetition_min_len: usize,
    /// Treat half-width katakana as already-kana for passthrough.
    #[serde(default = "default_allow_half_width_kana")]
    pub allow_half_width_kana: bool,
}

fn default_acceptance_threshold() -> f64 {
    0.4 // fair pronunciation still passes
}

fn default_repetition_min_len() -> usize {
    8
}

fn default_allow_half_width_kana() -> bool {
    false
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            acceptance_threshold: default_acceptance_threshold(),
            repetition_min_len: default_repetition_min_len(),
            allow_half_width_kana: default_allow_half_width_kana(),
        }
    }
}

/// Read-only settings, loaded once per process.
pub static SETTINGS: Lazy<EngineSettings> = Lazy::new(load_settings);

fn get_config_path() -> Option<PathBuf> {
    ProjectDirs::from("jp", "hatsuon", "Hatsuon")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn load_settings() -> EngineSettings {
    let Some(config_path) = get_config_path() else {
        log::warn!("[Config] Could not determine config directory, using defaults");
        return EngineSettings::default();
    };

    match fs::read_to_string(&config_path) {
        Ok(contents) => match toml::from_str::<EngineSettings>(&contents) {
            Ok(settings) => {
                log::info!(
                    "[Config] Loaded settings from {}: threshold={}, repetition_min_len={}",
                    config_path.display(),
                    settings.acceptance_threshold,
                    settings.repetition_min_len
                );
                settings
            }
            Err(e) => {
                log::error!(
                    "[Config] Failed to parse '{}': {}. Using defaults",
                    config_path.display(),
                    e
                );
                EngineSettings::default()
            }
        },
        Err(ref e) if e.kind() == std::io::ErrorKind::NotFound => EngineSettings::default(),
        Err(e) => {
            log::error!(
                "[Config] Failed to read '{}': {}. Using defaults",
                config_path.display(),
                e
            );
            EngineSettings::default()
        }
    }
}

impl EngineSettings {
    pub fn config_path() -> Result<PathBuf, String> {
        get_config_path().ok_or_else(|| "Could not determine config path".to_string())
    }

    pub fn save(&self) -> Result<(), String> {
        let config_path = Self::config_path()?;
        if let Some(dir) = config_path.parent() {
            fs::create_dir_all(dir).map_err(|e| format!("Failed to create config dir: {}", e))?;
        }
        let contents =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize: {}", e))?;
        fs::write(&config_path, contents).map_err(|e| format!("Failed to write config: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.acceptance_threshold, 0.4);
        assert_eq!(settings.repetition_min_len, 8);
        assert!(!settings.allow_half_width_kana);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: EngineSettings = toml::from_str("acceptance_threshold = 0.6").unwrap();
        assert_eq!(settings.acceptance_threshold, 0.6);
        assert_eq!(settings.repetition_min_len, 8);
    }
}
