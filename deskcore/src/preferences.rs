//! Window preferences
//!
//! An optional JSON file under the platform config directory, holding
//! window and font sizes. It is only ever read; the calculator never
//! writes to disk.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    /// Point size of the display numerals
    #[serde(default = "default_font_size_display")]
    pub font_size_display: f32,
    /// Point size of the button labels
    #[serde(default = "default_font_size_button")]
    pub font_size_button: f32,
}

fn default_window_width() -> f32 {
    320.0
}

fn default_window_height() -> f32 {
    420.0
}

fn default_font_size_display() -> f32 {
    26.0
}

fn default_font_size_button() -> f32 {
    20.0
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            font_size_display: default_font_size_display(),
            font_size_button: default_font_size_button(),
        }
    }
}

impl Preferences {
    /// Default location: `<config dir>/preferences.json`.
    pub fn default_path(app_name: &str) -> PathBuf {
        config_dir(app_name).join("preferences.json")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load preferences, falling back to defaults. A missing file is
    /// normal on first run; anything else is logged.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no preferences at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(prefs) => prefs,
            Err(e) => {
                log::warn!("failed to load preferences from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Config directory for an app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("org", "deskcalc", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("deskcore-prefs-{}-{}", std::process::id(), name))
            .join("preferences.json")
    }

    #[test]
    fn test_load_written_file() {
        let path = scratch_path("roundtrip");
        let prefs = Preferences {
            window_width: 400.0,
            ..Preferences::default()
        };
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, serde_json::to_string_pretty(&prefs).unwrap()).unwrap();
        let loaded = Preferences::load(&path).unwrap();
        assert_eq!(loaded, prefs);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = scratch_path("missing");
        assert!(matches!(Preferences::load(&path), Err(StorageError::Io(_))));
        assert_eq!(Preferences::load_or_default(&path), Preferences::default());
        // loading never creates the file or its directory
        assert!(!path.exists());
        assert!(!path.parent().unwrap().exists());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let path = scratch_path("malformed");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Preferences::load(&path), Err(StorageError::Json(_))));
        assert_eq!(Preferences::load_or_default(&path), Preferences::default());
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{ "font_size_display": 32.0 }"#).unwrap();
        assert_eq!(prefs.font_size_display, 32.0);
        assert_eq!(prefs.window_width, 320.0);
        assert_eq!(prefs.window_height, 420.0);
        assert_eq!(prefs.font_size_button, 20.0);
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        let path = Preferences::default_path("deskcalc");
        assert!(path.ends_with("preferences.json"));
    }
}
