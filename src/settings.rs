//! Read-only startup configuration.
//!
//! Looked up at `$RECT_ANNOTATE_CONFIG`, falling back to
//! `<config dir>/rect-annotate/settings.json`. Every field is optional.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::color::Rgb;
use crate::error::AppError;

const CONFIG_ENV: &str = "RECT_ANNOTATE_CONFIG";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_size: [f32; 2],
    /// canvas size used until an image is loaded
    pub canvas_size: [f32; 2],
    pub default_color: Rgb,
    /// max seconds between presses of a double/triple click
    pub multi_click_interval: f64,
    /// max pointer travel between presses of a double/triple click
    pub multi_click_radius: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_size: [1200.0, 800.0],
            canvas_size: [800.0, 600.0],
            default_color: Rgb::RED,
            multi_click_interval: 0.5,
            multi_click_radius: 6.0,
        }
    }
}

impl Settings {
    pub fn path() -> Option<PathBuf> {
        match std::env::var_os(CONFIG_ENV) {
            Some(p) => Some(PathBuf::from(p)),
            None => dirs::config_dir().map(|d| d.join("rect-annotate").join("settings.json")),
        }
    }

    /// Defaults on any problem; a broken file is logged, never fatal.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            log::debug!("no config directory, using default settings");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(Some(settings)) => {
                log::info!("settings loaded from {}", path.display());
                settings
            }
            Ok(None) => Self::default(),
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, AppError> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(AppError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&data)
            .map(Some)
            .map_err(|source| AppError::Settings {
                path: path.to_path_buf(),
                source,
            })
    }
}
