// src/config.rs

//! Host configuration for the demo binary.
//!
//! A set of serde-deserializable structs loaded from a JSON file. Every
//! field carries a default, so a partial (or absent) configuration file
//! still yields a usable setup.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Complete configuration for a canvas host.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Surface allocation settings.
    pub surface: SurfaceConfig,
    /// Render backend settings.
    pub render: RenderConfig,
}

/// Dimensions of the surface to allocate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Surface width in pixels.
    pub width: i64,
    /// Surface height in pixels.
    pub height: i64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        SurfaceConfig {
            width: 320,
            height: 240,
        }
    }
}

/// Which backend the host drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Render to an image file.
    #[default]
    Image,
    /// Render into a host widget.
    Widget,
}

/// Render backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Backend mode.
    pub mode: Mode,
    /// Destination file for image mode. Required before the first render
    /// in that mode.
    pub output_path: Option<PathBuf>,
    /// How many update/render passes the demo host runs.
    pub frames: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            mode: Mode::Image,
            output_path: None,
            frames: 1,
        }
    }
}

impl Config {
    /// Loads a configuration from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.surface.width, 320);
        assert_eq!(config.surface.height, 240);
        assert_eq!(config.render.mode, Mode::Image);
        assert_eq!(config.render.frames, 1);
        assert!(config.render.output_path.is_none());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "surface": { "width": 64 } }"#).unwrap();
        assert_eq!(config.surface.width, 64);
        assert_eq!(config.surface.height, 240);
        assert_eq!(config.render.mode, Mode::Image);
    }

    #[test]
    fn test_mode_parses_lowercase() {
        let config: Config =
            serde_json::from_str(r#"{ "render": { "mode": "widget", "frames": 3 } }"#).unwrap();
        assert_eq!(config.render.mode, Mode::Widget);
        assert_eq!(config.render.frames, 3);
    }
}
