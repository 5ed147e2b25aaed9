//! Game settings
//!
//! Loaded from a JSON file at startup. Every field has a default, so a
//! settings file only needs the values it wants to change.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::tuning::Tuning;

/// Settings file looked up in the working directory when none is given
pub const DEFAULT_SETTINGS_FILE: &str = "pong_settings.json";

/// Window creation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Present with vsync (Fifo) instead of Immediate/Mailbox
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Pong".to_string(),
            width: SCREEN_WIDTH as u32,
            height: SCREEN_HEIGHT as u32,
            vsync: true,
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    /// Ball mesh resolution
    pub disc_triangles: u32,
    /// Directory holding `pong.vert.wgsl` / `pong.frag.wgsl`; built-in
    /// shaders are used when unset
    pub shader_dir: Option<PathBuf>,
    /// Serve RNG seed; wall-clock time when unset
    pub seed: Option<u64>,
    /// Largest dt fed to a single tick (seconds)
    pub max_frame_dt: f32,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            disc_triangles: DISC_TRIANGLES,
            shader_dir: None,
            seed: None,
            max_frame_dt: MAX_FRAME_DT,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str, origin: &Path) -> Result<Self, SettingsError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|source| SettingsError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that would only fail later (after the window opens)
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.max_frame_dt > 0.0 && self.max_frame_dt <= MAX_FRAME_DT_LIMIT) {
            return Err(SettingsError::MaxFrameDt {
                got: self.max_frame_dt,
                max: MAX_FRAME_DT_LIMIT,
            });
        }
        if self.disc_triangles < 3 {
            return Err(SettingsError::DiscTriangles(self.disc_triangles));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(SettingsError::WindowSize {
                width: self.window.width,
                height: self.window.height,
            });
        }
        self.tuning.validate()?;
        Ok(())
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json, path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load an explicitly requested file, or the default file if it exists
    ///
    /// An explicit path must exist; a missing default file means defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let default_path = Path::new(DEFAULT_SETTINGS_FILE);
        if default_path.exists() {
            Self::load(default_path)
        } else {
            log::info!("Using default settings");
            Ok(Self::default())
        }
    }

    /// Serialize to pretty JSON (for writing a starter settings file)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TuningError;
    use crate::sim::Key;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "window": { "width": 1024 }, "tuning": { "paddle_speed": 450.0 } }"#;
        let settings = Settings::from_json(json, Path::new("test.json")).unwrap();

        assert_eq!(settings.window.width, 1024);
        assert_eq!(settings.window.height, SCREEN_HEIGHT as u32);
        assert_eq!(settings.tuning.paddle_speed, 450.0);
        assert_eq!(settings.tuning.ball_radius, BALL_RADIUS);
        assert_eq!(settings.disc_triangles, DISC_TRIANGLES);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Settings::from_json("{ not json", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let json = r#"{ "tuning": { "ball_min_velocity": 500.0 } }"#;
        let err = Settings::from_json(json, Path::new("t.json")).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Tuning(TuningError::VelocityBounds { .. })
        ));
    }

    #[test]
    fn test_defaults_are_valid() {
        Settings::default().validate().unwrap();
    }

    #[test]
    fn test_huge_max_frame_dt_rejected() {
        let err = Settings::from_json(r#"{ "max_frame_dt": 1e30 }"#, Path::new("dt.json"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::MaxFrameDt { .. }));

        let err = Settings::from_json(r#"{ "max_frame_dt": 0.0 }"#, Path::new("dt.json"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::MaxFrameDt { .. }));
    }

    #[test]
    fn test_coarse_disc_rejected() {
        let err = Settings::from_json(r#"{ "disc_triangles": 2 }"#, Path::new("d.json"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::DiscTriangles(2)));
    }

    #[test]
    fn test_zero_window_size_rejected() {
        let err = Settings::from_json(r#"{ "window": { "height": 0 } }"#, Path::new("w.json"))
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::WindowSize {
                width: 800,
                height: 0
            }
        ));
    }

    #[test]
    fn test_custom_controls_parse() {
        let json = r#"{ "tuning": { "controls": [
            { "up": "W", "down": "S" },
            { "up": "Right", "down": "Left" }
        ] } }"#;
        let settings = Settings::from_json(json, Path::new("c.json")).unwrap();
        assert_eq!(settings.tuning.controls[1].up, Key::Right);
        assert_eq!(settings.tuning.controls[1].down, Key::Left);
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let err = Settings::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(7),
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        let parsed = Settings::from_json(&json, Path::new("rt.json")).unwrap();
        assert_eq!(parsed, settings);
    }
}
