//! Shared configuration for Livery
//!
//! This crate is the single source of truth for window dimensions, the car
//! model asset, the paint palette, camera projection and the studio set,
//! shared by the native and WASM builds.

use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Window size before the user resizes it
pub const DEFAULT_WINDOW: (u32, u32) = (1920, 1080);

/// Default car asset, relative to the Bevy asset root
pub const DEFAULT_MODEL_PATH: &str = "models/xiaomi_su7/scene.gltf";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Initial window size and DPI override
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct DisplayConfig {
    /// Logical pixels
    pub width: u32,
    pub height: u32,
    /// Forced window scale factor
    pub scale: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let (width, height) = DEFAULT_WINDOW;
        Self {
            width,
            height,
            scale: 1.0,
        }
    }
}

impl DisplayConfig {
    /// Width over height, for the camera projection
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Which asset to load and where to place it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct ModelConfig {
    pub path: String,
    /// World-space translation of the model root
    pub translation: [f32; 3],
    /// Rotation about +Y in radians
    pub yaw: f32,
    pub scale: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_MODEL_PATH.to_string(),
            // Sits the tyres on the floor
            translation: [0.0, -0.35, 0.0],
            yaw: -FRAC_PI_2,
            scale: 1.0,
        }
    }
}

/// A named paint color offered to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub name: String,
    /// Packed `0xRRGGBB`
    pub hex: u32,
}

impl Swatch {
    pub fn new(name: impl Into<String>, hex: u32) -> Self {
        Self {
            name: name.into(),
            hex,
        }
    }
}

/// Paint colors and the one applied when the model first appears
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct PaletteConfig {
    pub swatches: Vec<Swatch>,
    pub initial_swatch: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            swatches: vec![
                Swatch::new("Aqua Blue", 0x2f7fa6),
                Swatch::new("Mineral Grey", 0x5d6166),
                Swatch::new("Pearl White", 0xf2f2ef),
                Swatch::new("Obsidian Black", 0x121314),
                Swatch::new("Olivine Green", 0x5e6b45),
                Swatch::new("Lava Orange", 0xd3541f),
                Swatch::new("Verona Red", 0x8e1b22),
            ],
            initial_swatch: 2,
        }
    }
}

impl PaletteConfig {
    pub fn get(&self, index: usize) -> Option<&Swatch> {
        self.swatches.get(index)
    }

    /// Packed color for the first paint, white when the index is out of range
    pub fn initial_hex(&self) -> u32 {
        self.get(self.initial_swatch)
            .map(|swatch| swatch.hex)
            .unwrap_or(0xffffff)
    }
}

/// Perspective projection and clear color
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Far plane used by the fit-to-model framing
    pub fit_far: f32,
    pub background: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 10_000.0,
            fit_far: 2_000.0,
            background: 0x111111,
        }
    }
}

impl CameraConfig {
    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }
}

/// Overhead light panel and reflective floor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct StudioConfig {
    pub panel_width: f32,
    pub panel_depth: f32,
    pub panel_height: f32,
    pub panel_intensity: f32,
    pub panel_opacity: f32,
    /// Floor box extents; its top face sits at y = 0
    pub floor_size: [f32; 3],
    pub floor_color: u32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            panel_width: 40.0,
            panel_depth: 15.0,
            panel_height: 30.0,
            panel_intensity: 3.0,
            panel_opacity: 0.3,
            floor_size: [50.0, 1.0, 50.0],
            floor_color: 0x808080,
        }
    }
}

/// Complete viewer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct ViewerConfig {
    pub display: DisplayConfig,
    pub model: ModelConfig,
    pub palette: PaletteConfig,
    pub camera: CameraConfig,
    pub studio: StudioConfig,
}

impl ViewerConfig {
    /// Parse a JSON config; missing sections and fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_aspect_ratio() {
        let display = DisplayConfig::default();
        assert_eq!((display.width, display.height), DEFAULT_WINDOW);
        assert!((display.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);

        let degenerate = DisplayConfig {
            height: 0,
            ..DisplayConfig::default()
        };
        assert!(degenerate.aspect_ratio().is_finite());
    }

    #[test]
    fn test_initial_swatch() {
        let palette = PaletteConfig::default();
        assert_eq!(palette.initial_hex(), 0xf2f2ef);

        let palette = PaletteConfig {
            swatches: vec![Swatch::new("Only", 0x123456)],
            initial_swatch: 2,
        };
        assert_eq!(palette.initial_hex(), 0xffffff);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ViewerConfig::from_json(
            r#"{
                "model": { "path": "models/test/car.glb" },
                "camera": { "fov_degrees": 60.0 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.model.path, "models/test/car.glb");
        assert_eq!(config.model.translation, [0.0, -0.35, 0.0]);
        assert_eq!(config.camera.fov_degrees, 60.0);
        assert_eq!(config.camera.background, 0x111111);
        assert_eq!(config.palette.swatches.len(), 7);
    }

    #[test]
    fn test_malformed_json() {
        let err = ViewerConfig::from_json("{ \"display\": 3 }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ViewerConfig::from_json_file("/nonexistent/livery.json").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, "/nonexistent/livery.json"),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
