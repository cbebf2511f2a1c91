//! As-authored materials read from a loaded model

use crate::color::Rgb;
use crate::maps::{MapSlot, TextureMaps};

/// A material as the artist authored it
///
/// Only the fields the pipeline reads or the ORIGINAL recipe copies are
/// modelled. Defaults match a plain metallic-roughness material.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceMaterial<T> {
    pub name: Option<String>,
    pub color: Option<Rgb>,
    pub emissive: Option<Rgb>,
    pub emissive_intensity: Option<f32>,
    pub transparent: bool,
    pub metalness: f32,
    pub roughness: f32,
    pub opacity: f32,
    /// Alpha cutoff; 0.0 disables alpha testing
    pub alpha_test: f32,
    pub double_sided: bool,
    pub env_map_intensity: f32,
    pub maps: TextureMaps<T>,
}

impl<T> Default for SourceMaterial<T> {
    fn default() -> Self {
        Self {
            name: None,
            color: None,
            emissive: None,
            emissive_intensity: None,
            transparent: false,
            metalness: 0.0,
            roughness: 1.0,
            opacity: 1.0,
            alpha_test: 0.0,
            double_sided: false,
            env_map_intensity: 1.0,
            maps: TextureMaps::default(),
        }
    }
}

impl<T> SourceMaterial<T> {
    /// Create a named material with default properties
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Material name, or an empty string when the asset left it unnamed
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_emissive(mut self, emissive: Rgb, intensity: f32) -> Self {
        self.emissive = Some(emissive);
        self.emissive_intensity = Some(intensity);
        self
    }

    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    pub fn with_map(mut self, slot: MapSlot, texture: T) -> Self {
        self.maps.set(slot, texture);
        self
    }
}
