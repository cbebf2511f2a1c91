//! Conversions to and from Bevy's `StandardMaterial`
//!
//! Texture handles are `Handle<Image>`, so carrying a map bumps a reference
//! count and nothing else. ORIGINAL materials bypass the conversion: the
//! captured `StandardMaterial` is installed again as-is, so every authored
//! property survives, including ones the pipeline never reads.

use bevy::asset::Handle;
use bevy::color::{Color, LinearRgba};
use bevy::image::Image;
use bevy::pbr::StandardMaterial;
use bevy::prelude::AlphaMode;

use crate::color::Rgb;
use crate::maps::TextureMaps;
use crate::model::PaintTarget;
use crate::pipeline::{Paint, recipe_for};
use crate::recipe::SynthesizedMaterial;
use crate::role::MaterialRole;
use crate::source::SourceMaterial;

/// A glTF material captured for repainting
#[derive(Debug, Clone)]
pub struct AuthoredMaterial {
    /// What the pipeline classifies and synthesizes from
    pub source: SourceMaterial<Handle<Image>>,
    /// Exact material the loader produced
    pub standard: StandardMaterial,
}

impl AuthoredMaterial {
    pub fn capture(name: Option<String>, standard: &StandardMaterial) -> Self {
        Self {
            source: SourceMaterial::from_standard(name, standard),
            standard: standard.clone(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.source.name.as_deref()
    }
}

impl PaintTarget for AuthoredMaterial {
    type Output = StandardMaterial;

    fn paint(&self, paint: Paint) -> (MaterialRole, StandardMaterial) {
        if recipe_for(&self.source, paint.color()) == MaterialRole::Original {
            return (MaterialRole::Original, self.standard.clone());
        }
        let synthesized = paint.apply(&self.source);
        (synthesized.recipe, synthesized.to_standard())
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        let srgba = color.to_srgba();
        Rgb::new(srgba.red, srgba.green, srgba.blue)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::srgb(rgb.r, rgb.g, rgb.b)
    }
}

impl SourceMaterial<Handle<Image>> {
    /// Read an authored material as the glTF loader produced it
    ///
    /// The loader folds emissive strength into the emissive color; values
    /// above 1.0 are split back out into `emissive_intensity`.
    pub fn from_standard(name: Option<String>, material: &StandardMaterial) -> Self {
        let base = material.base_color.to_srgba();
        let (emissive, emissive_intensity) = split_emissive(material.emissive);

        let (transparent, alpha_test) = match material.alpha_mode {
            AlphaMode::Opaque => (false, 0.0),
            AlphaMode::Mask(cutoff) => (false, cutoff),
            _ => (true, 0.0),
        };

        // glTF packs metalness and roughness into one texture
        let maps = TextureMaps {
            map: material.base_color_texture.clone(),
            normal_map: material.normal_map_texture.clone(),
            roughness_map: material.metallic_roughness_texture.clone(),
            metalness_map: material.metallic_roughness_texture.clone(),
            emissive_map: material.emissive_texture.clone(),
            ao_map: material.occlusion_texture.clone(),
            ..Default::default()
        };

        Self {
            name,
            color: Some(Rgb::new(base.red, base.green, base.blue)),
            emissive: Some(emissive),
            emissive_intensity: Some(emissive_intensity),
            transparent,
            metalness: material.metallic,
            roughness: material.perceptual_roughness,
            opacity: base.alpha,
            alpha_test,
            double_sided: material.double_sided,
            env_map_intensity: 1.0,
            maps,
        }
    }
}

impl SynthesizedMaterial<Handle<Image>> {
    /// Build the material Bevy renders
    ///
    /// `env_map_intensity` and `map_intensity` have no per-material
    /// counterpart in `StandardMaterial` and are not applied here.
    pub fn to_standard(&self) -> StandardMaterial {
        let emissive = LinearRgba::from(Color::from(self.emissive));
        let gain = self.emissive_intensity;

        let alpha_mode = if self.transparent {
            AlphaMode::Blend
        } else if self.alpha_test > 0.0 {
            AlphaMode::Mask(self.alpha_test)
        } else {
            AlphaMode::Opaque
        };

        let mut material = StandardMaterial {
            base_color: Color::srgba(self.color.r, self.color.g, self.color.b, self.opacity),
            base_color_texture: self.maps.map.clone(),
            emissive: LinearRgba::rgb(emissive.red * gain, emissive.green * gain, emissive.blue * gain),
            emissive_texture: self.maps.emissive_map.clone(),
            metallic: self.metalness,
            perceptual_roughness: self.roughness,
            metallic_roughness_texture: self
                .maps
                .metalness_map
                .clone()
                .or_else(|| self.maps.roughness_map.clone()),
            normal_map_texture: self.maps.normal_map.clone(),
            occlusion_texture: self.maps.ao_map.clone(),
            clearcoat: self.clearcoat,
            clearcoat_perceptual_roughness: self.clearcoat_roughness,
            specular_transmission: self.transmission,
            ior: self.ior,
            reflectance: self.reflectivity,
            alpha_mode,
            double_sided: self.double_sided,
            ..Default::default()
        };
        if self.double_sided {
            material.cull_mode = None;
        }
        material
    }
}

fn split_emissive(emissive: LinearRgba) -> (Rgb, f32) {
    let peak = emissive.red.max(emissive.green).max(emissive.blue);
    let intensity = if peak > 1.0 { peak } else { 1.0 };
    let normalized = LinearRgba::rgb(
        emissive.red / intensity,
        emissive.green / intensity,
        emissive.blue / intensity,
    );
    (Rgb::from(Color::from(normalized)), intensity)
}
