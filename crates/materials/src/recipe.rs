//! Material synthesis
//!
//! One recipe per [`MaterialRole`]. Each recipe builds a fresh
//! [`SynthesizedMaterial`] from a borrowed source; sources are never
//! modified and texture handles are shared, not copied.

use tracing::trace;

use crate::color::Rgb;
use crate::constants::*;
use crate::maps::{MapSlot, TextureMaps};
use crate::role::MaterialRole;
use crate::source::SourceMaterial;

/// A physically-based material produced by a recipe
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedMaterial<T> {
    /// Recipe that produced this material
    pub recipe: MaterialRole,
    /// Only the ORIGINAL recipe keeps the authored name
    pub name: Option<String>,
    pub color: Rgb,
    pub emissive: Rgb,
    pub emissive_intensity: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub reflectivity: f32,
    pub transmission: f32,
    pub ior: f32,
    pub env_map_intensity: f32,
    pub opacity: f32,
    pub transparent: bool,
    pub alpha_test: f32,
    pub double_sided: bool,
    /// Sampling multiplier for the albedo map
    pub map_intensity: f32,
    /// Pre-paint color kept on BODY materials for later restoration
    pub original_color: Option<Rgb>,
    pub maps: TextureMaps<T>,
}

impl<T> SynthesizedMaterial<T> {
    /// Physical-material defaults; recipes override what they set
    fn physical(recipe: MaterialRole) -> Self {
        Self {
            recipe,
            name: None,
            color: Rgb::WHITE,
            emissive: Rgb::BLACK,
            emissive_intensity: 1.0,
            metalness: 0.0,
            roughness: 1.0,
            clearcoat: 0.0,
            clearcoat_roughness: 0.0,
            reflectivity: 0.5,
            transmission: 0.0,
            ior: 1.5,
            env_map_intensity: 1.0,
            opacity: 1.0,
            transparent: false,
            alpha_test: 0.0,
            double_sided: false,
            map_intensity: 1.0,
            original_color: None,
            maps: TextureMaps::default(),
        }
    }
}

/// Build the material for `role` from `source`
///
/// `color` is only read by the GLASS and BODY recipes. A colored SPECIAL
/// material is routed away from the SPECIAL recipe by
/// [`crate::pipeline::process`], not here.
pub fn synthesize<T: Clone>(
    role: MaterialRole,
    source: &SourceMaterial<T>,
    color: Option<Rgb>,
) -> SynthesizedMaterial<T> {
    trace!(
        "synthesize: role={:?} name={:?} color={:?}",
        role, source.name, color
    );

    match role {
        MaterialRole::Original => original(source),
        MaterialRole::Special => special(source),
        MaterialRole::Glass => glass(source, color),
        MaterialRole::Body => body(source, color),
    }
}

/// Copy every enumerated field, then re-apply all ten map slots
fn original<T: Clone>(source: &SourceMaterial<T>) -> SynthesizedMaterial<T> {
    let mut material = SynthesizedMaterial::physical(MaterialRole::Original);

    material.name = source.name.clone();
    if let Some(color) = source.color {
        material.color = color;
    }
    if let Some(emissive) = source.emissive {
        material.emissive = emissive;
    }
    if let Some(intensity) = source.emissive_intensity {
        material.emissive_intensity = intensity;
    }
    material.metalness = source.metalness;
    material.roughness = source.roughness;
    material.opacity = source.opacity;
    material.transparent = source.transparent;
    material.alpha_test = source.alpha_test;
    material.double_sided = source.double_sided;
    material.env_map_intensity = source.env_map_intensity;
    material.maps = source.maps.carry(&MapSlot::ALL);

    material
}

fn special<T: Clone>(source: &SourceMaterial<T>) -> SynthesizedMaterial<T> {
    let mut material = SynthesizedMaterial::physical(MaterialRole::Special);

    material.color = source.color.unwrap_or(Rgb::WHITE);
    material.emissive = source.emissive.unwrap_or(Rgb::BLACK);
    // A zero intensity counts as unset, like an absent one
    material.emissive_intensity = source
        .emissive_intensity
        .filter(|intensity| *intensity != 0.0)
        .unwrap_or(1.0);
    material.metalness = SPECIAL_METALNESS;
    material.roughness = SPECIAL_ROUGHNESS;
    material.env_map_intensity = ENV_MAP_INTENSITY;
    material.clearcoat = SPECIAL_CLEARCOAT;
    material.clearcoat_roughness = SPECIAL_CLEARCOAT_ROUGHNESS;
    material.maps = source.maps.carry(&SPECIAL_MAPS);

    material
}

fn glass<T: Clone>(source: &SourceMaterial<T>, color: Option<Rgb>) -> SynthesizedMaterial<T> {
    let mut material = SynthesizedMaterial::physical(MaterialRole::Glass);

    material.transparent = true;
    material.opacity = GLASS_OPACITY;
    material.transmission = GLASS_TRANSMISSION;
    material.roughness = 0.0;
    material.metalness = 0.0;
    material.clearcoat = GLASS_CLEARCOAT;
    material.clearcoat_roughness = GLASS_CLEARCOAT_ROUGHNESS;
    material.ior = GLASS_IOR;
    material.color = color
        .map(|c| c.scale(GLASS_TINT_SCALE))
        .unwrap_or(GLASS_DEFAULT_COLOR);
    material.maps = source.maps.carry(&GLASS_MAPS);

    material
}

fn body<T: Clone>(source: &SourceMaterial<T>, color: Option<Rgb>) -> SynthesizedMaterial<T> {
    let mut material = SynthesizedMaterial::physical(MaterialRole::Body);

    material.metalness = BODY_METALNESS;
    material.roughness = BODY_ROUGHNESS;
    material.env_map_intensity = ENV_MAP_INTENSITY;
    material.clearcoat = BODY_CLEARCOAT;
    material.clearcoat_roughness = BODY_CLEARCOAT_ROUGHNESS;
    material.reflectivity = BODY_REFLECTIVITY;

    material.color = match (color, source.color) {
        (Some(requested), _) => requested.scale(BODY_BRIGHTNESS),
        (None, Some(authored)) => authored.scale(BODY_BRIGHTNESS),
        (None, None) => Rgb::WHITE,
    };
    material.original_color = Some(source.color.unwrap_or(Rgb::WHITE));

    material.maps = source.maps.carry(&BODY_MAPS);
    if material.maps.map.is_some() {
        material.map_intensity = BODY_BRIGHTNESS;
    }

    material
}
