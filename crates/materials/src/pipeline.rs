//! Classify-then-synthesize pipeline
//!
//! The pipeline does not depend on Bevy. The scene crate calls it once per
//! mesh material on model load, on every repaint, and on reset.

use tracing::trace;

use crate::color::Rgb;
use crate::constants::ENV_MAP_INTENSITY;
use crate::recipe::{SynthesizedMaterial, synthesize};
use crate::role::{MaterialRole, classify, is_glass};
use crate::source::SourceMaterial;

/// Pick the recipe for a material and an optional paint color
///
/// A SPECIAL material only keeps its own recipe when no color is given.
/// With a color it falls through to GLASS if it also reads as glass, and to
/// BODY otherwise, so trim named e.g. `chrome` is repainted with the body.
pub fn recipe_for<T>(source: &SourceMaterial<T>, color: Option<Rgb>) -> MaterialRole {
    match classify(source) {
        MaterialRole::Original => MaterialRole::Original,
        MaterialRole::Special if color.is_none() => MaterialRole::Special,
        _ if is_glass(source) => MaterialRole::Glass,
        _ => MaterialRole::Body,
    }
}

/// Build the replacement material for `source`
pub fn process<T: Clone>(source: &SourceMaterial<T>, color: Option<Rgb>) -> SynthesizedMaterial<T> {
    let role = recipe_for(source, color);
    trace!("process: {:?} -> {}", source.name, role.as_str());
    synthesize(role, source, color)
}

/// How a model is being (re)painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// First paint right after the model loads
    Initial(Rgb),
    /// User-selected paint color
    Color(Rgb),
    /// Back to the as-authored look, no color
    Factory,
}

impl Paint {
    /// Color handed to the recipes, if any
    pub fn color(&self) -> Option<Rgb> {
        match self {
            Paint::Initial(color) | Paint::Color(color) => Some(*color),
            Paint::Factory => None,
        }
    }

    pub fn is_initial(&self) -> bool {
        matches!(self, Paint::Initial(_))
    }

    /// Run the pipeline for one source material
    ///
    /// Initial setup additionally forces the environment reflection
    /// strength on every result, ORIGINAL and GLASS included.
    pub fn apply<T: Clone>(&self, source: &SourceMaterial<T>) -> SynthesizedMaterial<T> {
        let mut material = process(source, self.color());
        if self.is_initial() {
            material.env_map_intensity = ENV_MAP_INTENSITY;
        }
        material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::MapSlot;
    use std::sync::Arc;

    type Tex = Arc<&'static str>;

    fn material(name: &str) -> SourceMaterial<Tex> {
        SourceMaterial::named(name)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_original_ignores_color() {
        let source = material("mesh7mtl").with_color(Rgb::new(0.3, 0.3, 0.3));
        let result = process(&source, Some(Rgb::from_hex(0xff0000)));
        assert_eq!(result.recipe, MaterialRole::Original);
        assert_eq!(result.color, Rgb::new(0.3, 0.3, 0.3));
    }

    #[test]
    fn test_special_without_color_keeps_emissive() {
        let source = material("headlight_led").with_emissive(Rgb::new(1.0, 0.9, 0.6), 4.0);
        let result = process(&source, None);

        assert_eq!(result.recipe, MaterialRole::Special);
        assert_eq!(result.emissive, Rgb::new(1.0, 0.9, 0.6));
        assert_eq!(result.emissive_intensity, 4.0);
    }

    #[test]
    fn test_transparent_chrome_with_color_becomes_glass() {
        let source = material("chrome").with_transparent(true);
        let result = process(&source, Some(Rgb::from_hex(0xff0000)));

        assert_eq!(result.recipe, MaterialRole::Glass);
        assert!(approx(result.color.r, 0.1));
        assert!(approx(result.color.g, 0.0));
    }

    #[test]
    fn test_special_with_color_falls_through_to_body() {
        let source = material("rear_badge");
        assert_eq!(recipe_for(&source, None), MaterialRole::Special);
        assert_eq!(recipe_for(&source, Some(Rgb::WHITE)), MaterialRole::Body);
    }

    #[test]
    fn test_body_paint_keeps_unscaled_original() {
        let source = material("body_panel").with_color(Rgb::new(0.2, 0.2, 0.25));
        let result = process(&source, Some(Rgb::from_hex(0xff0000)));

        assert_eq!(result.recipe, MaterialRole::Body);
        assert!(approx(result.color.r, 1.2));
        assert!(approx(result.color.g, 0.0));
        assert!(approx(result.color.b, 0.0));
        assert_eq!(result.original_color, Some(Rgb::new(0.2, 0.2, 0.25)));
    }

    #[test]
    fn test_glass_drops_metalness_map() {
        let albedo: Tex = Arc::new("albedo");
        let source = material("rear_window")
            .with_map(MapSlot::Map, albedo.clone())
            .with_map(MapSlot::Metalness, Arc::new("metal"));

        let result = process(&source, None);

        assert_eq!(result.recipe, MaterialRole::Glass);
        assert!(Arc::ptr_eq(result.maps.map.as_ref().unwrap(), &albedo));
        assert!(result.maps.metalness_map.is_none());
    }

    #[test]
    fn test_initial_paint_forces_env_intensity() {
        let red = Rgb::from_hex(0xff0000);
        for name in ["mesh1mtl", "tail_lamp", "windshield_glass", "door"] {
            let source = material(name);
            let initial = Paint::Initial(red).apply(&source);
            let repaint = Paint::Color(red).apply(&source);

            assert_eq!(initial.env_map_intensity, 2.0, "{name}");
            assert_eq!(initial.recipe, repaint.recipe, "{name}");
        }

        let glass = Paint::Color(red).apply(&material("windshield_glass"));
        assert_eq!(glass.env_map_intensity, 1.0);
    }

    #[test]
    fn test_factory_paint_has_no_color() {
        assert_eq!(Paint::Factory.color(), None);
        assert_eq!(Paint::Color(Rgb::BLACK).color(), Some(Rgb::BLACK));

        let result = Paint::Factory.apply(&material("tail_light"));
        assert_eq!(result.recipe, MaterialRole::Special);
    }
}
