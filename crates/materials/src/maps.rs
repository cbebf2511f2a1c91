//! Texture map slots
//!
//! Texture handles are shared, never owned: carrying a slot onto a new
//! material clones the handle (a reference-count bump for `Arc` or Bevy's
//! `Handle<Image>`), never the texels, and never mutates the texture.

use serde::{Deserialize, Serialize};

/// A named texture channel on a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapSlot {
    /// Albedo / base color
    Map,
    Normal,
    Roughness,
    Metalness,
    Emissive,
    /// Ambient occlusion
    Ao,
    Bump,
    Displacement,
    Light,
    Alpha,
}

impl MapSlot {
    /// Every slot, in the order the ORIGINAL recipe re-applies them
    pub const ALL: [MapSlot; 10] = [
        MapSlot::Map,
        MapSlot::Normal,
        MapSlot::Roughness,
        MapSlot::Metalness,
        MapSlot::Emissive,
        MapSlot::Ao,
        MapSlot::Bump,
        MapSlot::Displacement,
        MapSlot::Light,
        MapSlot::Alpha,
    ];

    /// Property name as it appears in authoring tools
    pub fn property_name(&self) -> &'static str {
        match self {
            MapSlot::Map => "map",
            MapSlot::Normal => "normalMap",
            MapSlot::Roughness => "roughnessMap",
            MapSlot::Metalness => "metalnessMap",
            MapSlot::Emissive => "emissiveMap",
            MapSlot::Ao => "aoMap",
            MapSlot::Bump => "bumpMap",
            MapSlot::Displacement => "displacementMap",
            MapSlot::Light => "lightMap",
            MapSlot::Alpha => "alphaMap",
        }
    }
}

/// Optional texture handle per slot
#[derive(Debug, Clone, PartialEq)]
pub struct TextureMaps<T> {
    pub map: Option<T>,
    pub normal_map: Option<T>,
    pub roughness_map: Option<T>,
    pub metalness_map: Option<T>,
    pub emissive_map: Option<T>,
    pub ao_map: Option<T>,
    pub bump_map: Option<T>,
    pub displacement_map: Option<T>,
    pub light_map: Option<T>,
    pub alpha_map: Option<T>,
}

// Manual impl: a derive would require `T: Default`
impl<T> Default for TextureMaps<T> {
    fn default() -> Self {
        Self {
            map: None,
            normal_map: None,
            roughness_map: None,
            metalness_map: None,
            emissive_map: None,
            ao_map: None,
            bump_map: None,
            displacement_map: None,
            light_map: None,
            alpha_map: None,
        }
    }
}

impl<T> TextureMaps<T> {
    pub fn get(&self, slot: MapSlot) -> Option<&T> {
        self.slot_ref(slot).as_ref()
    }

    pub fn set(&mut self, slot: MapSlot, texture: T) {
        *self.slot_mut(slot) = Some(texture);
    }

    /// Builder-style [`Self::set`]
    pub fn with(mut self, slot: MapSlot, texture: T) -> Self {
        self.set(slot, texture);
        self
    }

    pub fn contains(&self, slot: MapSlot) -> bool {
        self.get(slot).is_some()
    }

    /// Slots that hold a texture
    pub fn occupied(&self) -> impl Iterator<Item = MapSlot> + '_ {
        MapSlot::ALL.into_iter().filter(|slot| self.contains(*slot))
    }

    fn slot_ref(&self, slot: MapSlot) -> &Option<T> {
        match slot {
            MapSlot::Map => &self.map,
            MapSlot::Normal => &self.normal_map,
            MapSlot::Roughness => &self.roughness_map,
            MapSlot::Metalness => &self.metalness_map,
            MapSlot::Emissive => &self.emissive_map,
            MapSlot::Ao => &self.ao_map,
            MapSlot::Bump => &self.bump_map,
            MapSlot::Displacement => &self.displacement_map,
            MapSlot::Light => &self.light_map,
            MapSlot::Alpha => &self.alpha_map,
        }
    }

    fn slot_mut(&mut self, slot: MapSlot) -> &mut Option<T> {
        match slot {
            MapSlot::Map => &mut self.map,
            MapSlot::Normal => &mut self.normal_map,
            MapSlot::Roughness => &mut self.roughness_map,
            MapSlot::Metalness => &mut self.metalness_map,
            MapSlot::Emissive => &mut self.emissive_map,
            MapSlot::Ao => &mut self.ao_map,
            MapSlot::Bump => &mut self.bump_map,
            MapSlot::Displacement => &mut self.displacement_map,
            MapSlot::Light => &mut self.light_map,
            MapSlot::Alpha => &mut self.alpha_map,
        }
    }
}

impl<T: Clone> TextureMaps<T> {
    /// Share the listed slots with a new map set; unlisted slots stay empty
    pub fn carry(&self, slots: &[MapSlot]) -> Self {
        let mut carried = Self::default();
        for &slot in slots {
            if let Some(texture) = self.get(slot) {
                carried.set(slot, texture.clone());
            }
        }
        carried
    }
}
