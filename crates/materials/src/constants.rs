//! Recipe constants. These are exact visual-parity values, not tunables.

use crate::color::Rgb;
use crate::maps::MapSlot;

/// Environment reflection strength for SPECIAL and BODY, and for every
/// material during initial setup.
pub const ENV_MAP_INTENSITY: f32 = 2.0;

pub const SPECIAL_METALNESS: f32 = 0.1;
pub const SPECIAL_ROUGHNESS: f32 = 0.2;
pub const SPECIAL_CLEARCOAT: f32 = 1.0;
pub const SPECIAL_CLEARCOAT_ROUGHNESS: f32 = 0.1;

pub const GLASS_OPACITY: f32 = 0.7;
pub const GLASS_TRANSMISSION: f32 = 1.0;
pub const GLASS_IOR: f32 = 1.45;
pub const GLASS_CLEARCOAT: f32 = 1.0;
pub const GLASS_CLEARCOAT_ROUGHNESS: f32 = 0.05;
/// Requested paint is darkened to a tint on glass
pub const GLASS_TINT_SCALE: f32 = 0.1;
/// Cool clear tint used when no paint is requested
pub const GLASS_DEFAULT_COLOR: Rgb = Rgb::new(0.95, 0.95, 1.0);

pub const BODY_METALNESS: f32 = 0.6;
pub const BODY_ROUGHNESS: f32 = 0.15;
pub const BODY_CLEARCOAT: f32 = 0.5;
pub const BODY_CLEARCOAT_ROUGHNESS: f32 = 0.1;
pub const BODY_REFLECTIVITY: f32 = 1.0;
/// Brightening applied to body paint and to its albedo map sampling
pub const BODY_BRIGHTNESS: f32 = 1.2;

/// Slots carried by the SPECIAL recipe
pub const SPECIAL_MAPS: [MapSlot; 5] = [
    MapSlot::Map,
    MapSlot::Emissive,
    MapSlot::Normal,
    MapSlot::Metalness,
    MapSlot::Roughness,
];

/// Slots carried by the GLASS recipe
pub const GLASS_MAPS: [MapSlot; 2] = [MapSlot::Map, MapSlot::Normal];

/// Slots carried by the BODY recipe
pub const BODY_MAPS: [MapSlot; 4] = [
    MapSlot::Map,
    MapSlot::Normal,
    MapSlot::Metalness,
    MapSlot::Roughness,
];
