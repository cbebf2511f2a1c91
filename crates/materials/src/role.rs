//! Material classification
//!
//! Every material maps to exactly one [`MaterialRole`]. Rules are checked
//! in order and the first match wins:
//!
//! 1. `mesh<digits>mtl` anywhere in the name: [`MaterialRole::Original`]
//! 2. any [`SPECIAL_KEYWORDS`] entry: [`MaterialRole::Special`]
//! 3. any [`GLASS_KEYWORDS`] entry, or the transparent flag: [`MaterialRole::Glass`]
//! 4. anything else: [`MaterialRole::Body`]
//!
//! Matching is case-insensitive; an unnamed material matches as "".

use serde::{Deserialize, Serialize};

use crate::source::SourceMaterial;

/// Trim and emitter keywords (lights, badges, chrome)
pub const SPECIAL_KEYWORDS: [&str; 8] = [
    "light", "lamp", "logo", "emblem", "chrome", "tail", "led", "badge",
];

/// Window keywords
pub const GLASS_KEYWORDS: [&str; 2] = ["glass", "window"];

/// Visual role of a material, selecting its synthesis recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialRole {
    /// Structural parts kept exactly as authored (tires, grille meshes)
    Original,
    /// Trim and emitters kept in their authored hue
    Special,
    /// Windows and transparent panels
    Glass,
    /// Paintable exterior panels
    Body,
}

impl MaterialRole {
    pub const ALL: [MaterialRole; 4] = [
        MaterialRole::Original,
        MaterialRole::Special,
        MaterialRole::Glass,
        MaterialRole::Body,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialRole::Original => "original",
            MaterialRole::Special => "special",
            MaterialRole::Glass => "glass",
            MaterialRole::Body => "body",
        }
    }
}

/// Classify a material by its name and transparency flag
pub fn classify<T>(material: &SourceMaterial<T>) -> MaterialRole {
    let name = material.name_or_empty().to_ascii_lowercase();

    if has_mesh_mtl_pattern(&name) {
        MaterialRole::Original
    } else if has_special_keyword(&name) {
        MaterialRole::Special
    } else if has_glass_keyword(&name) || material.transparent {
        MaterialRole::Glass
    } else {
        MaterialRole::Body
    }
}

/// Rule 3 in isolation, ignoring whether an earlier rule would win
pub fn is_glass<T>(material: &SourceMaterial<T>) -> bool {
    has_glass_keyword(&material.name_or_empty().to_ascii_lowercase()) || material.transparent
}

fn has_special_keyword(lower_name: &str) -> bool {
    SPECIAL_KEYWORDS.iter().any(|k| lower_name.contains(k))
}

fn has_glass_keyword(lower_name: &str) -> bool {
    GLASS_KEYWORDS.iter().any(|k| lower_name.contains(k))
}

/// Search for `mesh`, one or more ASCII digits, then `mtl`
fn has_mesh_mtl_pattern(lower_name: &str) -> bool {
    lower_name.match_indices("mesh").any(|(start, prefix)| {
        let rest = &lower_name[start + prefix.len()..];
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        digits > 0 && rest[digits..].starts_with("mtl")
    })
}
