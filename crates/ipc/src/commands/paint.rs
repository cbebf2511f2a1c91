//! Paint command types for the livery selector.

use serde::{Deserialize, Serialize};

/// A paint color as the page sends it
///
/// Untagged: `16711680`, `[1.0, 0.0, 0.0]` and `"#ff0000"` (or a color
/// name) are all accepted. Strings are parsed on the Bevy side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// Packed `0xRRGGBB`
    Hex(u32),
    /// sRGB components, 0.0-1.0
    Rgb([f32; 3]),
    Text(String),
}

/// Commands that repaint the car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PaintCommand {
    /// Repaint the body with an arbitrary color
    ChangeColor { color: ColorValue },
    /// Repaint with a palette entry
    SelectSwatch { index: usize },
    /// Back to the factory look
    Reset,
}
