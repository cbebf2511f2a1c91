//! RGB paint colors
//!
//! Components are sRGB-encoded `f32` values, nominally in 0.0-1.0. Scaling
//! can push a channel above 1.0 (body paint is brightened by 1.2); the
//! renderer clamps at shading time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid hex color '{0}': expected 3 or 6 hex digits")]
    InvalidHex(String),
    #[error("Unknown color name: {0}")]
    UnknownName(String),
}

/// CSS color names accepted by [`Rgb::from_str`]
const NAMED_COLORS: &[(&str, u32)] = &[
    ("aqua", 0x00ffff),
    ("black", 0x000000),
    ("blue", 0x0000ff),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkred", 0x8b0000),
    ("fuchsia", 0xff00ff),
    ("gold", 0xffd700),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("grey", 0x808080),
    ("lime", 0x00ff00),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("navy", 0x000080),
    ("olive", 0x808000),
    ("orange", 0xffa500),
    ("purple", 0x800080),
    ("red", 0xff0000),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("teal", 0x008080),
    ("white", 0xffffff),
    ("yellow", 0xffff00),
];

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` integer
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Pack into `0xRRGGBB`, clamping each channel to 0.0-1.0
    pub fn to_hex(&self) -> u32 {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Look up a CSS color name (case-insensitive)
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        let lower = name.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(n, _)| *n == lower)
            .map(|(_, hex)| Self::from_hex(*hex))
            .ok_or_else(|| ColorError::UnknownName(name.to_string()))
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Multiply every channel by `factor`
    pub fn scale(self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(c: [f32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Rgb> for [f32; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}

impl From<u32> for Rgb {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Accepts `#rrggbb`, `#rgb`, `0xrrggbb`, bare `rrggbb`, or a color name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let digits = if let Some(rest) = s.strip_prefix('#') {
            rest
        } else if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            rest
        } else if s.len() == 6 && s.chars().all(|c| c.is_ascii_hexdigit()) {
            s
        } else {
            return Self::from_name(s);
        };

        parse_hex_digits(digits).ok_or_else(|| ColorError::InvalidHex(s.to_string()))
    }
}

fn parse_hex_digits(digits: &str) -> Option<Rgb> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        6 => u32::from_str_radix(digits, 16).ok().map(Rgb::from_hex),
        3 => {
            // #rgb expands each nibble: #f80 -> #ff8800
            let short = u32::from_str_radix(digits, 16).ok()?;
            let r = (short >> 8) & 0xf;
            let g = (short >> 4) & 0xf;
            let b = short & 0xf;
            Some(Rgb::from_hex(((r * 0x11) << 16) | ((g * 0x11) << 8) | (b * 0x11)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Rgb, b: Rgb) -> bool {
        (a.r - b.r).abs() < 1e-6 && (a.g - b.g).abs() < 1e-6 && (a.b - b.b).abs() < 1e-6
    }

    #[test]
    fn test_from_hex() {
        let red = Rgb::from_hex(0xff0000);
        assert!(approx_eq(red, Rgb::new(1.0, 0.0, 0.0)));

        let grey = Rgb::from_hex(0x808080);
        assert!((grey.r - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(grey.to_hex(), 0x808080);
    }

    #[test]
    fn test_scale() {
        let scaled = Rgb::new(0.5, 0.25, 1.0).scale(1.2);
        assert!(approx_eq(scaled, Rgb::new(0.6, 0.3, 1.2)));
    }

    #[test]
    fn test_to_hex_clamps_overbright() {
        assert_eq!(Rgb::new(1.2, -0.1, 0.5).to_hex(), 0xff0080);
    }

    #[test]
    fn test_parse_hex_forms() {
        let expected = Rgb::from_hex(0x3366cc);
        assert!(approx_eq("#3366cc".parse().unwrap(), expected));
        assert!(approx_eq("0x3366CC".parse().unwrap(), expected));
        assert!(approx_eq("3366cc".parse().unwrap(), expected));
        assert!(approx_eq("#36c".parse().unwrap(), expected));
        assert!(approx_eq("  #3366cc ".parse().unwrap(), expected));
    }

    #[test]
    fn test_parse_names() {
        assert!(approx_eq("red".parse().unwrap(), Rgb::new(1.0, 0.0, 0.0)));
        assert!(approx_eq("Silver".parse().unwrap(), Rgb::from_hex(0xc0c0c0)));
        assert!(approx_eq("grey".parse().unwrap(), "gray".parse().unwrap()));
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(
            "#12345".parse::<Rgb>(),
            Err(ColorError::InvalidHex("#12345".to_string()))
        );
        assert_eq!(
            "#gg0000".parse::<Rgb>(),
            Err(ColorError::InvalidHex("#gg0000".to_string()))
        );
        assert_eq!(
            "chartreuse-ish".parse::<Rgb>(),
            Err(ColorError::UnknownName("chartreuse-ish".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let color = Rgb::from_hex(0x0a1b2c);
        assert_eq!(color.to_string(), "#0a1b2c");
        assert_eq!(color.to_string().parse::<Rgb>().unwrap().to_hex(), 0x0a1b2c);
    }
}
