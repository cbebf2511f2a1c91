//! Camera presets and model bounds
//!
//! Preset positions are absolute world positions derived from the model's
//! bounding box; the camera always looks at the box center.

use std::fmt;
use std::str::FromStr;

use bevy::camera::primitives::Aabb;
use bevy::prelude::*;
use thiserror::Error;

/// Share of the view distance used by the 3/4 preset on each axis
const THREE_QUARTER: f32 = 0.7;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown camera view '{0}': expected front, back, left, right, top, bottom, 3/4 or an angle")]
pub struct ViewParseError(pub String);

/// Where to put the camera relative to the model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraView {
    /// Degrees around the model, 0 = front, 90 = right
    Angle(f32),
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
    ThreeQuarter,
}

impl CameraView {
    /// Presets in hotkey order (F1..F7)
    pub const PRESETS: [CameraView; 7] = [
        CameraView::Front,
        CameraView::Back,
        CameraView::Left,
        CameraView::Right,
        CameraView::Top,
        CameraView::Bottom,
        CameraView::ThreeQuarter,
    ];
}

impl fmt::Display for CameraView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraView::Angle(degrees) => write!(f, "{degrees}"),
            CameraView::Front => f.write_str("front"),
            CameraView::Back => f.write_str("back"),
            CameraView::Left => f.write_str("left"),
            CameraView::Right => f.write_str("right"),
            CameraView::Top => f.write_str("top"),
            CameraView::Bottom => f.write_str("bottom"),
            CameraView::ThreeQuarter => f.write_str("3/4"),
        }
    }
}

impl FromStr for CameraView {
    type Err = ViewParseError;

    /// Preset names are case-insensitive; a bare number is an angle in degrees
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "front" => Ok(CameraView::Front),
            "back" => Ok(CameraView::Back),
            "left" => Ok(CameraView::Left),
            "right" => Ok(CameraView::Right),
            "top" => Ok(CameraView::Top),
            "bottom" => Ok(CameraView::Bottom),
            "3/4" => Ok(CameraView::ThreeQuarter),
            other => other
                .parse::<f32>()
                .ok()
                .filter(|degrees| degrees.is_finite())
                .map(CameraView::Angle)
                .ok_or_else(|| ViewParseError(trimmed.to_string())),
        }
    }
}

/// World-space axis-aligned bounds of the loaded model
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ModelBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl ModelBounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, `None` when there are none
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        points.into_iter().fold(None, |bounds, point| {
            Some(match bounds {
                None => Self::new(point, point),
                Some(b) => Self::new(b.min.min(point), b.max.max(point)),
            })
        })
    }

    /// World-space bounds of a mesh's local bounding box
    pub fn from_aabb(aabb: &Aabb, transform: &GlobalTransform) -> Self {
        let center = Vec3::from(aabb.center);
        let half = Vec3::from(aabb.half_extents);
        let corners = [-1.0, 1.0].into_iter().flat_map(|x| {
            [-1.0, 1.0].into_iter().flat_map(move |y| {
                [-1.0, 1.0]
                    .into_iter()
                    .map(move |z| center + half * Vec3::new(x, y, z))
            })
        });

        // Eight corners always yield a box
        Self::from_points(corners.map(|corner| transform.transform_point(corner)))
            .unwrap_or(Self::new(center, center))
    }

    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Twice the largest dimension
    pub fn view_distance(&self) -> f32 {
        self.size().max_element() * 2.0
    }

    /// Camera position for a view of this model
    pub fn camera_position(&self, view: CameraView) -> Vec3 {
        let d = self.view_distance();
        let half_height = self.size().y / 2.0;

        match view {
            CameraView::Angle(degrees) => {
                let radians = degrees.to_radians();
                Vec3::new(radians.sin() * d, half_height, radians.cos() * d)
            }
            CameraView::Front => Vec3::new(0.0, half_height, d),
            CameraView::Back => Vec3::new(0.0, half_height, -d),
            CameraView::Left => Vec3::new(-d, half_height, 0.0),
            CameraView::Right => Vec3::new(d, half_height, 0.0),
            CameraView::Top => Vec3::new(0.0, d, 0.0),
            CameraView::Bottom => Vec3::new(0.0, -d, 0.0),
            CameraView::ThreeQuarter => Vec3::new(
                d * THREE_QUARTER,
                self.size().y * THREE_QUARTER,
                d * THREE_QUARTER,
            ),
        }
    }
}
