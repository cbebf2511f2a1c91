//! Command types for IPC messages.

mod paint;

pub use paint::*;

use serde::{Deserialize, Serialize};

/// Camera control commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CameraCommand {
    /// Preset view name: front, back, left, right, top, bottom or 3/4
    SetView { view: String },
    /// Orbit to an angle around the car, 0 = front
    SetAngle { degrees: f32 },
    /// Frame the mesh parts whose name contains `name`
    FocusPart { name: String },
    FitToModel,
    Reset,
}
