//! Main IPC message enums for communication between Bevy and the page.

use serde::{Deserialize, Serialize};

use crate::commands::{CameraCommand, PaintCommand};
use crate::types::MaterialCounts;

/// Messages from Bevy to the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum BevyToUi {
    /// The car asset started loading
    ModelLoading { path: String },

    /// The car is in the scene and painted
    ModelLoaded {
        /// Mesh part names, for focus requests
        parts: Vec<String>,
        materials: MaterialCounts,
    },

    /// The car asset failed to load; nothing further will be shown
    ModelUnavailable { path: String, reason: String },

    /// A repaint finished
    PaintApplied {
        /// `#rrggbb`, or `None` after a factory reset
        color: Option<String>,
        materials: MaterialCounts,
    },

    /// The camera moved to a preset, angle or part
    CameraViewChanged { view: String },

    /// Error notification
    Error { code: String, message: String },
}

/// Messages from the page to Bevy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToBevy {
    /// Car paint commands
    PaintCommand(PaintCommand),

    /// Camera control commands
    CameraCommand(CameraCommand),
}
