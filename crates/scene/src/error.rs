//! Scene-level failures reported to the page

use livery_ipc::BevyToUi;
use livery_materials::ColorError;
use thiserror::Error;

use crate::views::ViewParseError;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Model {path} is unavailable: {reason}")]
    ModelUnavailable { path: String, reason: String },
    #[error("No part matches '{0}'")]
    UnknownPart(String),
    #[error("No swatch at index {0}")]
    UnknownSwatch(usize),
    #[error(transparent)]
    InvalidColor(#[from] ColorError),
    #[error(transparent)]
    InvalidView(#[from] ViewParseError),
    #[error("Model is not loaded yet")]
    ModelNotReady,
}

impl SceneError {
    /// Stable identifier for the page
    pub fn code(&self) -> &'static str {
        match self {
            SceneError::ModelUnavailable { .. } => "model_unavailable",
            SceneError::UnknownPart(_) => "unknown_part",
            SceneError::UnknownSwatch(_) => "unknown_swatch",
            SceneError::InvalidColor(_) => "invalid_color",
            SceneError::InvalidView(_) => "invalid_view",
            SceneError::ModelNotReady => "model_not_ready",
        }
    }

    pub fn to_message(&self) -> BevyToUi {
        match self {
            SceneError::ModelUnavailable { path, reason } => BevyToUi::ModelUnavailable {
                path: path.clone(),
                reason: reason.clone(),
            },
            other => BevyToUi::Error {
                code: other.code().to_string(),
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_maps_to_dedicated_message() {
        let err = SceneError::ModelUnavailable {
            path: "models/car.gltf".to_string(),
            reason: "404".to_string(),
        };
        assert_eq!(
            err.to_message(),
            BevyToUi::ModelUnavailable {
                path: "models/car.gltf".to_string(),
                reason: "404".to_string(),
            }
        );
    }

    #[test]
    fn test_other_errors_carry_code() {
        let err = SceneError::from(ColorError::UnknownName("mauve-ish".to_string()));
        match err.to_message() {
            BevyToUi::Error { code, message } => {
                assert_eq!(code, "invalid_color");
                assert!(message.contains("mauve-ish"));
            }
            other => panic!("expected Error, got {other:?}"),
        }
    }
}
