//! IPC message protocol for Livery
//!
//! Defines the JSON messages exchanged between the Bevy viewer and the page
//! hosting it. The page owns every widget; the viewer only reacts to
//! commands and reports what happened.

mod commands;
mod error;
mod messages;
mod types;

pub use commands::*;
pub use error::IpcError;
pub use messages::*;
pub use types::*;

/// Parse one message sent by the page
pub fn parse_ui_message(json: &str) -> Result<UiToBevy, IpcError> {
    if json.trim().is_empty() {
        return Err(IpcError::InvalidFormat("empty message".to_string()));
    }
    Ok(serde_json::from_str(json)?)
}

/// Serialize one message for the page
pub fn to_json(message: &BevyToUi) -> Result<String, IpcError> {
    Ok(serde_json::to_string(message)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_change_color_forms() {
        let cases = [
            (r##"{"type":"PaintCommand","data":{"ChangeColor":{"color":"#ff0000"}}}"##, ColorValue::Text("#ff0000".to_string())),
            (r#"{"type":"PaintCommand","data":{"ChangeColor":{"color":16711680}}}"#, ColorValue::Hex(0xff0000)),
            (r#"{"type":"PaintCommand","data":{"ChangeColor":{"color":[1.0,0.5,0.0]}}}"#, ColorValue::Rgb([1.0, 0.5, 0.0])),
        ];

        for (json, expected) in cases {
            let message = parse_ui_message(json).unwrap();
            assert_eq!(
                message,
                UiToBevy::PaintCommand(PaintCommand::ChangeColor { color: expected })
            );
        }
    }

    #[test]
    fn test_parse_unit_commands() {
        assert_eq!(
            parse_ui_message(r#"{"type":"PaintCommand","data":"Reset"}"#).unwrap(),
            UiToBevy::PaintCommand(PaintCommand::Reset)
        );
        assert_eq!(
            parse_ui_message(r#"{"type":"CameraCommand","data":"FitToModel"}"#).unwrap(),
            UiToBevy::CameraCommand(CameraCommand::FitToModel)
        );
    }

    #[test]
    fn test_parse_camera_commands() {
        let message =
            parse_ui_message(r#"{"type":"CameraCommand","data":{"SetView":{"view":"3/4"}}}"#)
                .unwrap();
        assert_eq!(
            message,
            UiToBevy::CameraCommand(CameraCommand::SetView {
                view: "3/4".to_string()
            })
        );

        let message =
            parse_ui_message(r#"{"type":"CameraCommand","data":{"SetAngle":{"degrees":45}}}"#)
                .unwrap();
        assert_eq!(
            message,
            UiToBevy::CameraCommand(CameraCommand::SetAngle { degrees: 45.0 })
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_ui_message("   "),
            Err(IpcError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_ui_message(r#"{"type":"Explode"}"#),
            Err(IpcError::Json(_))
        ));
    }

    #[test]
    fn test_outbound_json_shape() {
        let json = to_json(&BevyToUi::PaintApplied {
            color: Some("#ff0000".to_string()),
            materials: MaterialCounts {
                original: 3,
                special: 2,
                glass: 1,
                body: 8,
            },
        })
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "PaintApplied");
        assert_eq!(value["data"]["color"], "#ff0000");
        assert_eq!(value["data"]["materials"]["body"], 8);
    }

    #[test]
    fn test_model_unavailable_json() {
        let json = to_json(&BevyToUi::ModelUnavailable {
            path: "models/car.gltf".to_string(),
            reason: "not found".to_string(),
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"type":"ModelUnavailable","data":{"path":"models/car.gltf","reason":"not found"}}"#
        );
    }
}
