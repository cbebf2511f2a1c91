//! Hotkey handling for Livery
//!
//! - 1-9: Select a palette swatch
//! - R: Reset to the factory paint
//! - F: Fit the camera to the model
//! - F1-F7: Front, back, left, right, top, bottom, 3/4 views
//! - Home: Reset the camera

use bevy::prelude::*;
use livery_ipc::{CameraCommand, PaintCommand, UiToBevy};
use livery_scene::{CameraView, UiInbox};

const SWATCH_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

const VIEW_KEYS: [KeyCode; 7] = [
    KeyCode::F1,
    KeyCode::F2,
    KeyCode::F3,
    KeyCode::F4,
    KeyCode::F5,
    KeyCode::F6,
    KeyCode::F7,
];

/// The UI message a key stands for, if any
pub fn hotkey_message(key: KeyCode) -> Option<UiToBevy> {
    if let Some(index) = SWATCH_KEYS.iter().position(|k| *k == key) {
        return Some(UiToBevy::PaintCommand(PaintCommand::SelectSwatch { index }));
    }
    if let Some(index) = VIEW_KEYS.iter().position(|k| *k == key) {
        return Some(UiToBevy::CameraCommand(CameraCommand::SetView {
            view: CameraView::PRESETS[index].to_string(),
        }));
    }

    match key {
        KeyCode::KeyR => Some(UiToBevy::PaintCommand(PaintCommand::Reset)),
        KeyCode::KeyF => Some(UiToBevy::CameraCommand(CameraCommand::FitToModel)),
        KeyCode::Home => Some(UiToBevy::CameraCommand(CameraCommand::Reset)),
        _ => None,
    }
}

/// Queue hotkey presses as if the page had sent them
pub fn handle_viewer_hotkeys(key_input: Res<ButtonInput<KeyCode>>, mut inbox: ResMut<UiInbox>) {
    let ctrl = key_input.pressed(KeyCode::ControlLeft) || key_input.pressed(KeyCode::ControlRight);
    if ctrl {
        return;
    }

    for key in key_input.get_just_pressed() {
        if let Some(message) = hotkey_message(*key) {
            debug!("Hotkey {:?} -> {:?}", key, message);
            inbox.push(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_selects_swatch() {
        assert_eq!(
            hotkey_message(KeyCode::Digit1),
            Some(UiToBevy::PaintCommand(PaintCommand::SelectSwatch { index: 0 }))
        );
        assert_eq!(
            hotkey_message(KeyCode::Digit9),
            Some(UiToBevy::PaintCommand(PaintCommand::SelectSwatch { index: 8 }))
        );
    }

    #[test]
    fn test_function_keys_select_views() {
        assert_eq!(
            hotkey_message(KeyCode::F1),
            Some(UiToBevy::CameraCommand(CameraCommand::SetView {
                view: "front".to_string()
            }))
        );
        assert_eq!(
            hotkey_message(KeyCode::F7),
            Some(UiToBevy::CameraCommand(CameraCommand::SetView {
                view: "3/4".to_string()
            }))
        );
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(
            hotkey_message(KeyCode::KeyR),
            Some(UiToBevy::PaintCommand(PaintCommand::Reset))
        );
        assert_eq!(
            hotkey_message(KeyCode::KeyF),
            Some(UiToBevy::CameraCommand(CameraCommand::FitToModel))
        );
        assert_eq!(hotkey_message(KeyCode::KeyQ), None);
    }
}
