//! Keyboard shortcuts for the native viewer
//!
//! The browser build has no hotkeys; the page drives it over the bridge.

mod hotkeys;

use bevy::input::InputSystems;
use bevy::prelude::*;

pub use hotkeys::{handle_viewer_hotkeys, hotkey_message};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        // Run in PreUpdate so the inbox is filled before the scene dispatches it
        app.add_systems(PreUpdate, handle_viewer_hotkeys.after(InputSystems));

        info!("Input plugin initialized");
    }
}
