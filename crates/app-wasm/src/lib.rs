//! Livery Bevy WASM Build
//!
//! This crate compiles the viewer to WebAssembly for running inside a web
//! page. The scene renders to a canvas element while the page's palette and
//! view controls overlay it and talk to Bevy through window events.

use bevy::prelude::*;
use livery_config::ViewerConfig;
use livery_scene::{OutboundUiMessages, ScenePlugin, UiInbox};
use wasm_bindgen::prelude::*;

mod bridge;

/// Canvas selector the page must provide
pub const CANVAS_SELECTOR: &str = "#livery-canvas";

/// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    bridge::init_bridge()?;

    App::new()
        .insert_resource(ViewerConfig::default())
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        canvas: Some(CANVAS_SELECTOR.to_string()),
                        fit_canvas_to_parent: true,
                        prevent_default_event_handling: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    ..default()
                }),
        )
        .add_plugins(ScenePlugin)
        .add_plugins(PageBridgePlugin)
        .run();

    Ok(())
}

/// Plugin moving messages between the page and the scene
pub struct PageBridgePlugin;

impl Plugin for PageBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreUpdate, receive_ui_messages)
            .add_systems(Last, send_ui_messages);
    }
}

/// Move queued page messages into the scene inbox
fn receive_ui_messages(mut inbox: ResMut<UiInbox>) {
    while let Some(msg) = bridge::poll_ui_message() {
        inbox.push(msg);
    }
}

/// Dispatch everything the scene queued for the page
fn send_ui_messages(mut outbound: ResMut<OutboundUiMessages>) {
    for msg in outbound.drain() {
        if let Err(err) = bridge::send_to_ui(&msg) {
            warn!("Failed to deliver {:?} to the page: {:?}", msg, err);
        }
    }
}
