//! Livery - native car paint viewer

use bevy::prelude::*;
use bevy::window::WindowResolution;
use livery_ipc::to_json;
use livery_scene::{OutboundUiMessages, ScenePlugin};

mod config;
mod input;

use config::ConfigOrigin;

fn main() {
    let (viewer_config, origin) = config::from_env();
    let display = &viewer_config.display;

    let window_config = Window {
        title: "Livery".into(),
        resolution: WindowResolution::new(display.width, display.height)
            .with_scale_factor_override(display.scale),
        present_mode: bevy::window::PresentMode::AutoVsync,
        ..default()
    };

    let mut app = App::new();

    app.insert_resource(viewer_config.clone())
        .insert_resource::<ConfigOrigin>(origin);

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(window_config),
                ..default()
            })
            .set(bevy::log::LogPlugin {
                level: bevy::log::Level::INFO,
                ..default()
            }),
    );

    app.add_plugins(ScenePlugin)
        .add_plugins(input::InputPlugin)
        .add_systems(Startup, config::log_config_origin)
        .add_systems(Last, log_outbound_messages)
        .run();
}

/// Without a page to receive them, outbound messages go to the log
fn log_outbound_messages(mut outbound: ResMut<OutboundUiMessages>) {
    for message in outbound.drain() {
        match to_json(&message) {
            Ok(json) => info!("-> {}", json),
            Err(err) => warn!("Failed to serialize {:?}: {}", message, err),
        }
    }
}
