//! Shared scene setup for Livery
//!
//! This crate provides the car viewer scene used by both the native Bevy
//! app and the WASM build: the studio set, the orbit camera, the car model
//! with its material pipeline, and the message plumbing to the page.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use livery_config::ViewerConfig;
use livery_ipc::BevyToUi;
use livery_materials::Rgb;

mod camera;
mod car_model;
mod commands;
mod error;
mod framing;
mod lighting;
mod views;

pub use camera::{CameraControllerPlugin, MainCamera, OrbitCamera};
pub use car_model::{
    CarModelPlugin, CarModelRoot, CarModelState, ModelPhase, PaintRequest, PaintSource,
    material_counts,
};
pub use commands::{SceneRequest, UiInbox, color_from_value, resolve};
pub use error::SceneError;
pub use framing::{CameraRequest, FramingPlugin, part_matches};
pub use lighting::{LightPanel, LightingPlugin, PanelLight};
pub use views::{CameraView, ModelBounds, ViewParseError};

/// Resource for queuing messages to send to the UI
/// The front end (native app or WASM bridge) drains this each frame
#[derive(Resource, Default)]
pub struct OutboundUiMessages {
    pub messages: Vec<BevyToUi>,
}

impl OutboundUiMessages {
    /// Queue a message to be sent to the UI
    pub fn send(&mut self, msg: BevyToUi) {
        self.messages.push(msg);
    }

    /// Take all queued messages, leaving the queue empty
    pub fn drain(&mut self) -> Vec<BevyToUi> {
        std::mem::take(&mut self.messages)
    }
}

/// Marker component for the reflective studio floor
#[derive(Component)]
pub struct StudioFloor;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewerConfig>()
            .init_resource::<OutboundUiMessages>()
            .init_resource::<UiInbox>();

        app.add_plugins(CameraControllerPlugin);
        app.add_plugins(LightingPlugin);
        app.add_plugins(CarModelPlugin);
        app.add_plugins(FramingPlugin);

        app.add_systems(Startup, setup_scene);
        app.add_systems(Update, commands::dispatch_ui_messages);
    }
}

/// Set up the camera, background and studio floor
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<ViewerConfig>,
) {
    let camera_config = &config.camera;
    commands.insert_resource(ClearColor(Rgb::from_hex(camera_config.background).into()));

    // Reinhard tonemapping: TonyMcMapFace needs tonemapping_luts (zstd), unavailable in WASM
    let orbit_camera = OrbitCamera::default();
    let camera_position = orbit_camera.calculate_position();
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: camera_config.fov_radians(),
            near: camera_config.near,
            far: camera_config.far,
            aspect_ratio: config.display.aspect_ratio(),
            ..default()
        }),
        Transform::from_translation(camera_position).looking_at(orbit_camera.target, Vec3::Y),
        Tonemapping::Reinhard,
        MainCamera,
        orbit_camera,
    ));

    // Floor box with its top face at y = 0
    let [width, height, depth] = config.studio.floor_size;
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(width, height, depth))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Rgb::from_hex(config.studio.floor_color).into(),
            perceptual_roughness: 0.15,
            metallic: 0.9,
            clearcoat: 1.0,
            clearcoat_perceptual_roughness: 0.1,
            reflectance: 1.0,
            ior: 1.5,
            ..default()
        })),
        Transform::from_xyz(0.0, -height / 2.0, 0.0),
        Name::new("StudioFloor"),
        StudioFloor,
    ));

    info!("Studio scene initialized");
}
