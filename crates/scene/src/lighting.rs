//! Studio lighting: an overhead light panel over the car
//!
//! Bevy has no rectangular area light, so the panel is a glowing
//! translucent quad for reflections backed by a downward directional light
//! that does the actual shading, plus a dim ambient fill.

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;
use livery_config::ViewerConfig;

/// Illuminance (lux) per unit of configured panel intensity
const LUX_PER_PANEL_INTENSITY: f32 = 2_000.0;

/// Ambient fill so the underside of the car is not pure black
const AMBIENT_BRIGHTNESS: f32 = 150.0;

/// Marker component for the glowing panel quad
#[derive(Component)]
pub struct LightPanel;

/// Marker component for the panel's directional light
#[derive(Component)]
pub struct PanelLight;

/// Plugin for the studio lighting rig
pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewerConfig>()
            .add_systems(Startup, setup_lighting);
    }
}

/// Spawn the light panel, its directional light and the ambient fill
fn setup_lighting(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<ViewerConfig>,
) {
    let studio = &config.studio;
    let panel_position = Vec3::new(0.0, studio.panel_height, 0.0);

    // Long side of the panel runs along Z, the car's length before placement
    commands.spawn((
        Mesh3d(meshes.add(
            Plane3d::default()
                .mesh()
                .size(studio.panel_depth, studio.panel_width),
        )),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 1.0, 1.0, studio.panel_opacity),
            emissive: LinearRgba::WHITE,
            alpha_mode: AlphaMode::Blend,
            double_sided: true,
            cull_mode: None,
            unlit: true,
            ..default()
        })),
        Transform::from_translation(panel_position),
        Name::new("LightPanel"),
        LightPanel,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: studio.panel_intensity * LUX_PER_PANEL_INTENSITY,
            color: Color::WHITE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(panel_position).looking_at(Vec3::ZERO, Vec3::Z),
        PanelLight,
    ));

    // Global ambient light is a resource, not an entity
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    info!(
        "Studio lighting initialized: {}x{} panel at y={}",
        studio.panel_width, studio.panel_depth, studio.panel_height
    );
}
