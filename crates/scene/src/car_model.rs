//! Car model loading and painting
//!
//! The glTF is loaded asynchronously and polled each frame. Once its scene
//! spawns, every mesh material is captured as a [`PaintSource`] and
//! replaced with the material pipeline's output for the current paint.
//! Repaints always start from the captured sources; ORIGINAL parts get
//! their captured material back untouched.

use bevy::asset::LoadState;
use bevy::camera::primitives::Aabb;
use bevy::ecs::message::Message;
use bevy::gltf::{Gltf, GltfMaterialName};
use bevy::light::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use bevy::scene::{SceneInstance, SceneSpawner};
use livery_config::ViewerConfig;
use livery_ipc::{BevyToUi, MaterialCounts};
use livery_materials::{AuthoredMaterial, Paint, Repaint, RepaintSummary, Rgb};

use crate::OutboundUiMessages;
use crate::commands::dispatch_ui_messages;
use crate::error::SceneError;
use crate::framing::CameraRequest;
use crate::views::{CameraView, ModelBounds};

/// Marker component for the spawned model root
#[derive(Component)]
pub struct CarModelRoot;

/// As-authored material of a car mesh, kept for every later repaint
#[derive(Component, Debug, Clone)]
pub struct PaintSource(pub AuthoredMaterial);

/// Message requesting a repaint of the whole car
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum PaintRequest {
    Color(Rgb),
    Factory,
}

impl From<PaintRequest> for Paint {
    fn from(request: PaintRequest) -> Self {
        match request {
            PaintRequest::Color(color) => Paint::Color(color),
            PaintRequest::Factory => Paint::Factory,
        }
    }
}

/// Where the model is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelPhase {
    NotStarted,
    Loading,
    /// Scene root spawned, meshes still arriving
    Spawning(Entity),
    Ready(Entity),
    /// Terminal; loading is not retried
    Unavailable,
}

/// Resource tracking the car model
#[derive(Resource, Debug)]
pub struct CarModelState {
    pub handle: Option<Handle<Gltf>>,
    pub phase: ModelPhase,
    /// Paint applied to newly captured meshes and by the last repaint
    pub paint: Paint,
    /// Installed materials per recipe for the current paint
    pub summary: RepaintSummary,
}

impl Default for CarModelState {
    fn default() -> Self {
        Self {
            handle: None,
            phase: ModelPhase::NotStarted,
            paint: Paint::Initial(Rgb::WHITE),
            summary: RepaintSummary::default(),
        }
    }
}

impl CarModelState {
    /// Scene root once spawned
    pub fn root(&self) -> Option<Entity> {
        match self.phase {
            ModelPhase::Spawning(root) | ModelPhase::Ready(root) => Some(root),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, ModelPhase::Ready(_))
    }
}

/// Convert a repaint summary for the page
pub fn material_counts(summary: &RepaintSummary) -> MaterialCounts {
    MaterialCounts {
        original: summary.original,
        special: summary.special,
        glass: summary.glass,
        body: summary.body,
    }
}

/// Plugin for loading and painting the car
pub struct CarModelPlugin;

impl Plugin for CarModelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CarModelState>()
            .init_resource::<ViewerConfig>()
            .add_message::<PaintRequest>()
            .add_systems(Startup, start_model_load)
            .add_systems(
                Update,
                (
                    poll_model_load,
                    capture_paint_sources,
                    finish_model_load,
                    apply_paint_requests.after(dispatch_ui_messages),
                )
                    .chain(),
            );
    }
}

/// Kick off the glTF load with the configured palette's initial paint
fn start_model_load(
    asset_server: Res<AssetServer>,
    config: Res<ViewerConfig>,
    mut state: ResMut<CarModelState>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    let path = config.model.path.clone();
    state.handle = Some(asset_server.load(path.clone()));
    state.phase = ModelPhase::Loading;
    state.paint = Paint::Initial(Rgb::from_hex(config.palette.initial_hex()));

    info!("Loading car model from {}", path);
    outbound.send(BevyToUi::ModelLoading { path });
}

/// Poll the asset server; spawn the scene on success
fn poll_model_load(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    config: Res<ViewerConfig>,
    mut state: ResMut<CarModelState>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    if state.phase != ModelPhase::Loading {
        return;
    }
    let Some(handle) = state.handle.clone() else {
        return;
    };

    let reason = match asset_server.load_state(&handle) {
        LoadState::Loaded => {
            let Some(gltf) = gltfs.get(&handle) else {
                return;
            };
            match gltf.default_scene.clone().or_else(|| gltf.scenes.first().cloned()) {
                Some(scene) => {
                    let placement = &config.model;
                    let root = commands
                        .spawn((
                            SceneRoot(scene),
                            Transform {
                                translation: Vec3::from_array(placement.translation),
                                rotation: Quat::from_rotation_y(placement.yaw),
                                scale: Vec3::splat(placement.scale),
                            },
                            Name::new("CarModel"),
                            CarModelRoot,
                        ))
                        .id();
                    state.phase = ModelPhase::Spawning(root);
                    info!("Car model loaded, spawning scene");
                    return;
                }
                None => "asset contains no scenes".to_string(),
            }
        }
        LoadState::Failed(err) => err.to_string(),
        LoadState::NotLoaded | LoadState::Loading => return,
    };

    let err = SceneError::ModelUnavailable {
        path: config.model.path.clone(),
        reason,
    };
    error!("{}", err);
    outbound.send(err.to_message());
    state.phase = ModelPhase::Unavailable;
}

/// Capture and paint every mesh material that appeared under the root
fn capture_paint_sources(
    mut commands: Commands,
    mut state: ResMut<CarModelState>,
    children: Query<&Children>,
    meshes: Query<
        (&MeshMaterial3d<StandardMaterial>, Option<&GltfMaterialName>),
        Without<PaintSource>,
    >,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(root) = state.root() else {
        return;
    };

    let mut repaint = Repaint::resume(state.paint, state.summary);
    for entity in children.iter_descendants(root) {
        let Ok((material, material_name)) = meshes.get(entity) else {
            continue;
        };
        let Some(standard) = materials.get(&material.0) else {
            continue;
        };

        let authored =
            AuthoredMaterial::capture(material_name.map(|name| name.0.clone()), standard);
        let handle = materials.add(repaint.material(&authored));

        let mut mesh = commands.entity(entity);
        mesh.insert((MeshMaterial3d(handle), PaintSource(authored)));
        if repaint.paint().is_initial() {
            mesh.remove::<(NotShadowCaster, NotShadowReceiver)>();
        }
    }
    state.summary = repaint.summary();
}

/// Mark the model ready once the scene instance and all captures are done
#[allow(clippy::too_many_arguments)]
fn finish_model_load(
    mut commands: Commands,
    scene_spawner: Res<SceneSpawner>,
    instances: Query<&SceneInstance>,
    children: Query<&Children>,
    pending: Query<(), (With<MeshMaterial3d<StandardMaterial>>, Without<PaintSource>)>,
    parts: Query<(Option<&Name>, Option<&Aabb>, &GlobalTransform), With<PaintSource>>,
    mut state: ResMut<CarModelState>,
    mut outbound: ResMut<OutboundUiMessages>,
    mut camera_requests: MessageWriter<CameraRequest>,
) {
    let ModelPhase::Spawning(root) = state.phase else {
        return;
    };
    let Ok(instance) = instances.get(root) else {
        return;
    };
    if !scene_spawner.instance_is_ready(**instance) {
        return;
    }

    let mut names = Vec::new();
    let mut bounds: Option<ModelBounds> = None;
    for entity in children.iter_descendants(root) {
        if pending.contains(entity) {
            return;
        }
        let Ok((name, aabb, transform)) = parts.get(entity) else {
            continue;
        };
        // Bounds are computed in PostUpdate; wait for them
        let Some(aabb) = aabb else {
            return;
        };

        let part = ModelBounds::from_aabb(aabb, transform);
        bounds = Some(bounds.map_or(part, |b| b.union(&part)));
        if let Some(name) = name {
            names.push(name.as_str().to_string());
        }
    }
    names.sort();
    names.dedup();

    state.phase = ModelPhase::Ready(root);
    match bounds {
        Some(bounds) => {
            info!(
                "Car model ready: {} parts, size {:?}, center {:?}",
                names.len(),
                bounds.size(),
                bounds.center()
            );
            commands.insert_resource(bounds);
            camera_requests.write(CameraRequest::View(CameraView::ThreeQuarter));
        }
        None => warn!("Car model ready but contains no meshes"),
    }

    debug!("Initial paint: {:?}", state.summary);
    outbound.send(BevyToUi::ModelLoaded {
        parts: names,
        materials: material_counts(&state.summary),
    });
}

/// Repaint every captured mesh from its source material
fn apply_paint_requests(
    mut commands: Commands,
    mut requests: MessageReader<PaintRequest>,
    mut state: ResMut<CarModelState>,
    sources: Query<(Entity, &PaintSource)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    for request in requests.read() {
        let paint = Paint::from(*request);
        state.paint = paint;

        if state.root().is_none() {
            info!("Model not loaded yet, {:?} will apply on load", paint);
            continue;
        }

        let mut repaint = Repaint::new(paint);
        for (entity, source) in sources.iter() {
            let handle = materials.add(repaint.material(&source.0));
            commands.entity(entity).insert(MeshMaterial3d(handle));
        }
        let summary = repaint.finish();
        state.summary = summary;

        info!("Repainted {} materials with {:?}", summary.total(), paint);
        if state.is_ready() {
            outbound.send(BevyToUi::PaintApplied {
                color: paint.color().map(|color| color.to_string()),
                materials: material_counts(&summary),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::color::Alpha;
    use livery_config::ModelConfig;
    use livery_materials::PaintTarget;
    use std::time::Duration;

    #[test]
    fn test_paint_request_maps_to_paint() {
        let red = Rgb::from_hex(0xff0000);
        assert_eq!(Paint::from(PaintRequest::Color(red)), Paint::Color(red));
        assert_eq!(Paint::from(PaintRequest::Factory), Paint::Factory);
    }

    #[test]
    fn test_state_root_by_phase() {
        let mut state = CarModelState::default();
        assert_eq!(state.root(), None);

        let root = World::new().spawn_empty().id();
        state.phase = ModelPhase::Spawning(root);
        assert_eq!(state.root(), Some(root));
        assert!(!state.is_ready());

        state.phase = ModelPhase::Ready(root);
        assert!(state.is_ready());

        state.phase = ModelPhase::Unavailable;
        assert_eq!(state.root(), None);
    }

    #[test]
    fn test_material_counts() {
        let summary = RepaintSummary {
            original: 1,
            special: 2,
            glass: 3,
            body: 4,
        };
        assert_eq!(material_counts(&summary).total(), 10);
    }

    /// App running capture and repaint over hand-spawned meshes
    fn paint_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<CarModelState>()
            .init_resource::<OutboundUiMessages>()
            .add_message::<PaintRequest>()
            .add_systems(
                Update,
                (capture_paint_sources, apply_paint_requests).chain(),
            );
        app
    }

    /// Spawn a mesh with an authored material under `root`
    fn spawn_part(app: &mut App, root: Entity, name: &str, authored: StandardMaterial) -> Entity {
        let handle = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(authored);
        app.world_mut()
            .spawn((
                MeshMaterial3d(handle),
                GltfMaterialName(name.to_string()),
                NotShadowCaster,
                ChildOf(root),
            ))
            .id()
    }

    fn installed(app: &App, entity: Entity) -> StandardMaterial {
        let handle = &app
            .world()
            .get::<MeshMaterial3d<StandardMaterial>>(entity)
            .unwrap()
            .0;
        app.world()
            .resource::<Assets<StandardMaterial>>()
            .get(handle)
            .unwrap()
            .clone()
    }

    fn gray_paint() -> StandardMaterial {
        StandardMaterial {
            base_color: Color::srgb(0.2, 0.2, 0.2),
            ..default()
        }
    }

    fn tire() -> StandardMaterial {
        StandardMaterial {
            clearcoat: 1.0,
            unlit: true,
            ior: 1.33,
            alpha_mode: AlphaMode::Premultiplied,
            ..default()
        }
    }

    fn start_spawning(app: &mut App, paint: Paint) -> Entity {
        let root = app.world_mut().spawn_empty().id();
        let mut state = app.world_mut().resource_mut::<CarModelState>();
        state.phase = ModelPhase::Spawning(root);
        state.paint = paint;
        root
    }

    #[test]
    fn test_capture_installs_initial_paint() {
        let mut app = paint_app();
        let root = start_spawning(&mut app, Paint::Initial(Rgb::WHITE));
        let body = spawn_part(&mut app, root, "CarPaint", gray_paint());

        app.update();

        let source = app.world().get::<PaintSource>(body).unwrap();
        assert_eq!(source.0.name(), Some("CarPaint"));
        assert_eq!(source.0.standard.base_color, gray_paint().base_color);

        let painted = installed(&app, body);
        assert!((painted.base_color.to_srgba().red - 1.2).abs() < 1e-5);
        assert!((painted.clearcoat - 0.5).abs() < 1e-6);
        assert!(app.world().get::<NotShadowCaster>(body).is_none());

        // Captured meshes are not captured again
        app.update();
        let state = app.world().resource::<CarModelState>();
        assert_eq!(state.summary.body, 1);
        assert_eq!(state.summary.total(), 1);
    }

    #[test]
    fn test_factory_after_color_rebuilds_from_source() {
        let mut app = paint_app();
        let root = start_spawning(&mut app, Paint::Initial(Rgb::WHITE));
        let body = spawn_part(&mut app, root, "CarPaint", gray_paint());
        let wheel = spawn_part(&mut app, root, "mesh3mtl", tire());
        app.update();
        app.world_mut().resource_mut::<CarModelState>().phase = ModelPhase::Ready(root);

        app.world_mut()
            .write_message(PaintRequest::Color(Rgb::new(1.0, 0.0, 0.0)));
        app.update();
        let red = installed(&app, body);
        assert!((red.base_color.to_srgba().red - 1.2).abs() < 1e-5);
        assert!(red.base_color.to_srgba().green.abs() < 1e-6);

        app.world_mut().write_message(PaintRequest::Factory);
        app.update();

        // Body comes back from the captured gray, not from the red paint
        let factory = installed(&app, body);
        assert!((factory.base_color.to_srgba().red - 0.24).abs() < 1e-5);
        assert!((factory.base_color.to_srgba().green - 0.24).abs() < 1e-5);
        let source = app.world().get::<PaintSource>(body).unwrap();
        let (_, fresh) = source.0.paint(Paint::Factory);
        assert_eq!(factory.base_color, fresh.base_color);
        assert_eq!(source.0.standard.base_color, gray_paint().base_color);

        // ORIGINAL parts keep their authored material through every repaint
        let kept = installed(&app, wheel);
        assert_eq!(kept.clearcoat, 1.0);
        assert!(kept.unlit);
        assert_eq!(kept.ior, 1.33);
        assert_eq!(kept.alpha_mode, AlphaMode::Premultiplied);
        assert!((kept.base_color.alpha() - 1.0).abs() < 1e-6);

        let outbound = app.world().resource::<OutboundUiMessages>();
        assert_eq!(
            outbound.messages.last(),
            Some(&BevyToUi::PaintApplied {
                color: None,
                materials: MaterialCounts {
                    original: 1,
                    special: 0,
                    glass: 0,
                    body: 1,
                },
            })
        );
    }

    #[test]
    fn test_paint_before_load_only_updates_state() {
        let mut app = paint_app();
        let red = Rgb::new(1.0, 0.0, 0.0);

        app.world_mut().write_message(PaintRequest::Color(red));
        app.update();

        let state = app.world().resource::<CarModelState>();
        assert_eq!(state.paint, Paint::Color(red));
        assert_eq!(state.phase, ModelPhase::NotStarted);
        assert_eq!(state.summary.total(), 0);
        assert!(app.world().resource::<OutboundUiMessages>().messages.is_empty());
    }

    #[test]
    fn test_failed_load_is_terminal() {
        let path = "missing/livery_test_car.gltf".to_string();
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Gltf>()
            .init_resource::<CarModelState>()
            .init_resource::<OutboundUiMessages>()
            .insert_resource(ViewerConfig {
                model: ModelConfig {
                    path: path.clone(),
                    ..default()
                },
                ..default()
            })
            .add_systems(Startup, start_model_load)
            .add_systems(Update, poll_model_load);

        for _ in 0..400 {
            app.update();
            if app.world().resource::<CarModelState>().phase == ModelPhase::Unavailable {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }

        let state = app.world().resource::<CarModelState>();
        assert_eq!(state.phase, ModelPhase::Unavailable);

        let outbound = &app.world().resource::<OutboundUiMessages>().messages;
        assert_eq!(outbound.first(), Some(&BevyToUi::ModelLoading { path: path.clone() }));
        match outbound.last() {
            Some(BevyToUi::ModelUnavailable { path: reported, .. }) => assert_eq!(reported, &path),
            other => panic!("expected ModelUnavailable, got {other:?}"),
        }

        // Nothing retries once unavailable
        app.update();
        assert_eq!(app.world().resource::<OutboundUiMessages>().messages.len(), 2);
    }
}
