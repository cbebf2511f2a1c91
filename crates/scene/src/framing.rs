//! Camera framing: preset views, fit-to-model and part focus
//!
//! Moves snap; there is no tweening. Requests that arrive before the model
//! bounds are known are rejected with [`SceneError::ModelNotReady`], except
//! a reset, which falls back to the default orbit.

use bevy::camera::primitives::Aabb;
use bevy::ecs::message::Message;
use bevy::prelude::*;
use livery_config::ViewerConfig;
use livery_ipc::BevyToUi;

use crate::OutboundUiMessages;
use crate::camera::{MainCamera, OrbitCamera};
use crate::car_model::PaintSource;
use crate::commands::dispatch_ui_messages;
use crate::error::SceneError;
use crate::views::{CameraView, ModelBounds};

/// Where the fit-to-model framing places the camera
const FIT_POSITION: Vec3 = Vec3::new(0.0, 10.0, 0.0);

/// Message requesting a camera move
#[derive(Message, Debug, Clone, PartialEq)]
pub enum CameraRequest {
    View(CameraView),
    /// Frame the parts whose mesh or material name contains this text
    FocusPart(String),
    FitToModel,
    /// Back to the 3/4 view with the configured far plane
    Reset,
}

/// Plugin for camera framing requests
pub struct FramingPlugin;

impl Plugin for FramingPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CameraRequest>()
            .add_systems(Update, handle_camera_requests.after(dispatch_ui_messages));
    }
}

/// True when `query` appears in the part or material name, ignoring case
pub fn part_matches(query: &str, part_name: Option<&str>, material_name: Option<&str>) -> bool {
    let query = query.to_lowercase();
    [part_name, material_name]
        .into_iter()
        .flatten()
        .any(|name| name.to_lowercase().contains(&query))
}

fn handle_camera_requests(
    mut requests: MessageReader<CameraRequest>,
    bounds: Option<Res<ModelBounds>>,
    config: Res<ViewerConfig>,
    parts: Query<(Option<&Name>, &PaintSource, &Aabb, &GlobalTransform)>,
    mut cameras: Query<(&mut OrbitCamera, &mut Projection), With<MainCamera>>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    for request in requests.read() {
        let Some(bounds) = bounds.as_deref() else {
            if *request == CameraRequest::Reset {
                for (mut orbit, _) in cameras.iter_mut() {
                    orbit.reset();
                }
                set_far(&mut cameras, config.camera.far);
                continue;
            }
            let err = SceneError::ModelNotReady;
            warn!("Ignoring {:?}: {}", request, err);
            outbound.send(err.to_message());
            continue;
        };

        let framed = match request {
            CameraRequest::View(view) => {
                look_from(&mut cameras, bounds.camera_position(*view), bounds.center());
                Ok(view.to_string())
            }
            CameraRequest::FitToModel => {
                look_from(&mut cameras, FIT_POSITION, bounds.center());
                set_far(&mut cameras, config.camera.fit_far);
                Ok("fit".to_string())
            }
            CameraRequest::Reset => {
                let view = CameraView::ThreeQuarter;
                look_from(&mut cameras, bounds.camera_position(view), bounds.center());
                set_far(&mut cameras, config.camera.far);
                Ok(view.to_string())
            }
            CameraRequest::FocusPart(name) => focus_part(&mut cameras, &parts, name),
        };

        match framed {
            Ok(view) => {
                info!("Camera view: {}", view);
                outbound.send(BevyToUi::CameraViewChanged { view });
            }
            Err(err) => {
                warn!("{}", err);
                outbound.send(err.to_message());
            }
        }
    }
}

fn look_from(
    cameras: &mut Query<(&mut OrbitCamera, &mut Projection), With<MainCamera>>,
    position: Vec3,
    target: Vec3,
) {
    for (mut orbit, _) in cameras.iter_mut() {
        orbit.look_from(position, target);
    }
}

fn set_far(cameras: &mut Query<(&mut OrbitCamera, &mut Projection), With<MainCamera>>, far: f32) {
    for (_, mut projection) in cameras.iter_mut() {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.far = far;
        }
    }
}

/// Orbit the union of matching parts at twice its largest dimension
fn focus_part(
    cameras: &mut Query<(&mut OrbitCamera, &mut Projection), With<MainCamera>>,
    parts: &Query<(Option<&Name>, &PaintSource, &Aabb, &GlobalTransform)>,
    query: &str,
) -> Result<String, SceneError> {
    let focus = parts
        .iter()
        .filter(|(name, source, _, _)| {
            part_matches(query, name.map(|n| n.as_str()), source.0.name())
        })
        .map(|(_, _, aabb, transform)| ModelBounds::from_aabb(aabb, transform))
        .reduce(|a, b| a.union(&b))
        .ok_or_else(|| SceneError::UnknownPart(query.to_string()))?;

    for (mut orbit, _) in cameras.iter_mut() {
        orbit.target = focus.center();
        orbit.distance = focus
            .view_distance()
            .clamp(orbit.min_distance, orbit.max_distance);
    }

    Ok(format!("part:{query}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_matches_either_name() {
        assert!(part_matches("wheel", Some("FrontWheel_L"), None));
        assert!(part_matches("GLASS", None, Some("windshield_glass")));
        assert!(part_matches("tail", Some("body"), Some("Tail_Lamp")));
        assert!(!part_matches("mirror", Some("door"), Some("CarPaint")));
        assert!(!part_matches("door", None, None));
    }
}
