//! Orbit camera controller
//!
//! - Left drag orbits around the target
//! - Right drag pans the target in the view plane
//! - Scroll wheel dollies in and out
//!
//! Preset views and part focus write the orbit state directly; the camera
//! transform follows on the same frame.

use bevy::input::mouse::{MouseButton, MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

/// Pitch limit just short of straight up/down, so `looking_at` keeps a
/// usable up vector
const MAX_PITCH: f32 = 1.5;

/// Share of the current distance covered by one scroll line
const ZOOM_STEP: f32 = 0.1;

/// Pixel scroll delta counted as one line; browsers report ~100 per notch
const PIXELS_PER_LINE: f32 = 100.0;

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Spherical camera state around a target point
#[derive(Component, Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    /// Radians around Y, 0 looks from +Z
    pub yaw: f32,
    /// Radians above the horizontal
    pub pitch: f32,
    /// Radians per pixel of drag
    pub orbit_sensitivity: f32,
    /// Target movement per pixel, multiplied by the distance
    pub pan_sensitivity: f32,
    pub zoom_sensitivity: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Front-right of a car sized model until the real bounds are known
        Self {
            target: Vec3::ZERO,
            distance: 10.0,
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: 0.1,
            orbit_sensitivity: 0.005,
            pan_sensitivity: 0.002,
            zoom_sensitivity: 1.0,
            min_distance: 0.5,
            max_distance: 500.0,
        }
    }
}

impl OrbitCamera {
    /// World position of the camera
    pub fn calculate_position(&self) -> Vec3 {
        let (yaw_sin, yaw_cos) = self.yaw.sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(pitch_cos * yaw_sin, pitch_sin, pitch_cos * yaw_cos)
    }

    /// Orbit `target` from `position`
    ///
    /// Positions straight above or below the target are pulled back to the
    /// pitch limit, so the resulting camera sits slightly in front.
    pub fn look_from(&mut self, position: Vec3, target: Vec3) {
        let offset = position - target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }

        self.target = target;
        self.distance = distance.clamp(self.min_distance, self.max_distance);
        self.pitch = (offset.y / distance).asin().clamp(-MAX_PITCH, MAX_PITCH);
        self.yaw = if offset.x != 0.0 || offset.z != 0.0 {
            offset.x.atan2(offset.z)
        } else {
            0.0
        };
    }

    /// Rotate by a mouse drag in pixels
    pub fn orbit(&mut self, drag: Vec2) {
        self.yaw -= drag.x * self.orbit_sensitivity;
        self.pitch = (self.pitch - drag.y * self.orbit_sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Slide the target along the view plane of a camera with `rotation`
    pub fn pan(&mut self, drag: Vec2, rotation: Quat) {
        let scale = self.pan_sensitivity * self.distance;
        // Dragging moves the scene, so the target goes the other way
        self.target += (rotation * Vec3::NEG_X * drag.x + rotation * Vec3::Y * drag.y) * scale;
    }

    /// Dolly by scroll lines, positive moves closer
    pub fn zoom(&mut self, lines: f32) {
        let step = lines * self.zoom_sensitivity * self.distance * ZOOM_STEP;
        self.distance = (self.distance - step).clamp(self.min_distance, self.max_distance);
    }

    /// Reset to default view
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Plugin for orbit camera controls
pub struct CameraControllerPlugin;

impl Plugin for CameraControllerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            ((drag_camera, zoom_camera), sync_camera_transform).chain(),
        );
    }
}

/// Orbit on left drag, pan on right drag; left wins when both are held
fn drag_camera(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut motion: MessageReader<MouseMotion>,
    mut cameras: Query<(&mut OrbitCamera, &Transform), With<MainCamera>>,
) {
    let drag: Vec2 = motion.read().map(|event| event.delta).sum();
    if drag == Vec2::ZERO {
        return;
    }

    let orbiting = mouse_button.pressed(MouseButton::Left);
    let panning = mouse_button.pressed(MouseButton::Right);
    for (mut orbit, transform) in cameras.iter_mut() {
        if orbiting {
            orbit.orbit(drag);
        } else if panning {
            orbit.pan(drag, transform.rotation);
        }
    }
}

fn zoom_camera(
    mut wheel: MessageReader<MouseWheel>,
    mut cameras: Query<&mut OrbitCamera, With<MainCamera>>,
) {
    let lines: f32 = wheel.read().map(|event| scroll_lines(event.unit, event.y)).sum();
    if lines == 0.0 {
        return;
    }

    for mut orbit in cameras.iter_mut() {
        orbit.zoom(lines);
    }
}

/// Scroll delta in lines, whatever unit the platform reports
fn scroll_lines(unit: MouseScrollUnit, delta: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => delta,
        MouseScrollUnit::Pixel => delta / PIXELS_PER_LINE,
    }
}

/// Place the camera from its orbit state
fn sync_camera_transform(mut cameras: Query<(&OrbitCamera, &mut Transform), With<MainCamera>>) {
    for (orbit, mut transform) in cameras.iter_mut() {
        *transform =
            Transform::from_translation(orbit.calculate_position()).looking_at(orbit.target, Vec3::Y);
    }
}
