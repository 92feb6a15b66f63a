use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::camera::{
    CAMERA_START_POSITION, CAMERA_TARGET, MAX_AZIMUTH, MAX_DISTANCE, MAX_POLAR, MIN_AZIMUTH,
    MIN_DISTANCE, MIN_POLAR, ZOOM_STEP,
};
use std::f32::consts::TAU;

/// Window the orbit camera may move within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    pub min_azimuth: f32,
    pub max_azimuth: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            min_azimuth: MIN_AZIMUTH,
            max_azimuth: MAX_AZIMUTH,
            min_polar: MIN_POLAR,
            max_polar: MAX_POLAR,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
        }
    }
}

/// Spherical camera rig around a fixed target.
///
/// Azimuth is measured around +Y starting from +Z, polar from straight up.
#[derive(Resource, Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub azimuth: f32,
    pub polar: f32,
    pub limits: OrbitLimits,
    pub rotate_speed: f32,
}

impl OrbitCamera {
    pub fn looking_from(eye: Vec3, target: Vec3, limits: OrbitLimits) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(f32::EPSILON);
        let mut camera = Self {
            target,
            distance,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / distance).clamp(-1.0, 1.0).acos(),
            limits,
            rotate_speed: 1.0,
        };
        camera.rotate(0.0, 0.0);
        camera.dolly(1.0);
        camera
    }

    pub fn rotate(&mut self, delta_azimuth: f32, delta_polar: f32) {
        self.azimuth = (self.azimuth + delta_azimuth)
            .clamp(self.limits.min_azimuth, self.limits.max_azimuth);
        self.polar =
            (self.polar + delta_polar).clamp(self.limits.min_polar, self.limits.max_polar);
    }

    /// Pointer drag in pixels. A drag across the full viewport height turns a full circle.
    pub fn drag(&mut self, delta: Vec2, viewport_height: f32) {
        let per_pixel = TAU * self.rotate_speed / viewport_height.max(1.0);
        self.rotate(-delta.x * per_pixel, -delta.y * per_pixel);
    }

    pub fn dolly(&mut self, scale: f32) {
        self.distance =
            (self.distance * scale).clamp(self.limits.min_distance, self.limits.max_distance);
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        self.target
            + self.distance * Vec3::new(sin_polar * sin_azimuth, cos_polar, sin_polar * cos_azimuth)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(CAMERA_START_POSITION, CAMERA_TARGET, OrbitLimits::default())
    }
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    interactions: Query<&Interaction>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Presses on control buttons must not orbit the room.
    let over_ui = interactions.iter().any(|i| *i != Interaction::None);

    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO && !over_ui {
        let height = windows
            .single()
            .map(|window| window.height())
            .unwrap_or(720.0);
        orbit.drag(mouse_delta, height);
    }

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        orbit.dolly(ZOOM_STEP.powf(scroll_accum));
    }

    if let Ok(mut transform) = camera_query.single_mut() {
        *transform = orbit.transform();
    }
}
