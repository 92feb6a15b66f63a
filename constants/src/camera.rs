use bevy::math::Vec3;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8};

/// Initial eye position of the orbit camera
pub const CAMERA_START_POSITION: Vec3 = Vec3::new(0.0, 25.0, 75.0);

/// Point the orbit camera circles around
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;

/// Vertical field of view in degrees
pub const CAMERA_FOV_DEGREES: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Horizontal orbit window, measured from the +Z axis (±22.5°)
pub const MIN_AZIMUTH: f32 = -FRAC_PI_8;
pub const MAX_AZIMUTH: f32 = FRAC_PI_8;

/// Vertical orbit window, measured from straight up. Never below the horizon.
pub const MIN_POLAR: f32 = FRAC_PI_4;
pub const MAX_POLAR: f32 = FRAC_PI_2;

/// Dolly distance bounds
pub const MIN_DISTANCE: f32 = 10.0;
pub const MAX_DISTANCE: f32 = 250.0;

/// Scale applied per wheel line when dollying
pub const ZOOM_STEP: f32 = 0.95;
