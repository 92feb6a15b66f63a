use bevy::math::Vec3;

/// Scene clear colour (#F196E5)
pub const BACKGROUND_COLOUR: [u8; 3] = [0xF1, 0x96, 0xE5];

/// Ambient fill light (#404040)
pub const AMBIENT_COLOUR: [u8; 3] = [0x40, 0x40, 0x40];
pub const AMBIENT_BRIGHTNESS: f32 = 500.0;

pub const SUN_POSITION: Vec3 = Vec3::new(32.0, 15.0, -20.0);
pub const SUN_ILLUMINANCE: f32 = 8_000.0;

/// Room model placement
pub const ROOM_SCALE: f32 = 10.0;
pub const ROOM_TRANSLATION: Vec3 = Vec3::new(0.0, -10.0, 0.0);
pub const ROOM_YAW: f32 = -std::f32::consts::FRAC_PI_4;

pub const ENVIRONMENT_INTENSITY: f32 = 900.0;
