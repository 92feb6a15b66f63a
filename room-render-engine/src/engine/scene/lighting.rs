use bevy::prelude::*;
use constants::render_settings::{
    AMBIENT_BRIGHTNESS, AMBIENT_COLOUR, BACKGROUND_COLOUR, SUN_ILLUMINANCE, SUN_POSITION,
};

pub fn background_colour() -> ClearColor {
    let [r, g, b] = BACKGROUND_COLOUR;
    ClearColor(Color::srgb_u8(r, g, b))
}

pub fn ambient_light() -> AmbientLight {
    let [r, g, b] = AMBIENT_COLOUR;
    AmbientLight {
        color: Color::srgb_u8(r, g, b),
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    }
}

/// Shadow casting sun aimed at the room.
pub fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
