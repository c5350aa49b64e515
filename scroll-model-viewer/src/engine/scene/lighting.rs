use bevy::prelude::*;
use constants::render_settings::{AMBIENT_BRIGHTNESS, DIRECTIONAL_ILLUMINANCE};

pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    // Straight down onto the model.
    commands.spawn((
        DirectionalLight {
            color: Color::WHITE,
            illuminance: DIRECTIONAL_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 1.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));
}
