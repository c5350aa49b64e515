use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;
use constants::render_settings::{CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};

use crate::engine::scene::viewport::ViewportSize;

/// The single camera the page is rendered through.
#[derive(Component)]
pub struct SceneCamera;

pub fn scene_projection(viewport: &ViewportSize) -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(),
        aspect_ratio: viewport.aspect_ratio(),
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
    })
}

pub fn spawn_scene_camera(commands: &mut Commands, viewport: &ViewportSize) {
    commands.spawn((
        SceneCamera,
        Camera3d::default(),
        Camera {
            // Transparent so the page behind the canvas stays visible.
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        scene_projection(viewport),
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
