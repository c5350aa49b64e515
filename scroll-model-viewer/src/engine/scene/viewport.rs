use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use constants::render_settings::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};

use crate::engine::core::config::ViewerConfig;
use crate::engine::scene::camera::SceneCamera;

/// Logical size of the render surface and the pixel ratio it is drawn at.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio: 1.0,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Device pixel ratio capped at `max`. Unusable ratios fall back to 1.
pub fn clamp_pixel_ratio(device_ratio: f32, max: f32) -> f32 {
    if device_ratio.is_finite() && device_ratio > 0.0 {
        device_ratio.min(max)
    } else {
        1.0
    }
}

fn apply_pixel_ratio(window: &mut Window, viewport: &mut ViewportSize, max_pixel_ratio: f32) {
    let pixel_ratio = clamp_pixel_ratio(window.resolution.base_scale_factor(), max_pixel_ratio);
    viewport.pixel_ratio = pixel_ratio;
    if window.resolution.scale_factor_override() != Some(pixel_ratio) {
        window.resolution.set_scale_factor_override(Some(pixel_ratio));
    }
}

/// Cap the primary window's pixel ratio before any resize has been seen.
pub fn cap_initial_pixel_ratio(
    mut viewport: ResMut<ViewportSize>,
    config: Res<ViewerConfig>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    apply_pixel_ratio(&mut window, &mut viewport, config.max_pixel_ratio);
}

/// Keep viewport state, camera aspect, surface size and pixel ratio in step
/// with the primary window. Every resize event is applied, in order.
pub fn handle_viewport_resize(
    mut resized: EventReader<WindowResized>,
    mut viewport: ResMut<ViewportSize>,
    config: Res<ViewerConfig>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut cameras: Query<&mut Projection, With<SceneCamera>>,
) {
    for event in resized.read() {
        let Ok(mut window) = windows.get_mut(event.window) else {
            continue;
        };

        viewport.resize(event.width, event.height);

        for mut projection in &mut cameras {
            if let Projection::Perspective(perspective) = &mut *projection {
                perspective.aspect_ratio = viewport.aspect_ratio();
            }
        }

        // Scale factor first, so the logical size below is not rescaled by it.
        apply_pixel_ratio(&mut window, &mut viewport, config.max_pixel_ratio);

        if window.resolution.width() != event.width || window.resolution.height() != event.height
        {
            window.resolution.set(event.width, event.height);
        }
    }
}
