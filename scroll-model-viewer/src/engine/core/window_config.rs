use crate::engine::core::config::ViewerConfig;
use bevy::prelude::*;
use bevy::window::PresentMode;

pub fn create_window_config(config: &ViewerConfig) -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some(config.canvas_selector.clone()),
            fit_canvas_to_parent: true,
            // Page scrolling must keep working over the canvas.
            prevent_default_event_handling: false,
            transparent: true,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = config;
        Window {
            title: "Scroll Model Viewer".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
