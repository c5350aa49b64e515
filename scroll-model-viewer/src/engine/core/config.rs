use bevy::prelude::*;
use constants::animation::{EASE_DURATION, FRAME_DELTA, SECTION_TRIGGER_FRACTION};
use constants::path::{CANVAS_SELECTOR, MODEL_PATH, SECTION_SELECTOR, SECTION_TABLE_PATH};
use constants::render_settings::MAX_PIXEL_RATIO;

/// Runtime settings shared by the loading, page and motion systems.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub model_path: String,
    pub canvas_selector: String,
    pub section_selector: String,
    /// JSON section table replacing the built-in one once loaded. `None` keeps
    /// the built-in table.
    pub section_table_path: Option<String>,
    /// Fixed animation step per frame. `None` plays the clip on wall-clock time.
    pub frame_delta: Option<f32>,
    pub ease_duration: f32,
    pub trigger_fraction: f32,
    pub max_pixel_ratio: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model_path: MODEL_PATH.to_string(),
            canvas_selector: CANVAS_SELECTOR.to_string(),
            section_selector: SECTION_SELECTOR.to_string(),
            section_table_path: Some(SECTION_TABLE_PATH.to_string()),
            frame_delta: Some(FRAME_DELTA),
            ease_duration: EASE_DURATION,
            trigger_fraction: SECTION_TRIGGER_FRACTION,
            max_pixel_ratio: MAX_PIXEL_RATIO,
        }
    }
}
