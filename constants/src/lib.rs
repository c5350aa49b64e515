pub mod animation;
pub mod path;
pub mod render_settings;
pub mod section;
