/// Scene camera with the page's perspective settings.
pub mod camera;

/// Ambient and overhead directional lighting.
pub mod lighting;

/// Viewport size tracking and resize handling.
pub mod viewport;
