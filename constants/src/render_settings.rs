/// Vertical field of view of the scene camera, in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 10.0;

pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Camera sits on +Z looking down -Z at the origin.
pub const CAMERA_DISTANCE: f32 = 13.0;

/// Ambient brightness (cd/m^2) tuned for the textured model.
pub const AMBIENT_BRIGHTNESS: f32 = 1500.0;

/// Overhead directional light (lux).
pub const DIRECTIONAL_ILLUMINANCE: f32 = 5000.0;

/// Upper bound for the device pixel ratio used to size the render surface.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Logical surface size before the first resize event arrives.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;
