/// Nominal animation step applied once per rendered frame (seconds).
/// Independent of real frame time.
pub const FRAME_DELTA: f32 = 0.02;

/// Duration of a section-to-section transition (seconds).
pub const EASE_DURATION: f32 = 3.0;

/// A section becomes current once its top edge passes this fraction of the viewport height.
pub const SECTION_TRIGGER_FRACTION: f32 = 1.0 / 3.0;

/// Pixels scrolled per wheel line on native builds.
pub const WHEEL_LINE_HEIGHT: f32 = 40.0;
