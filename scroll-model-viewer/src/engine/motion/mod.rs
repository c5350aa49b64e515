/// Eased position/rotation transitions on the model.
pub mod tween;

/// Section selection and the tweens it starts.
pub mod section_sync;
