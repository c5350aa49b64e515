use bevy::prelude::*;

/// Lifecycle of the viewer. The model and its animation controller are only
/// observable in `Ready`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Ready,
    /// The model could not be loaded; the empty scene keeps rendering.
    LoadFailed,
}

pub fn log_ready_transition() {
    info!("→ Model and animation bound, entering Ready state");
}

pub fn log_failed_transition() {
    warn!("→ Model unavailable, rendering empty scene");
}
