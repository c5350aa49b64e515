//! Core application setup and state management.
//!
//! Handles application lifecycle, runtime configuration, window configuration
//! and state transitions for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the model loading, page tracking and motion
/// systems, plus platform-specific window setup.
pub mod app_setup;

/// Application state machine: loading, ready, or failed.
pub mod app_state;

/// Runtime configuration built from the `constants` crate defaults.
pub mod config;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
