//! Page-side inputs: which sections exist, where they sit relative to the
//! viewport, and when that changes.
//!
//! Scroll notifications become `SectionSyncRequest` events. Each request is
//! answered by a measurement of the page, published as `SectionsMeasured`:
//!
//! ```text
//! scroll / model ready ──> SectionSyncRequest ──> measure ──> SectionsMeasured ──> motion
//! ```
//!
//! On WASM the page is the real DOM (`dom_listener`). Native builds have no
//! page, so a `virtual_page` stacks the table's sections and scrolls them with
//! the mouse wheel.

use bevy::prelude::*;

/// Section geometry and current-section selection.
pub mod sections;

/// Browser scroll listener and DOM measurement.
#[cfg(target_arch = "wasm32")]
pub mod dom_listener;

/// Wheel-driven stand-in page for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub mod virtual_page;

use sections::{SectionSyncRequest, SectionsMeasured};

/// Systems that turn sync requests into page measurements.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageMeasurement;

pub struct PagePlugin;

impl Plugin for PagePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SectionSyncRequest>()
            .add_event::<SectionsMeasured>();

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, dom_listener::setup_scroll_listener)
            .add_systems(
                Update,
                (
                    dom_listener::drain_scroll_notifications,
                    dom_listener::measure_dom_sections,
                )
                    .chain()
                    .in_set(PageMeasurement),
            );

        #[cfg(not(target_arch = "wasm32"))]
        app.init_resource::<virtual_page::VirtualPage>().add_systems(
            Update,
            (
                virtual_page::scroll_virtual_page,
                virtual_page::measure_virtual_page,
            )
                .chain()
                .in_set(PageMeasurement),
        );
    }
}
