use bevy::prelude::*;

/// Top edge of one section element relative to the viewport, in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f32,
}

/// All section elements in document order, plus the viewport height they were
/// measured against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionSnapshot {
    pub sections: Vec<SectionBounds>,
    pub viewport_height: f32,
}

/// Asks the page to be measured: fired on scroll and once the model is ready.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SectionSyncRequest;

/// Page measurement answering a [`SectionSyncRequest`].
#[derive(Event, Debug, Clone)]
pub struct SectionsMeasured(pub SectionSnapshot);

/// Id of the furthest-down section whose top has reached
/// `viewport_height * trigger_fraction`, or `None` when no section has.
pub fn select_current_section(snapshot: &SectionSnapshot, trigger_fraction: f32) -> Option<&str> {
    let threshold = snapshot.viewport_height * trigger_fraction;
    snapshot
        .sections
        .iter()
        .rev()
        .find(|section| section.top <= threshold)
        .map(|section| section.id.as_str())
}
