use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, window};

use crate::engine::core::config::ViewerConfig;
use crate::engine::scene::viewport::ViewportSize;
use crate::page::sections::{SectionBounds, SectionSnapshot, SectionSyncRequest, SectionsMeasured};

#[derive(Debug, Error)]
pub enum PageError {
    #[error("window object not available")]
    NoWindow,
    #[error("document not available")]
    NoDocument,
    #[error("section selector rejected: {0}")]
    Selector(String),
}

/// Scroll notifications received from the browser since the last frame.
#[derive(Resource)]
pub struct ScrollQueue(Arc<Mutex<usize>>);

pub fn setup_scroll_listener(mut commands: Commands) {
    let pending = Arc::new(Mutex::new(0usize));
    let pending_clone = pending.clone();

    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Ok(mut count) = pending_clone.lock() {
            *count += 1;
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    match window() {
        Some(window) => {
            if let Err(e) =
                window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            {
                error!("Failed to register scroll listener: {:?}", e);
            }
        }
        None => error!("Window object not available"),
    }

    // Listener lives for the page lifetime; JS owns the closure from here.
    closure.forget();
    commands.insert_resource(ScrollQueue(pending));
}

/// Collapse the frame's scroll notifications into one sync request.
pub fn drain_scroll_notifications(
    queue: Option<Res<ScrollQueue>>,
    mut requests: EventWriter<SectionSyncRequest>,
) {
    let Some(queue) = queue else {
        return;
    };

    let pending = queue
        .0
        .lock()
        .map(|mut count| std::mem::take(&mut *count))
        .unwrap_or(0);

    if pending > 0 {
        requests.write(SectionSyncRequest);
    }
}

pub fn measure_dom_sections(
    mut requests: EventReader<SectionSyncRequest>,
    config: Res<ViewerConfig>,
    viewport: Res<ViewportSize>,
    mut measured: EventWriter<SectionsMeasured>,
) {
    if requests.read().count() == 0 {
        return;
    }

    match read_section_bounds(&config.section_selector, viewport.height) {
        Ok(snapshot) => {
            measured.write(SectionsMeasured(snapshot));
        }
        Err(e) => warn!("Skipping section measurement: {}", e),
    }
}

/// Read every matching element's bounding-box top, in document order.
fn read_section_bounds(selector: &str, fallback_height: f32) -> Result<SectionSnapshot, PageError> {
    let window = window().ok_or(PageError::NoWindow)?;
    let document = window.document().ok_or(PageError::NoDocument)?;
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| PageError::Selector(format!("{:?}", e)))?;

    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .map_or(fallback_height, |height| height as f32);

    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };

        sections.push(SectionBounds {
            id: element.id(),
            top: element.get_bounding_client_rect().top() as f32,
        });
    }

    Ok(SectionSnapshot {
        sections,
        viewport_height,
    })
}
