use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::animation::WHEEL_LINE_HEIGHT;

use crate::engine::assets::section_table::SectionTable;
use crate::engine::scene::viewport::ViewportSize;
use crate::page::sections::{SectionBounds, SectionSnapshot, SectionSyncRequest, SectionsMeasured};

/// Stand-in page for native builds: one block per table entry, stacked in
/// table order, each `section_height` viewports tall.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct VirtualPage {
    pub section_height: f32,
    scroll_offset: f32,
}

impl Default for VirtualPage {
    fn default() -> Self {
        Self {
            section_height: 1.0,
            scroll_offset: 0.0,
        }
    }
}

impl VirtualPage {
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    fn max_offset(&self, section_count: usize, viewport_height: f32) -> f32 {
        let page_height = section_count as f32 * self.section_height * viewport_height;
        (page_height - viewport_height).max(0.0)
    }

    /// Scroll by `delta` pixels, clamped to the page. Returns whether the offset moved.
    pub fn scroll_by(&mut self, delta: f32, section_count: usize, viewport_height: f32) -> bool {
        let max_offset = self.max_offset(section_count, viewport_height);
        let next = (self.scroll_offset + delta).clamp(0.0, max_offset);
        let moved = next != self.scroll_offset;
        self.scroll_offset = next;
        moved
    }

    pub fn snapshot<'a>(
        &self,
        ids: impl Iterator<Item = &'a str>,
        viewport_height: f32,
    ) -> SectionSnapshot {
        let block = self.section_height * viewport_height;
        let sections = ids
            .enumerate()
            .map(|(index, id)| SectionBounds {
                id: id.to_string(),
                top: index as f32 * block - self.scroll_offset,
            })
            .collect();

        SectionSnapshot {
            sections,
            viewport_height,
        }
    }
}

pub fn scroll_virtual_page(
    mut wheel_events: EventReader<MouseWheel>,
    mut page: ResMut<VirtualPage>,
    viewport: Res<ViewportSize>,
    table: Res<SectionTable>,
    mut requests: EventWriter<SectionSyncRequest>,
) {
    let mut delta = 0.0;
    for event in wheel_events.read() {
        // Positive wheel y scrolls towards the top of the page.
        delta -= match event.unit {
            MouseScrollUnit::Line => event.y * WHEEL_LINE_HEIGHT,
            MouseScrollUnit::Pixel => event.y,
        };
    }

    if delta == 0.0 || table.is_empty() {
        return;
    }

    if page.scroll_by(delta, table.len(), viewport.height) {
        debug!("Virtual page scrolled to {}px", page.scroll_offset());
        requests.write(SectionSyncRequest);
    }
}

pub fn measure_virtual_page(
    mut requests: EventReader<SectionSyncRequest>,
    page: Res<VirtualPage>,
    viewport: Res<ViewportSize>,
    table: Res<SectionTable>,
    mut measured: EventWriter<SectionsMeasured>,
) {
    if requests.read().count() == 0 {
        return;
    }

    measured.write(SectionsMeasured(page.snapshot(table.ids(), viewport.height)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::sections::select_current_section;
    use constants::animation::SECTION_TRIGGER_FRACTION;

    const IDS: [&str; 4] = ["banner", "intro", "description", "contact"];

    #[test]
    fn sections_stack_one_viewport_apart() {
        let page = VirtualPage::default();
        let snapshot = page.snapshot(IDS.into_iter(), 600.0);

        let tops: Vec<f32> = snapshot.sections.iter().map(|s| s.top).collect();
        assert_eq!(tops, [0.0_f32, 600.0, 1200.0, 1800.0]);
        assert_eq!(snapshot.viewport_height, 600.0);
    }

    #[test]
    fn scrolling_is_clamped_to_page_extent() {
        let mut page = VirtualPage::default();

        assert!(!page.scroll_by(-100.0, IDS.len(), 600.0));
        assert_eq!(page.scroll_offset(), 0.0);

        assert!(page.scroll_by(10_000.0, IDS.len(), 600.0));
        assert_eq!(page.scroll_offset(), 1800.0);
    }

    #[test]
    fn scrolling_changes_selected_section() {
        let mut page = VirtualPage::default();
        page.scroll_by(450.0, IDS.len(), 600.0);

        // intro top is now 150px, above the 200px trigger line.
        let snapshot = page.snapshot(IDS.into_iter(), 600.0);
        assert_eq!(
            select_current_section(&snapshot, SECTION_TRIGGER_FRACTION),
            Some("intro")
        );
    }

    #[test]
    fn wheel_input_requests_a_sync() {
        let mut app = App::new();
        app.add_event::<MouseWheel>()
            .add_event::<SectionSyncRequest>()
            .add_event::<SectionsMeasured>()
            .init_resource::<VirtualPage>()
            .init_resource::<SectionTable>()
            .insert_resource(ViewportSize::new(800.0, 600.0))
            .add_systems(Update, (scroll_virtual_page, measure_virtual_page).chain());

        app.world_mut().send_event(MouseWheel {
            unit: MouseScrollUnit::Pixel,
            x: 0.0,
            y: -700.0,
            window: Entity::PLACEHOLDER,
        });
        app.update();

        assert_eq!(app.world().resource::<VirtualPage>().scroll_offset(), 700.0);

        let events = app.world().resource::<Events<SectionsMeasured>>();
        let mut cursor = events.get_cursor();
        let measured: Vec<&SectionsMeasured> = cursor.read(events).collect();
        assert_eq!(measured.len(), 1);
        assert_eq!(measured[0].0.sections[1].top, -100.0);
    }
}
