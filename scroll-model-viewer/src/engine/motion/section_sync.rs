use bevy::prelude::*;

use crate::engine::assets::section_table::SectionTable;
use crate::engine::core::config::ViewerConfig;
use crate::engine::loading::model_loader::SectionModel;
use crate::engine::motion::tween::{ModelEuler, PositionTween, RotationTween, SECTION_EASE, Tween};
use crate::page::sections::{SectionSyncRequest, SectionsMeasured, select_current_section};

/// Section most recently selected from a page measurement.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct CurrentSection(pub Option<String>);

/// Initial position sync once the model is ready.
pub fn request_initial_sync(mut requests: EventWriter<SectionSyncRequest>) {
    requests.write(SectionSyncRequest);
}

/// Pick the current section from the latest measurement and ease the model
/// towards its table entry. Does nothing until the model exists, when no
/// section qualifies, or when the section has no table entry.
pub fn move_model_to_section(
    mut measurements: EventReader<SectionsMeasured>,
    table: Res<SectionTable>,
    config: Res<ViewerConfig>,
    mut current: ResMut<CurrentSection>,
    mut commands: Commands,
    models: Query<(Entity, &Transform, &ModelEuler), With<SectionModel>>,
) {
    let Some(SectionsMeasured(snapshot)) = measurements.read().last() else {
        return;
    };

    let Ok((entity, transform, euler)) = models.single() else {
        return;
    };

    let Some(section_id) = select_current_section(snapshot, config.trigger_fraction) else {
        return;
    };

    if current.0.as_deref() != Some(section_id) {
        info!("Current section: {}", section_id);
        current.0 = Some(section_id.to_string());
    }

    let Some(target) = table.find(section_id) else {
        return;
    };

    commands.entity(entity).insert((
        PositionTween(Tween::new(
            transform.translation,
            target.position,
            config.ease_duration,
            SECTION_EASE,
        )),
        RotationTween(Tween::new(
            euler.0,
            target.rotation,
            config.ease_duration,
            SECTION_EASE,
        )),
    ));
}
