use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::section_table::{SectionTable, SectionTableFile};
use crate::engine::core::config::ViewerConfig;

#[derive(Resource, Default)]
pub struct SectionTableLoader {
    handle: Option<Handle<SectionTableFile>>,
}

pub fn start_section_table_loading(
    mut loader: ResMut<SectionTableLoader>,
    asset_server: Res<AssetServer>,
    config: Res<ViewerConfig>,
) {
    if let Some(path) = &config.section_table_path {
        info!("Loading section table from: {}", path);
        loader.handle = Some(asset_server.load(path));
    }
}

/// Swap in the JSON section table once it loads. Any failure keeps the
/// built-in table.
pub fn apply_loaded_section_table(
    mut loader: ResMut<SectionTableLoader>,
    asset_server: Res<AssetServer>,
    files: Res<Assets<SectionTableFile>>,
    mut table: ResMut<SectionTable>,
) {
    let Some(handle) = loader.handle.clone() else {
        return;
    };

    if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle.id()) {
        warn!("Section table failed to load, keeping built-in table: {}", err);
        loader.handle = None;
        return;
    }

    let Some(file) = files.get(&handle) else {
        return;
    };

    match SectionTable::from_file(file) {
        Ok(loaded) => {
            info!("✓ Section table loaded with {} sections", loaded.len());
            *table = loaded;
        }
        Err(e) => warn!("Invalid section table, keeping built-in table: {}", e),
    }
    loader.handle = None;
}
