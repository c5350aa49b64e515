use bevy::asset::AssetMetaCheck;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::path::SECTION_TABLE_EXTENSION;

// Crate engine modules
use crate::engine::assets::section_table::{SectionTable, SectionTableFile};
use crate::engine::core::app_state::{AppState, log_failed_transition, log_ready_transition};
use crate::engine::core::config::ViewerConfig;
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::animation::{bind_model_animation, resolve_clip_duration};
use crate::engine::loading::model_loader::{ModelLoader, spawn_model_when_loaded, start_loading};
use crate::engine::loading::section_table_loader::{
    SectionTableLoader, apply_loaded_section_table, start_section_table_loading,
};
use crate::engine::motion::section_sync::{
    CurrentSection, move_model_to_section, request_initial_sync,
};
use crate::engine::motion::tween::{advance_position_tweens, advance_rotation_tweens};
use crate::engine::scene::camera::spawn_scene_camera;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::viewport::{
    ViewportSize, cap_initial_pixel_ratio, handle_viewport_resize,
};
use crate::engine::systems::render_loop::{
    RenderLoop, StopRenderLoop, advance_frame, handle_stop_requests,
};
// Page tracking
use crate::page::{PageMeasurement, PagePlugin};

pub fn create_app() -> App {
    create_app_with_config(ViewerConfig::default())
}

pub fn create_app_with_config(config: ViewerConfig) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins(&config))
        .init_state::<AppState>()
        // Registers SectionTableFile as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SectionTableFile>::new(&[
            SECTION_TABLE_EXTENSION,
        ]))
        .add_plugins(PagePlugin)
        .insert_resource(ClearColor(Color::NONE))
        .insert_resource(config);

    // Initialise resources early
    app.init_resource::<ViewportSize>()
        .init_resource::<SectionTable>()
        .init_resource::<CurrentSection>()
        .init_resource::<ModelLoader<Gltf>>()
        .init_resource::<SectionTableLoader>()
        .init_resource::<RenderLoop>()
        .add_event::<StopRenderLoop>();

    // State-based system scheduling
    app.add_systems(
        Startup,
        (
            setup,
            cap_initial_pixel_ratio,
            start_loading::<Gltf>,
            start_section_table_loading,
        )
            .chain(),
    )
    .add_systems(
        Update,
        (spawn_model_when_loaded::<Gltf>, bind_model_animation)
            .chain()
            .run_if(in_state(AppState::Loading)),
    )
    .add_systems(
        OnEnter(AppState::Ready),
        (log_ready_transition, request_initial_sync),
    )
    .add_systems(OnEnter(AppState::LoadFailed), log_failed_transition);

    // Runtime systems - only run once the model and its clip are bound
    app.add_systems(
        Update,
        (
            resolve_clip_duration,
            move_model_to_section.after(PageMeasurement),
            (advance_position_tweens, advance_rotation_tweens).after(move_model_to_section),
        )
            .run_if(in_state(AppState::Ready)),
    );

    // Systems that run in every state
    app.add_systems(
        Update,
        (
            apply_loaded_section_table,
            handle_viewport_resize,
            (handle_stop_requests, advance_frame).chain(),
        ),
    );

    app
}

fn setup(mut commands: Commands, viewport: Res<ViewportSize>) {
    println!("=== SCROLL MODEL VIEWER ===");
    spawn_scene_camera(&mut commands, &viewport);
    spawn_lighting(&mut commands);
}

fn create_default_plugins(config: &ViewerConfig) -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config(config)),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
