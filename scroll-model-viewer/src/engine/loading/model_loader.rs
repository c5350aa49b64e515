use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::engine::core::config::ViewerConfig;
use crate::engine::motion::tween::ModelEuler;

/// Marks the root entity of the loaded model scene.
#[derive(Component)]
pub struct SectionModel;

/// A loaded model file the viewer can take a scene and an animation clip from.
pub trait ModelAsset: Asset {
    fn scene(&self) -> Option<Handle<Scene>>;
    fn first_clip(&self) -> Option<Handle<AnimationClip>>;
}

impl ModelAsset for Gltf {
    fn scene(&self) -> Option<Handle<Scene>> {
        self.default_scene
            .clone()
            .or_else(|| self.scenes.first().cloned())
    }

    fn first_clip(&self) -> Option<Handle<AnimationClip>> {
        self.animations.first().cloned()
    }
}

#[derive(Resource)]
pub struct ModelLoader<A: ModelAsset = Gltf> {
    handle: Option<Handle<A>>,
    spawned: bool,
}

impl<A: ModelAsset> Default for ModelLoader<A> {
    fn default() -> Self {
        Self {
            handle: None,
            spawned: false,
        }
    }
}

/// First animation clip of the model. Inserted together with the model scene.
#[derive(Resource, Debug, Clone)]
pub struct ModelClip(pub Handle<AnimationClip>);

// Start the loading process
pub fn start_loading<A: ModelAsset>(
    mut model_loader: ResMut<ModelLoader<A>>,
    asset_server: Res<AssetServer>,
    config: Res<ViewerConfig>,
) {
    info!("Loading model from: {}", config.model_path);
    model_loader.handle = Some(asset_server.load(&config.model_path));
}

/// Attach the model scene once the asset is available, or give up if
/// loading failed or the file has nothing to animate.
pub fn spawn_model_when_loaded<A: ModelAsset>(
    mut model_loader: ResMut<ModelLoader<A>>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    models: Res<Assets<A>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if model_loader.spawned {
        return;
    }

    let Some(handle) = model_loader.handle.clone() else {
        return;
    };

    if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle.id()) {
        error!("Model failed to load: {}", err);
        model_loader.handle = None;
        next_state.set(AppState::LoadFailed);
        return;
    }

    let Some(model) = models.get(&handle) else {
        return;
    };

    let Some(scene) = model.scene() else {
        error!("Model contains no scene");
        model_loader.handle = None;
        next_state.set(AppState::LoadFailed);
        return;
    };

    let Some(clip) = model.first_clip() else {
        error!("Model contains no animation clip");
        model_loader.handle = None;
        next_state.set(AppState::LoadFailed);
        return;
    };

    println!("✓ Model loaded, spawning scene");
    commands.spawn((
        SectionModel,
        SceneRoot(scene),
        Transform::default(),
        ModelEuler::default(),
    ));
    commands.insert_resource(ModelClip(clip));

    model_loader.spawned = true;
}
