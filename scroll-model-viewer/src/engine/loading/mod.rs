/// Model loading: start the glTF request and attach the scene once it arrives.
pub mod model_loader;

/// Binds clip 0 to the spawned scene's animation player.
pub mod animation;

/// Optional JSON section table loading.
pub mod section_table_loader;
