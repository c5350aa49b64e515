use bevy::animation::graph::{AnimationGraph, AnimationGraphHandle, AnimationNodeIndex};
use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::engine::core::config::ViewerConfig;
use crate::engine::loading::model_loader::ModelClip;

/// Playback clock for the model's clip when it runs on a fixed per-frame step.
/// The bound [`AnimationPlayer`] is paused and seeked to `elapsed` every frame.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ClipClock {
    pub node: AnimationNodeIndex,
    pub elapsed: f32,
    /// Clip length, known once the clip asset has loaded.
    pub duration: Option<f32>,
}

impl ClipClock {
    pub fn new(node: AnimationNodeIndex) -> Self {
        Self {
            node,
            elapsed: 0.0,
            duration: None,
        }
    }

    /// Step the clock, wrapping at the clip length so playback repeats.
    pub fn advance(&mut self, delta: f32) -> f32 {
        self.elapsed += delta;
        if let Some(duration) = self.duration.filter(|duration| *duration > 0.0) {
            self.elapsed %= duration;
        }
        self.elapsed
    }
}

/// Start clip 0 on the animation player spawned by the model scene and
/// enter `Ready`.
pub fn bind_model_animation(
    mut commands: Commands,
    mut players: Query<(Entity, &mut AnimationPlayer), Added<AnimationPlayer>>,
    clip: Option<Res<ModelClip>>,
    config: Res<ViewerConfig>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(clip) = clip else {
        return;
    };

    let Some((entity, mut player)) = players.iter_mut().next() else {
        return;
    };

    let (graph, node) = AnimationGraph::from_clip(clip.0.clone());
    let graph = graphs.add(graph);

    let animation = player.play(node).repeat();
    if config.frame_delta.is_some() {
        animation.pause();
    }

    let mut entity_commands = commands.entity(entity);
    entity_commands.insert(AnimationGraphHandle(graph));
    if config.frame_delta.is_some() {
        entity_commands.insert(ClipClock::new(node));
    }

    next_state.set(AppState::Ready);
}

/// Record the clip length on the clock once the clip asset is available.
pub fn resolve_clip_duration(
    mut clocks: Query<&mut ClipClock>,
    model_clip: Option<Res<ModelClip>>,
    clips: Res<Assets<AnimationClip>>,
) {
    let Some(clip) = model_clip.and_then(|model_clip| clips.get(&model_clip.0)) else {
        return;
    };

    for mut clock in &mut clocks {
        if clock.duration.is_none() {
            clock.duration = Some(clip.duration());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_advances_by_fixed_step() {
        let mut clock = ClipClock::new(AnimationNodeIndex::new(1));
        for _ in 0..5 {
            clock.advance(0.02);
        }
        assert!((clock.elapsed - 0.1).abs() < 1e-6);
    }

    #[test]
    fn clock_wraps_at_clip_length() {
        let mut clock = ClipClock::new(AnimationNodeIndex::new(1));
        clock.duration = Some(1.0);
        clock.elapsed = 0.99;

        let time = clock.advance(0.02);
        assert!((time - 0.01).abs() < 1e-5);
    }

    fn clip_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<AnimationClip>()
            .add_systems(Update, resolve_clip_duration);
        app
    }

    #[test]
    fn clip_length_is_recorded_once_loaded() {
        let mut app = clip_app();
        let mut clip = AnimationClip::default();
        clip.set_duration(2.5);
        let handle = app
            .world_mut()
            .resource_mut::<Assets<AnimationClip>>()
            .add(clip);
        app.insert_resource(ModelClip(handle));
        let clock = app
            .world_mut()
            .spawn(ClipClock::new(AnimationNodeIndex::new(1)))
            .id();

        app.update();

        let clock = app.world().get::<ClipClock>(clock).unwrap();
        assert_eq!(clock.duration, Some(2.5));
    }

    #[test]
    fn clip_length_stays_unknown_without_a_clip() {
        let mut app = clip_app();
        let clock = app
            .world_mut()
            .spawn(ClipClock::new(AnimationNodeIndex::new(1)))
            .id();

        app.update();

        assert_eq!(app.world().get::<ClipClock>(clock).unwrap().duration, None);
    }

    #[test]
    fn zero_length_clip_does_not_wrap() {
        let mut clock = ClipClock::new(AnimationNodeIndex::new(1));
        clock.duration = Some(0.0);
        assert_eq!(clock.advance(0.5), 0.5);
    }
}
