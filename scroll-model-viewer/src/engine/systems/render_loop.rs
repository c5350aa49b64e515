use bevy::prelude::*;

use crate::engine::core::config::ViewerConfig;
use crate::engine::loading::animation::ClipClock;

/// Frame bookkeeping for the app's run loop. Bevy draws the scene once per
/// update; this resource counts those frames and owns the stop switch.
#[derive(Resource, Debug)]
pub struct RenderLoop {
    frames: u64,
    running: bool,
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self {
            frames: 0,
            running: true,
        }
    }
}

impl RenderLoop {
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the loop. The app exits at the end of the current frame.
    pub fn stop(&mut self) {
        self.running = false;
    }
}

/// Request to end the render loop from any system.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct StopRenderLoop;

/// One frame: count it and step the model's clip by the nominal delta.
/// Runs before the model exists too, with nothing to animate.
pub fn advance_frame(
    mut render_loop: ResMut<RenderLoop>,
    config: Res<ViewerConfig>,
    mut clips: Query<(&mut ClipClock, &mut AnimationPlayer)>,
) {
    if !render_loop.is_running() {
        return;
    }
    render_loop.frames += 1;

    let Some(delta) = config.frame_delta else {
        return;
    };

    for (mut clock, mut player) in &mut clips {
        let time = clock.advance(delta);
        if let Some(animation) = player.animation_mut(clock.node) {
            animation.seek_to(time);
        }
    }
}

pub fn handle_stop_requests(
    mut requests: EventReader<StopRenderLoop>,
    mut render_loop: ResMut<RenderLoop>,
    mut exit: EventWriter<AppExit>,
    mut exit_sent: Local<bool>,
) {
    if requests.read().count() > 0 {
        render_loop.stop();
    }

    if !render_loop.is_running() && !*exit_sent {
        info!("→ Render loop stopped after {} frames", render_loop.frames());
        exit.write(AppExit::Success);
        *exit_sent = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::animation::graph::AnimationNodeIndex;

    fn loop_app() -> App {
        let mut app = App::new();
        app.init_resource::<RenderLoop>()
            .init_resource::<ViewerConfig>()
            .add_event::<StopRenderLoop>()
            .add_systems(Update, (handle_stop_requests, advance_frame).chain());
        app
    }

    fn spawn_animated(app: &mut App) -> Entity {
        let node = AnimationNodeIndex::new(1);
        let mut player = AnimationPlayer::default();
        player.play(node).repeat().pause();
        app.world_mut().spawn((player, ClipClock::new(node))).id()
    }

    #[test]
    fn runs_before_model_is_loaded() {
        let mut app = loop_app();
        for _ in 0..3 {
            app.update();
        }
        assert_eq!(app.world().resource::<RenderLoop>().frames(), 3);
    }

    #[test]
    fn each_frame_steps_clip_by_nominal_delta() {
        let mut app = loop_app();
        let model = spawn_animated(&mut app);

        for frame in 1..=4 {
            app.update();

            assert_eq!(app.world().resource::<RenderLoop>().frames(), frame);
            let clock = app.world().get::<ClipClock>(model).unwrap();
            assert!((clock.elapsed - 0.02 * frame as f32).abs() < 1e-6);
        }
    }

    #[test]
    fn wall_clock_mode_leaves_clip_alone() {
        let mut app = loop_app();
        app.world_mut().resource_mut::<ViewerConfig>().frame_delta = None;
        let model = spawn_animated(&mut app);

        app.update();

        assert_eq!(app.world().resource::<RenderLoop>().frames(), 1);
        assert_eq!(app.world().get::<ClipClock>(model).unwrap().elapsed, 0.0);
    }

    #[test]
    fn stop_request_exits_and_freezes_frames() {
        let mut app = loop_app();
        app.update();

        app.world_mut().send_event(StopRenderLoop);
        app.update();
        app.update();

        assert!(!app.world().resource::<RenderLoop>().is_running());
        assert_eq!(app.world().resource::<RenderLoop>().frames(), 1);
        assert_eq!(app.should_exit(), Some(AppExit::Success));
    }
}
