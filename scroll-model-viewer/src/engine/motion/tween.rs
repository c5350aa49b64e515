use bevy::math::curve::Curve;
use bevy::math::curve::easing::{EaseFunction, EasingCurve};
use bevy::prelude::*;

/// Curve shared by every section transition ("power1.out").
pub const SECTION_EASE: EaseFunction = EaseFunction::QuadraticOut;

/// XYZ Euler rotation of the model, in radians. Source of truth for the
/// model's `Transform::rotation`, which is rebuilt from it.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct ModelEuler(pub Vec3);

impl ModelEuler {
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.0.x, self.0.y, self.0.z)
    }
}

/// Time-based interpolation of a `Vec3` from its value at start to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: Vec3,
    to: Vec3,
    duration: f32,
    elapsed: f32,
    ease: EaseFunction,
}

impl Tween {
    pub fn new(from: Vec3, to: Vec3, duration: f32, ease: EaseFunction) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Move `delta` seconds along the curve and return the new value.
    /// Once the duration has elapsed the value is exactly `to`.
    pub fn advance(&mut self, delta: f32) -> Vec3 {
        self.elapsed = (self.elapsed + delta).min(self.duration);
        if self.is_finished() {
            return self.to;
        }

        EasingCurve::new(self.from, self.to, self.ease).sample_clamped(self.elapsed / self.duration)
    }
}

/// In-flight position transition. Inserting a new one replaces the old.
#[derive(Component, Debug, Clone, Copy)]
pub struct PositionTween(pub Tween);

/// In-flight rotation transition over [`ModelEuler`]. Inserting a new one replaces the old.
#[derive(Component, Debug, Clone, Copy)]
pub struct RotationTween(pub Tween);

pub fn advance_position_tweens(
    mut commands: Commands,
    time: Res<Time>,
    mut tweens: Query<(Entity, &mut Transform, &mut PositionTween)>,
) {
    for (entity, mut transform, mut tween) in &mut tweens {
        transform.translation = tween.0.advance(time.delta_secs());
        if tween.0.is_finished() {
            commands.entity(entity).remove::<PositionTween>();
        }
    }
}

pub fn advance_rotation_tweens(
    mut commands: Commands,
    time: Res<Time>,
    mut tweens: Query<(Entity, &mut Transform, &mut ModelEuler, &mut RotationTween)>,
) {
    for (entity, mut transform, mut euler, mut tween) in &mut tweens {
        euler.0 = tween.0.advance(time.delta_secs());
        transform.rotation = euler.to_quat();
        if tween.0.is_finished() {
            commands.entity(entity).remove::<RotationTween>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_exactly_on_target() {
        let target = Vec3::new(1.0, -1.0, -15.0);
        let mut tween = Tween::new(Vec3::new(0.0, -1.0, 0.0), target, 3.0, SECTION_EASE);

        for _ in 0..7 {
            tween.advance(0.45);
        }
        assert!(tween.is_finished());
        assert_eq!(tween.advance(0.0), target);
    }

    #[test]
    fn eases_out() {
        let mut tween = Tween::new(Vec3::ZERO, Vec3::X, 2.0, SECTION_EASE);

        // Quadratic ease-out covers three quarters of the distance by half time.
        let halfway = tween.advance(1.0);
        assert!((halfway.x - 0.75).abs() < 1e-5);
        assert!(!tween.is_finished());
    }

    #[test]
    fn progress_is_monotonic() {
        let mut tween = Tween::new(Vec3::ZERO, Vec3::splat(10.0), 3.0, SECTION_EASE);
        let mut previous = 0.0;
        while !tween.is_finished() {
            let value = tween.advance(0.1).x;
            assert!(value >= previous);
            previous = value;
        }
        assert_eq!(previous, 10.0);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut tween = Tween::new(Vec3::ZERO, Vec3::ONE, 0.0, SECTION_EASE);
        assert!(tween.is_finished());
        assert_eq!(tween.advance(0.0), Vec3::ONE);
    }

    #[test]
    fn euler_rotation_matches_xyz_order() {
        let euler = ModelEuler(Vec3::new(0.5, -0.5, 0.0));
        let expected = Quat::from_rotation_x(0.5) * Quat::from_rotation_y(-0.5);
        assert!(euler.to_quat().abs_diff_eq(expected, 1e-6));
    }
}
