use core::f32::consts::PI;

use bevy::prelude::*;

use crate::card::Face;
use crate::CardSystemSet;

/// Quadratic ease out, fast start and gentle landing.
pub fn power2_out(t: f32) -> f32 {
    let inverse = 1.0 - t.clamp(0.0, 1.0);
    inverse.mul_add(-inverse, 1.0)
}

/// Quadratic ease in and out.
pub fn power2_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let inverse = t.mul_add(-2.0, 2.0);
        (inverse * inverse).mul_add(-0.5, 1.0)
    }
}

/// Moves a card's translation toward `to`. Inserting a new one replaces the
/// one in flight.
#[derive(Component, Debug, Clone)]
pub struct MoveTween {
    timer: Timer,
    from: Vec3,
    to: Vec3,
}

impl MoveTween {
    pub fn new(from: Vec3, to: Vec3, seconds: f32) -> Self {
        Self {
            timer: Timer::from_seconds(seconds, TimerMode::Once),
            from,
            to,
        }
    }

    pub const fn target(&self) -> Vec3 {
        self.to
    }

    pub fn sample(&self) -> Vec3 {
        if self.timer.finished() {
            return self.to;
        }
        self.from.lerp(self.to, power2_out(self.timer.fraction()))
    }
}

/// Uniform scale toward `to`, used for mounting and hover feedback.
#[derive(Component, Debug, Clone)]
pub struct ScaleTween {
    timer: Timer,
    from: f32,
    to: f32,
}

impl ScaleTween {
    pub fn new(from: f32, to: f32, seconds: f32) -> Self {
        Self {
            timer: Timer::from_seconds(seconds, TimerMode::Once),
            from,
            to,
        }
    }

    pub const fn target(&self) -> f32 {
        self.to
    }

    pub fn sample(&self) -> f32 {
        if self.timer.finished() {
            return self.to;
        }
        (self.to - self.from).mul_add(power2_out(self.timer.fraction()), self.from)
    }
}

/// Half turn around the Y axis between two faces.
///
/// The first half turns the old face edge-on, the second half brings the new
/// face in from the other edge so text never shows mirrored.
#[derive(Component, Debug, Clone)]
pub struct FlipAnimation {
    timer: Timer,
    from: Face,
    to: Face,
}

impl FlipAnimation {
    pub fn new(from: Face, to: Face, seconds: f32) -> Self {
        Self {
            timer: Timer::from_seconds(seconds, TimerMode::Once),
            from,
            to,
        }
    }

    fn progress(&self) -> f32 {
        power2_in_out(self.timer.fraction())
    }

    pub fn rotation(&self) -> Quat {
        let progress = self.progress();
        let angle = if progress < 0.5 {
            progress * PI
        } else {
            (progress - 1.0) * PI
        };
        Quat::from_rotation_y(angle)
    }

    pub fn visible_face(&self) -> Face {
        if self.progress() < 0.5 {
            self.from
        } else {
            self.to
        }
    }
}

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (animate_moves, animate_scales, animate_flips).in_set(CardSystemSet::Animate),
        );
    }
}

fn animate_moves(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut MoveTween, &mut Transform)>,
) {
    for (entity, mut tween, mut transform) in &mut query {
        tween.timer.tick(time.delta());
        transform.translation = tween.sample();

        if tween.timer.finished() {
            commands.entity(entity).remove::<MoveTween>();
        }
    }
}

fn animate_scales(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut ScaleTween, &mut Transform)>,
) {
    for (entity, mut tween, mut transform) in &mut query {
        tween.timer.tick(time.delta());
        transform.scale = Vec3::splat(tween.sample());

        if tween.timer.finished() {
            commands.entity(entity).remove::<ScaleTween>();
        }
    }
}

fn animate_flips(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut FlipAnimation, &mut Transform)>,
) {
    for (entity, mut flip, mut transform) in &mut query {
        flip.timer.tick(time.delta());
        transform.rotation = flip.rotation();

        if flip.timer.finished() {
            transform.rotation = Quat::IDENTITY;
            commands.entity(entity).remove::<FlipAnimation>();
        }
    }
}
