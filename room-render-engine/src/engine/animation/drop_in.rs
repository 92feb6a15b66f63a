use bevy::math::curve::Curve;
use bevy::math::curve::easing::{EaseFunction, EasingCurve};
use bevy::prelude::*;
use constants::animation::{DROP_IN_DURATION, DROP_IN_OFFSET};
use serde::{Deserialize, Serialize};

/// Shape of the fall played when a node becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropInProfile {
    /// Height above the resting position the node starts from, in local units.
    pub offset: f32,
    /// Seconds the node waits at its start height before falling.
    pub delay: f32,
    pub duration: f32,
}

impl Default for DropInProfile {
    fn default() -> Self {
        Self {
            offset: DROP_IN_OFFSET,
            delay: 0.0,
            duration: DROP_IN_DURATION,
        }
    }
}

/// Running drop-in on a scene node. Inserting a new one restarts the fall.
#[derive(Component, Debug, Clone)]
pub struct DropIn {
    profile: DropInProfile,
    rest: Vec3,
    elapsed: f32,
}

impl DropIn {
    pub fn new(profile: DropInProfile, rest: Vec3) -> Self {
        Self {
            profile,
            rest,
            elapsed: 0.0,
        }
    }

    pub fn profile(&self) -> &DropInProfile {
        &self.profile
    }

    /// Normalised progress of the fall, 0 while still delayed.
    pub fn progress(&self) -> f32 {
        if self.profile.duration <= 0.0 {
            return 1.0;
        }
        ((self.elapsed - self.profile.delay) / self.profile.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.profile.delay + self.profile.duration.max(0.0)
    }

    /// Current height above rest, following a bounce-out curve.
    pub fn height_offset(&self) -> f32 {
        if self.is_finished() {
            return 0.0;
        }
        EasingCurve::new(self.profile.offset, 0.0, EaseFunction::BounceOut)
            .sample_clamped(self.progress())
    }

    pub fn translation(&self) -> Vec3 {
        self.rest + Vec3::Y * self.height_offset()
    }

    pub fn advance(&mut self, delta_secs: f32) {
        self.elapsed += delta_secs.max(0.0);
    }
}

pub fn animate_drop_ins(
    mut commands: Commands,
    time: Res<Time>,
    mut drops: Query<(Entity, &mut Transform, &mut DropIn)>,
) {
    for (entity, mut transform, mut drop) in &mut drops {
        drop.advance(time.delta_secs());
        transform.translation = drop.translation();
        if drop.is_finished() {
            commands.entity(entity).remove::<DropIn>();
        }
    }
}
