//! Movement domain: components for the controllable entity.

use bevy::math::DVec2;
use bevy::prelude::*;

/// Timestamp meaning "never dashed"; any finite clock passes the cooldown.
pub const NEVER_DASHED_MS: f64 = f64::NEG_INFINITY;

#[derive(Component, Debug)]
pub struct Player;

/// Velocity and dash bookkeeping, mutated only by the integrator.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub velocity: DVec2,
    /// Last nonzero normalized input direction, used as dash fallback.
    pub last_direction: DVec2,
    pub last_dash_ms: f64,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            velocity: DVec2::ZERO,
            last_direction: DVec2::X,
            last_dash_ms: NEVER_DASHED_MS,
        }
    }
}

impl MotionState {
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    pub fn dash_ready(&self, now_ms: f64, cooldown_ms: f64) -> bool {
        now_ms - self.last_dash_ms > cooldown_ms
    }
}

/// Position in world space: origin top-left, +y down.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct WorldPosition(pub DVec2);

/// Half of the displayed size, used for edge clamping.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct HalfExtents(pub DVec2);

impl HalfExtents {
    pub fn from_size(size: Vec2) -> Self {
        Self(size.as_dvec2() * 0.5)
    }
}
