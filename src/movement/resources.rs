//! Movement domain: tuning, input and frame clock resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Constants driving the motion integrator.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionTuning {
    /// Units per second squared applied along the input direction.
    pub acceleration: f64,
    /// Top speed enforced after friction, before any dash impulse.
    pub max_speed: f64,
    /// Damping rate per second (explicit Euler, floored at zero).
    pub friction: f64,
    /// Velocity added instantly when a dash fires.
    pub dash_impulse: f64,
    pub dash_cooldown_ms: f64,
    /// Squared length under which input counts as no direction.
    pub direction_epsilon: f64,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            acceleration: 900.0,
            max_speed: 260.0,
            friction: 8.0,
            dash_impulse: 420.0,
            dash_cooldown_ms: 300.0,
            direction_epsilon: 1e-6,
        }
    }
}

/// One cluster of four directional keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionalKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Abstract per-frame input. Arrow keys and the letter cluster are
/// OR-ed together per direction; the integrator never sees key codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub arrows: DirectionalKeys,
    pub letters: DirectionalKeys,
    /// True only on the frame the dash key goes down.
    pub dash_just_pressed: bool,
}

impl InputState {
    /// Horizontal axis signal in {-1, 0, 1}.
    pub fn x_axis(&self) -> f64 {
        axis(
            self.arrows.left || self.letters.left,
            self.arrows.right || self.letters.right,
        )
    }

    /// Vertical axis signal in {-1, 0, 1}, +1 pointing down the screen.
    pub fn y_axis(&self) -> f64 {
        axis(
            self.arrows.up || self.letters.up,
            self.arrows.down || self.letters.down,
        )
    }
}

fn axis(negative: bool, positive: bool) -> f64 {
    let mut value = 0.0;
    if negative {
        value -= 1.0;
    }
    if positive {
        value += 1.0;
    }
    value
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub state: InputState,
}

/// Frame timing copied out of `Time` so motion systems can run without it.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    pub delta_ms: f64,
    pub now_ms: f64,
}

impl FrameClock {
    pub fn dt_seconds(&self) -> f64 {
        self.delta_ms / 1000.0
    }
}
