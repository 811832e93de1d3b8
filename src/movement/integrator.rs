//! Movement domain: the per-frame motion integrator.
//!
//! A pure state transition over [`MotionState`]: input in, clamped position
//! out. It never touches the ECS, so the whole step can be exercised without
//! an `App`.

use bevy::math::DVec2;

use crate::movement::{InputState, MotionState, MotionTuning};

/// Timing for a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    pub dt_seconds: f64,
    /// Monotonic clock in milliseconds, same domain as `last_dash_ms`.
    pub now_ms: f64,
}

/// World rectangle plus the entity's half-extents for this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
    pub half_extents: DVec2,
}

impl Bounds {
    /// Clamp a point so the entity's full rectangle stays inside the world.
    /// An inverted range (entity larger than the world) resolves to the lower
    /// edge.
    pub fn contain(&self, position: DVec2) -> DVec2 {
        let min = self.half_extents;
        let max = DVec2::new(self.width, self.height) - self.half_extents;
        DVec2::new(
            position.x.min(max.x).max(min.x),
            position.y.min(max.y).max(min.y),
        )
    }

    fn is_well_formed(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.half_extents.is_finite()
            && self.half_extents.x * 2.0 <= self.width
            && self.half_extents.y * 2.0 <= self.height
    }
}

/// Cosmetic cue emitted on the frame a dash fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashCue {
    pub direction: DVec2,
    pub at_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub position: DVec2,
    pub dash: Option<DashCue>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MotionIntegrator {
    tuning: MotionTuning,
}

impl MotionIntegrator {
    pub fn new(tuning: MotionTuning) -> Self {
        Self { tuning }
    }

    /// Normalized input direction, or zero when below the epsilon.
    pub fn input_direction(&self, input: &InputState) -> Option<DVec2> {
        let raw = DVec2::new(input.x_axis(), input.y_axis());
        (raw.length_squared() > self.tuning.direction_epsilon).then(|| raw.normalize())
    }

    /// Advance one frame. Step order matters: the dash impulse lands after the
    /// speed clamp, so a dash can overshoot `max_speed` until friction eats it.
    pub fn step(
        &self,
        state: &mut MotionState,
        input: &InputState,
        frame: FrameTime,
        position: DVec2,
        bounds: &Bounds,
    ) -> StepOutcome {
        debug_assert!(frame.dt_seconds >= 0.0, "negative frame delta");
        debug_assert!(bounds.is_well_formed(), "degenerate bounds: {bounds:?}");

        let t = &self.tuning;
        let dt = frame.dt_seconds;

        let direction = match self.input_direction(input) {
            Some(dir) => {
                state.last_direction = dir;
                dir
            }
            None => DVec2::ZERO,
        };

        state.velocity += direction * t.acceleration * dt;

        let f = (1.0 - t.friction * dt).max(0.0);
        state.velocity *= f;

        let speed = state.velocity.length();
        if speed > t.max_speed {
            state.velocity *= t.max_speed / speed;
        }

        let mut dash = None;
        if input.dash_just_pressed && state.dash_ready(frame.now_ms, t.dash_cooldown_ms) {
            let dash_direction = if direction == DVec2::ZERO {
                state.last_direction
            } else {
                direction
            };
            state.velocity += dash_direction * t.dash_impulse;
            state.last_dash_ms = frame.now_ms;
            dash = Some(DashCue {
                direction: dash_direction,
                at_ms: frame.now_ms,
            });
        }

        let moved = position + state.velocity * dt;

        StepOutcome {
            position: bounds.contain(moved),
            dash,
        }
    }
}
