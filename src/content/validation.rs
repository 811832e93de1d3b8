//! Sanity checks for loaded motion content.

use thiserror::Error;

use super::data::{MOTION_SCHEMA_VERSION, MotionDefaults};

/// A validation error naming the offending field.
#[derive(Debug, Error, PartialEq)]
#[error("{field} {problem} (got {value})")]
pub struct ValidationError {
    pub field: &'static str,
    pub problem: &'static str,
    pub value: String,
}

/// Helper macro for checking a numeric field
macro_rules! check {
    ($errors:expr, $field:expr, $value:expr, $ok:expr, $problem:expr) => {
        let value = $value;
        if !value.is_finite() || !$ok(value) {
            $errors.push(ValidationError {
                field: $field,
                problem: $problem,
                value: value.to_string(),
            });
        }
    };
}

/// Validate every field of the motion file.
/// Returns a list of validation errors, empty if the content is usable.
pub fn validate_defaults(defaults: &MotionDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if defaults.schema_version != MOTION_SCHEMA_VERSION {
        errors.push(ValidationError {
            field: "schema_version",
            problem: "is not supported",
            value: defaults.schema_version.to_string(),
        });
    }

    // Tuning
    let t = &defaults.tuning;
    let non_negative = |v: f64| v >= 0.0;
    let positive = |v: f64| v > 0.0;
    check!(
        errors,
        "tuning.acceleration",
        t.acceleration,
        non_negative,
        "must be >= 0"
    );
    check!(errors, "tuning.max_speed", t.max_speed, positive, "must be > 0");
    check!(errors, "tuning.friction", t.friction, non_negative, "must be >= 0");
    check!(
        errors,
        "tuning.dash_impulse",
        t.dash_impulse,
        non_negative,
        "must be >= 0"
    );
    check!(
        errors,
        "tuning.dash_cooldown_ms",
        t.dash_cooldown_ms,
        non_negative,
        "must be >= 0"
    );
    check!(
        errors,
        "tuning.direction_epsilon",
        t.direction_epsilon,
        positive,
        "must be > 0"
    );

    // World
    let w = &defaults.world;
    check!(errors, "world.width", w.width, positive, "must be > 0");
    check!(errors, "world.height", w.height, positive, "must be > 0");

    // Player
    let p = &defaults.player;
    let (size_w, size_h) = p.fallback_size;
    check!(errors, "player.fallback_size.0", size_w, |v: f32| v > 0.0, "must be > 0");
    check!(errors, "player.fallback_size.1", size_h, |v: f32| v > 0.0, "must be > 0");
    check!(
        errors,
        "player.fallback_size.0",
        f64::from(size_w),
        |v: f64| v <= w.width,
        "must fit inside world.width"
    );
    check!(
        errors,
        "player.fallback_size.1",
        f64::from(size_h),
        |v: f64| v <= w.height,
        "must fit inside world.height"
    );
    let (spawn_x, spawn_y) = p.spawn;
    check!(
        errors,
        "player.spawn.0",
        spawn_x,
        |v: f64| (0.0..=w.width).contains(&v),
        "must lie inside the world"
    );
    check!(
        errors,
        "player.spawn.1",
        spawn_y,
        |v: f64| (0.0..=w.height).contains(&v),
        "must lie inside the world"
    );

    // Squash
    let s = &defaults.squash;
    check!(errors, "squash.from_scale", s.from_scale, |v: f32| v > 0.0, "must be > 0");
    check!(errors, "squash.to_scale", s.to_scale, |v: f32| v > 0.0, "must be > 0");
    check!(errors, "squash.duration_ms", s.duration_ms, |v: f32| v > 0.0, "must be > 0");

    errors
}
