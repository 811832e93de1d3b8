//! Movement domain: tests for the motion integrator and its frame driver.

use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::math::DVec2;
use bevy::prelude::*;

use super::systems::apply_motion;
use super::{
    Bounds, DashTriggeredEvent, DirectionalKeys, FrameClock, FrameTime, HalfExtents, InputState,
    MotionIntegrator, MotionState, MotionTuning, MovementInput, NEVER_DASHED_MS, Player,
    WorldPosition,
};
use crate::core::WorldBounds;

const DT: f64 = 1.0 / 60.0;
const EPS: f64 = 1e-9;

fn integrator() -> MotionIntegrator {
    MotionIntegrator::new(MotionTuning::default())
}

/// A world large enough that clamping never kicks in.
fn open_bounds() -> Bounds {
    Bounds {
        width: 1.0e6,
        height: 1.0e6,
        half_extents: DVec2::splat(32.0),
    }
}

fn arena_bounds() -> Bounds {
    Bounds {
        width: 960.0,
        height: 640.0,
        half_extents: DVec2::splat(32.0),
    }
}

fn frame(now_ms: f64) -> FrameTime {
    FrameTime {
        dt_seconds: DT,
        now_ms,
    }
}

fn arrows(up: bool, down: bool, left: bool, right: bool) -> InputState {
    InputState {
        arrows: DirectionalKeys {
            up,
            down,
            left,
            right,
        },
        ..InputState::default()
    }
}

fn right() -> InputState {
    arrows(false, false, false, true)
}

fn dash(mut input: InputState) -> InputState {
    input.dash_just_pressed = true;
    input
}

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}

// -----------------------------------------------------------------------------
// Input axes
// -----------------------------------------------------------------------------

#[test]
fn test_opposite_keys_cancel() {
    let input = arrows(true, true, true, true);
    assert_eq!(input.x_axis(), 0.0);
    assert_eq!(input.y_axis(), 0.0);
    assert!(integrator().input_direction(&input).is_none());
}

#[test]
fn test_arrow_and_letter_bindings_share_an_axis() {
    let input = InputState {
        arrows: DirectionalKeys {
            left: true,
            ..DirectionalKeys::default()
        },
        letters: DirectionalKeys {
            left: true,
            up: true,
            ..DirectionalKeys::default()
        },
        dash_just_pressed: false,
    };

    // Both left bindings together still count once
    assert_eq!(input.x_axis(), -1.0);
    assert_eq!(input.y_axis(), -1.0);
}

#[test]
fn test_diagonal_direction_is_unit_length() {
    let input = arrows(true, false, false, true);
    let dir = integrator().input_direction(&input).unwrap();

    assert_close(dir.length(), 1.0, EPS);
    assert_close(dir.x, std::f64::consts::FRAC_1_SQRT_2, EPS);
    assert_close(dir.y, -std::f64::consts::FRAC_1_SQRT_2, EPS);
}

// -----------------------------------------------------------------------------
// Direction memory
// -----------------------------------------------------------------------------

#[test]
fn test_new_state_faces_right_and_never_dashed() {
    let state = MotionState::default();
    assert_eq!(state.velocity, DVec2::ZERO);
    assert_eq!(state.last_direction, DVec2::X);
    assert_eq!(state.last_dash_ms, NEVER_DASHED_MS);
}

#[test]
fn test_last_direction_tracks_input_and_survives_release() {
    let integrator = integrator();
    let mut state = MotionState::default();
    let start = DVec2::new(500.0, 300.0);

    integrator.step(
        &mut state,
        &arrows(false, true, true, false),
        frame(0.0),
        start,
        &open_bounds(),
    );
    let expected = DVec2::new(-1.0, 1.0).normalize();
    assert_close(state.last_direction.x, expected.x, EPS);
    assert_close(state.last_direction.y, expected.y, EPS);

    integrator.step(
        &mut state,
        &InputState::default(),
        frame(16.0),
        start,
        &open_bounds(),
    );
    assert_close(state.last_direction.x, expected.x, EPS);
    assert_close(state.last_direction.y, expected.y, EPS);
}

// -----------------------------------------------------------------------------
// Acceleration, friction, clamp
// -----------------------------------------------------------------------------

#[test]
fn test_single_frame_accel_then_friction() {
    let mut state = MotionState::default();
    integrator().step(
        &mut state,
        &right(),
        frame(0.0),
        DVec2::new(100.0, 100.0),
        &open_bounds(),
    );

    // (0 + 900 * dt) * (1 - 8 * dt)
    assert_close(state.velocity.x, 900.0 * DT * (1.0 - 8.0 * DT), EPS);
    assert_eq!(state.velocity.y, 0.0);
}

#[test]
fn test_friction_floor_stops_instead_of_reversing() {
    let integrator = integrator();
    for dt in [0.125, 0.5, 2.0] {
        let mut state = MotionState {
            velocity: DVec2::new(120.0, -80.0),
            ..MotionState::default()
        };
        integrator.step(
            &mut state,
            &InputState::default(),
            FrameTime {
                dt_seconds: dt,
                now_ms: 0.0,
            },
            DVec2::new(480.0, 320.0),
            &arena_bounds(),
        );
        assert_eq!(state.velocity, DVec2::ZERO, "dt = {dt}");
    }
}

#[test]
fn test_speed_never_exceeds_max_without_dash() {
    let integrator = integrator();
    let tuning = MotionTuning::default();
    let mut state = MotionState {
        velocity: DVec2::new(900.0, 900.0),
        ..MotionState::default()
    };
    let mut position = DVec2::new(500.0, 500.0);

    // Long frames make the per-frame acceleration large
    for i in 0..200 {
        let outcome = integrator.step(
            &mut state,
            &arrows(false, true, false, true),
            FrameTime {
                dt_seconds: 0.1,
                now_ms: i as f64 * 100.0,
            },
            position,
            &open_bounds(),
        );
        position = outcome.position;
        assert!(state.speed() <= tuning.max_speed + EPS, "frame {i}");
    }
}

#[test]
fn test_clamp_preserves_heading() {
    let mut state = MotionState {
        velocity: DVec2::new(3000.0, -4000.0),
        ..MotionState::default()
    };
    integrator().step(
        &mut state,
        &InputState::default(),
        FrameTime {
            dt_seconds: 0.0,
            now_ms: 0.0,
        },
        DVec2::new(500.0, 500.0),
        &open_bounds(),
    );

    assert_close(state.speed(), 260.0, EPS);
    assert_close(state.velocity.x / state.velocity.y, -0.75, EPS);
}

#[test]
fn test_right_only_for_sixty_frames_plateaus_below_max() {
    let integrator = integrator();
    let mut state = MotionState::default();
    let mut position = DVec2::new(100.0, 320.0);
    let mut speeds = Vec::new();

    for i in 0..60 {
        let outcome = integrator.step(
            &mut state,
            &right(),
            frame(i as f64 * 1000.0 * DT),
            position,
            &open_bounds(),
        );
        position = outcome.position;
        speeds.push(state.velocity.x);
        assert_eq!(state.velocity.y, 0.0);
    }

    for pair in speeds.windows(2) {
        assert!(pair[1] >= pair[0]);
    }
    assert!(speeds.iter().all(|&v| v <= 260.0));

    // Discrete steady state of v = (v + a*dt) * f
    let f = 1.0 - 8.0 * DT;
    let terminal = 900.0 * DT * f / (1.0 - f);
    let last = speeds[speeds.len() - 1];
    assert_close(last, terminal, 0.05);
    assert!(last - speeds[speeds.len() - 2] < 0.01);
}

#[test]
fn test_idle_velocity_decays_monotonically() {
    let integrator = integrator();
    let mut state = MotionState {
        velocity: DVec2::new(200.0, -100.0),
        ..MotionState::default()
    };
    let mut position = DVec2::new(500.0, 500.0);
    let mut previous = state.speed();

    for i in 0..600 {
        let outcome = integrator.step(
            &mut state,
            &InputState::default(),
            frame(i as f64 * 1000.0 * DT),
            position,
            &open_bounds(),
        );
        position = outcome.position;
        let speed = state.speed();
        assert!(speed < previous || speed == 0.0);
        previous = speed;
    }

    assert!(previous < 1e-6);
}

// -----------------------------------------------------------------------------
// Dash
// -----------------------------------------------------------------------------

#[test]
fn test_first_dash_fires_at_time_zero_along_default_facing() {
    let mut state = MotionState::default();
    let outcome = integrator().step(
        &mut state,
        &dash(InputState::default()),
        frame(0.0),
        DVec2::new(100.0, 100.0),
        &open_bounds(),
    );

    assert!(state.velocity.x >= 420.0);
    assert_eq!(state.velocity.y, 0.0);
    assert_eq!(state.last_dash_ms, 0.0);

    let cue = outcome.dash.unwrap();
    assert_eq!(cue.direction, DVec2::X);
    assert_eq!(cue.at_ms, 0.0);
}

#[test]
fn test_dash_uses_current_input_direction() {
    let mut state = MotionState::default();
    integrator().step(
        &mut state,
        &dash(arrows(true, false, false, false)),
        frame(0.0),
        DVec2::new(500.0, 500.0),
        &open_bounds(),
    );

    // Accel and friction on y, then the full impulse upward
    let walked = 900.0 * DT * (1.0 - 8.0 * DT);
    assert_close(state.velocity.y, -(walked + 420.0), EPS);
    assert_eq!(state.velocity.x, 0.0);
    assert_eq!(state.last_direction, DVec2::NEG_Y);
}

#[test]
fn test_dash_falls_back_to_last_direction() {
    let mut state = MotionState {
        last_direction: DVec2::NEG_Y,
        ..MotionState::default()
    };
    let outcome = integrator().step(
        &mut state,
        &dash(InputState::default()),
        frame(5000.0),
        DVec2::new(500.0, 500.0),
        &open_bounds(),
    );

    assert_eq!(state.velocity, DVec2::new(0.0, -420.0));
    assert_eq!(outcome.dash.unwrap().direction, DVec2::NEG_Y);
}

#[test]
fn test_dash_is_applied_after_the_speed_clamp() {
    let integrator = integrator();
    let tuning = MotionTuning::default();
    let mut state = MotionState {
        velocity: DVec2::new(tuning.max_speed, 0.0),
        ..MotionState::default()
    };

    integrator.step(
        &mut state,
        &dash(right()),
        frame(0.0),
        DVec2::new(500.0, 500.0),
        &open_bounds(),
    );

    assert!(state.speed() > tuning.max_speed);
    assert!(state.speed() <= tuning.max_speed + tuning.dash_impulse + EPS);
}

#[test]
fn test_dash_cooldown_blocks_second_impulse() {
    let integrator = integrator();
    let mut state = MotionState::default();
    let position = DVec2::new(500.0, 500.0);

    let first = integrator.step(
        &mut state,
        &dash(InputState::default()),
        frame(1000.0),
        position,
        &open_bounds(),
    );
    assert!(first.dash.is_some());

    // Same frame with and without the dash edge must agree inside the cooldown
    for now_ms in [1100.0, 1300.0] {
        let mut with_edge = state;
        let mut without_edge = state;
        let blocked = integrator.step(
            &mut with_edge,
            &dash(InputState::default()),
            frame(now_ms),
            position,
            &open_bounds(),
        );
        integrator.step(
            &mut without_edge,
            &InputState::default(),
            frame(now_ms),
            position,
            &open_bounds(),
        );

        assert!(blocked.dash.is_none(), "now = {now_ms}");
        assert_eq!(with_edge, without_edge);
        assert_eq!(with_edge.last_dash_ms, 1000.0);
    }

    let again = integrator.step(
        &mut state,
        &dash(InputState::default()),
        frame(1300.5),
        position,
        &open_bounds(),
    );
    assert!(again.dash.is_some());
    assert_eq!(state.last_dash_ms, 1300.5);
}

#[test]
fn test_dash_timestamps_never_decrease() {
    let integrator = integrator();
    let mut state = MotionState::default();
    let mut position = DVec2::new(480.0, 320.0);
    let mut last = state.last_dash_ms;

    // Mash dash every frame for two seconds
    for i in 0..120 {
        let outcome = integrator.step(
            &mut state,
            &dash(InputState::default()),
            frame(i as f64 * 1000.0 * DT),
            position,
            &arena_bounds(),
        );
        position = outcome.position;
        assert!(state.last_dash_ms >= last);
        last = state.last_dash_ms;
    }
}

// -----------------------------------------------------------------------------
// Bounds
// -----------------------------------------------------------------------------

#[test]
fn test_position_stays_inside_arena() {
    let integrator = integrator();
    let bounds = arena_bounds();
    let mut state = MotionState::default();
    let mut position = DVec2::new(500.0, 500.0);

    let inputs = [
        arrows(false, true, false, true),
        dash(arrows(true, false, true, false)),
        arrows(true, false, true, false),
        dash(arrows(false, true, false, false)),
    ];

    // Hold each input for 100 frames; its dash edge only lands on the first
    for i in 0..2000 {
        let held = inputs[(i / 100) % inputs.len()];
        let input = InputState {
            dash_just_pressed: held.dash_just_pressed && i % 100 == 0,
            ..held
        };
        let outcome = integrator.step(
            &mut state,
            &input,
            frame(i as f64 * 1000.0 * DT),
            position,
            &bounds,
        );
        position = outcome.position;

        assert!((32.0..=928.0).contains(&position.x), "x = {}", position.x);
        assert!((32.0..=608.0).contains(&position.y), "y = {}", position.y);
    }
}

#[test]
fn test_clamp_pins_to_edges() {
    let bounds = arena_bounds();
    assert_eq!(
        bounds.contain(DVec2::new(-50.0, 9000.0)),
        DVec2::new(32.0, 608.0)
    );
    assert_eq!(
        bounds.contain(DVec2::new(2000.0, 10.0)),
        DVec2::new(928.0, 32.0)
    );
    assert_eq!(
        bounds.contain(DVec2::new(400.0, 300.0)),
        DVec2::new(400.0, 300.0)
    );
}

#[test]
fn test_inverted_clamp_range_resolves_to_lower_edge() {
    let bounds = Bounds {
        width: 40.0,
        height: 40.0,
        half_extents: DVec2::splat(32.0),
    };
    assert_eq!(bounds.contain(DVec2::new(5.0, 35.0)), DVec2::splat(32.0));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "negative frame delta")]
fn test_step_rejects_negative_delta_in_debug() {
    let mut state = MotionState::default();
    integrator().step(
        &mut state,
        &right(),
        FrameTime {
            dt_seconds: -DT,
            now_ms: 0.0,
        },
        DVec2::new(480.0, 320.0),
        &arena_bounds(),
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "degenerate bounds")]
fn test_step_rejects_entity_larger_than_world_in_debug() {
    let mut state = MotionState::default();
    let bounds = Bounds {
        width: 40.0,
        height: 40.0,
        half_extents: DVec2::splat(32.0),
    };
    integrator().step(
        &mut state,
        &right(),
        frame(0.0),
        DVec2::new(20.0, 20.0),
        &bounds,
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "degenerate bounds")]
fn test_step_rejects_non_finite_world_in_debug() {
    let mut state = MotionState::default();
    let bounds = Bounds {
        width: f64::INFINITY,
        ..arena_bounds()
    };
    integrator().step(
        &mut state,
        &InputState::default(),
        frame(0.0),
        DVec2::new(480.0, 320.0),
        &bounds,
    );
}

// -----------------------------------------------------------------------------
// Frame driver
// -----------------------------------------------------------------------------

fn motion_world(input: InputState) -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(MotionTuning::default());
    world.insert_resource(MovementInput { state: input });
    world.insert_resource(FrameClock {
        delta_ms: 1000.0 / 60.0,
        now_ms: 0.0,
    });
    world.insert_resource(WorldBounds::default());
    world.init_resource::<Messages<DashTriggeredEvent>>();

    let entity = world
        .spawn((
            Player,
            MotionState::default(),
            WorldPosition(DVec2::new(500.0, 500.0)),
            HalfExtents(DVec2::splat(32.0)),
        ))
        .id();

    (world, entity)
}

#[test]
fn test_apply_motion_moves_player_and_converts_ms() {
    let (mut world, entity) = motion_world(right());
    world.run_system_once(apply_motion).unwrap();

    let state = world.get::<MotionState>(entity).unwrap();
    let position = world.get::<WorldPosition>(entity).unwrap();
    let expected_vx = 900.0 * DT * (1.0 - 8.0 * DT);
    assert_close(state.velocity.x, expected_vx, 1e-6);
    assert_close(position.0.x, 500.0 + expected_vx * DT, 1e-6);
    assert_eq!(position.0.y, 500.0);
    assert!(world.resource::<Messages<DashTriggeredEvent>>().is_empty());
}

#[test]
fn test_apply_motion_writes_dash_message() {
    let (mut world, entity) = motion_world(dash(InputState::default()));
    world.run_system_once(apply_motion).unwrap();

    let messages = world.resource::<Messages<DashTriggeredEvent>>();
    assert_eq!(messages.len(), 1);

    let state = world.get::<MotionState>(entity).unwrap();
    assert_eq!(state.velocity, DVec2::new(420.0, 0.0));
}

#[test]
fn test_apply_motion_clamps_to_world_bounds() {
    let (mut world, entity) = motion_world(right());
    world.get_mut::<WorldPosition>(entity).unwrap().0 = DVec2::new(959.0, 10.0);
    world.run_system_once(apply_motion).unwrap();

    let position = world.get::<WorldPosition>(entity).unwrap();
    assert_eq!(position.0, DVec2::new(928.0, 32.0));
}
