//! Movement domain: frame driver around the motion integrator.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::WorldBounds;
use crate::movement::{
    Bounds, DashTriggeredEvent, FrameClock, FrameTime, HalfExtents, MotionIntegrator,
    MotionState, MotionTuning, MovementInput, Player, WorldPosition,
};

pub(crate) fn tick_frame_clock(time: Res<Time>, mut clock: ResMut<FrameClock>) {
    clock.delta_ms = time.delta_secs_f64() * 1000.0;
    clock.now_ms = time.elapsed_secs_f64() * 1000.0;
}

pub(crate) fn apply_motion(
    clock: Res<FrameClock>,
    input: Res<MovementInput>,
    tuning: Res<MotionTuning>,
    world: Res<WorldBounds>,
    mut dash_events: MessageWriter<DashTriggeredEvent>,
    mut query: Query<
        (Entity, &mut MotionState, &mut WorldPosition, &HalfExtents),
        With<Player>,
    >,
) {
    let integrator = MotionIntegrator::new(*tuning);
    let frame = FrameTime {
        dt_seconds: clock.dt_seconds(),
        now_ms: clock.now_ms,
    };

    for (entity, mut state, mut position, half_extents) in &mut query {
        let bounds = Bounds {
            width: world.width,
            height: world.height,
            half_extents: half_extents.0,
        };

        let outcome = integrator.step(&mut state, &input.state, frame, position.0, &bounds);
        position.0 = outcome.position;

        if let Some(cue) = outcome.dash {
            debug!(
                "Dash: entity={:?}, dir=({:.2}, {:.2}), speed={:.1}",
                entity,
                cue.direction.x,
                cue.direction.y,
                state.speed()
            );
            dash_events.write(DashTriggeredEvent {
                entity,
                direction: cue.direction,
                at_ms: cue.at_ms,
            });
        }
    }
}
