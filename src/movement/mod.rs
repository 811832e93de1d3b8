//! Movement domain: the motion integrator and the systems that drive it.

mod components;
mod events;
mod integrator;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{HalfExtents, MotionState, NEVER_DASHED_MS, Player, WorldPosition};
pub use events::DashTriggeredEvent;
pub use integrator::{Bounds, DashCue, FrameTime, MotionIntegrator, StepOutcome};
pub use resources::{DirectionalKeys, FrameClock, InputState, MotionTuning, MovementInput};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::systems::{apply_motion, read_input, tick_frame_clock};

/// Ordering hooks for systems in other domains that read or feed motion.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Input and clock sampling.
    Sample,
    /// The integrator step.
    Integrate,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<FrameClock>()
            .add_message::<DashTriggeredEvent>()
            .configure_sets(
                Update,
                (MovementSet::Sample, MovementSet::Integrate)
                    .chain()
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(
                Update,
                (read_input, tick_frame_clock).in_set(MovementSet::Sample),
            )
            .add_systems(Update, apply_motion.in_set(MovementSet::Integrate));
    }
}
