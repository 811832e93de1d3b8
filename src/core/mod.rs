//! Core domain: game state, camera and the world rectangle.

mod resources;
mod state;
mod systems;

pub use resources::WorldBounds;
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{setup_camera, sync_transforms};
use crate::movement::MovementSet;

/// Background behind the arena.
const CLEAR_COLOR: Color = Color::srgb(0.008, 0.541, 0.973);

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<WorldBounds>()
            .insert_resource(ClearColor(CLEAR_COLOR))
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                sync_transforms
                    .after(MovementSet::Integrate)
                    .run_if(in_state(GameState::Run)),
            );
    }
}
