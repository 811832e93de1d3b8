//! Debug domain: F3 motion readout for tuning sessions.

mod state;
mod systems;
mod ui;

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::systems::{toggle_debug_overlay, update_debug_overlay};
use crate::movement::MovementSet;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_debug_overlay,
                update_debug_overlay.after(MovementSet::Integrate),
            ),
        );
    }
}
