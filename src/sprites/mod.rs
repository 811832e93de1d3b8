//! Sprites domain: the crate sprite and its dash feedback.
//!
//! This module handles:
//! - Spawning the player sprite at the configured point
//! - Tracking displayed half-extents for edge clamping
//! - The squash pulse that answers `DashTriggeredEvent`

pub mod player;
pub mod squash;

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::MovementSet;
use crate::sprites::player::{spawn_player, update_half_extents};
use crate::sprites::squash::squash_systems;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player).add_systems(
            Update,
            (
                update_half_extents.before(MovementSet::Integrate),
                squash_systems().after(MovementSet::Integrate),
            )
                .run_if(in_state(GameState::Run)),
        );
    }
}
