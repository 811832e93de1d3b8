//! Core domain: game state definitions.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Tuning not loaded yet; nothing moves.
    #[default]
    Boot,
    Run,
}
