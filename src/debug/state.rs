//! Debug domain: overlay state.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the motion readout is visible
    pub show_info: bool,
}
