//! Debug domain: toggling and refreshing the motion readout.

use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_overlay};
use crate::movement::{FrameClock, MotionState, MotionTuning, Player, WorldPosition};

pub(crate) fn toggle_debug_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    debug_state.show_info = !debug_state.show_info;
    if debug_state.show_info {
        spawn_debug_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

/// Text shown in the overlay for one frame.
pub fn motion_readout(
    position: &WorldPosition,
    state: &MotionState,
    tuning: &MotionTuning,
    now_ms: f64,
) -> String {
    let dash = if state.dash_ready(now_ms, tuning.dash_cooldown_ms) {
        "ready".to_string()
    } else {
        let remaining = tuning.dash_cooldown_ms - (now_ms - state.last_dash_ms);
        format!("{:.0}ms", remaining.max(0.0))
    };

    format!(
        "pos ({:.1}, {:.1})\nvel ({:.1}, {:.1})\nspeed {:.1} / {:.0}\ndash {}",
        position.0.x,
        position.0.y,
        state.velocity.x,
        state.velocity.y,
        state.speed(),
        tuning.max_speed,
        dash
    )
}

pub(crate) fn update_debug_overlay(
    debug_state: Res<DebugState>,
    clock: Res<FrameClock>,
    tuning: Res<MotionTuning>,
    player: Query<(&WorldPosition, &MotionState), With<Player>>,
    mut overlay: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        return;
    }
    let Ok((position, state)) = player.single() else {
        return;
    };

    for mut text in &mut overlay {
        text.0 = motion_readout(position, state, &tuning, clock.now_ms);
    }
}
