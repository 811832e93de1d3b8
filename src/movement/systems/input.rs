//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{DirectionalKeys, MovementInput};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    input.state.arrows = DirectionalKeys {
        up: keyboard.pressed(KeyCode::ArrowUp),
        down: keyboard.pressed(KeyCode::ArrowDown),
        left: keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::ArrowRight),
    };

    // ZQSD cluster (AZERTY layout)
    input.state.letters = DirectionalKeys {
        up: keyboard.pressed(KeyCode::KeyZ),
        down: keyboard.pressed(KeyCode::KeyS),
        left: keyboard.pressed(KeyCode::KeyQ),
        right: keyboard.pressed(KeyCode::KeyD),
    };

    input.state.dash_just_pressed =
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::ShiftRight);
}
