//! Core domain: shared resources describing the play area.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Size of the world rectangle in world units. The camera always fits this
/// rectangle into the window, so it doubles as the visible screen.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WorldBounds {
    pub width: f64,
    pub height: f64,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 640.0,
        }
    }
}

impl WorldBounds {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}
