//! Data definitions for the motion content file.
//!
//! These structs mirror assets/data/motion.ron. Every section falls back to
//! its default when omitted, so a file only needs the values it overrides.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::WorldBounds;
use crate::movement::MotionTuning;

pub const MOTION_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionDefaults {
    pub schema_version: u32,
    pub tuning: MotionTuning,
    pub world: WorldBounds,
    pub player: PlayerDef,
    pub squash: SquashDef,
}

impl Default for MotionDefaults {
    fn default() -> Self {
        Self {
            schema_version: MOTION_SCHEMA_VERSION,
            tuning: MotionTuning::default(),
            world: WorldBounds::default(),
            player: PlayerDef::default(),
            squash: SquashDef::default(),
        }
    }
}

// ============================================================================
// Player (spawn point and sprite)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerDef {
    /// Texture path relative to the asset root.
    pub texture: String,
    /// Spawn point in world space (top-left origin, y down).
    pub spawn: (f64, f64),
    /// Display size used for clamping until the texture has loaded.
    pub fallback_size: (f32, f32),
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            texture: "loot_crate.png".to_string(),
            spawn: (500.0, 500.0),
            fallback_size: (64.0, 64.0),
        }
    }
}

// ============================================================================
// Dash squash cue
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SquashDef {
    pub from_scale: f32,
    pub to_scale: f32,
    pub duration_ms: f32,
}

impl Default for SquashDef {
    fn default() -> Self {
        Self {
            from_scale: 0.9,
            to_scale: 1.0,
            duration_ms: 100.0,
        }
    }
}
