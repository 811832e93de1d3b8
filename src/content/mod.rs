//! Content domain: RON-backed tuning for motion, world and presentation.

mod data;
mod loader;
mod validation;

pub use data::{MotionDefaults, PlayerDef, SquashDef};
pub use loader::{ContentLoadError, load_motion_defaults, parse_motion_defaults};
pub use validation::{ValidationError, validate_defaults};

use bevy::prelude::*;
use std::path::Path;

use crate::core::GameState;

/// Location of the motion file relative to the working directory.
pub const MOTION_FILE: &str = "assets/data/motion.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerDef>()
            .init_resource::<SquashDef>()
            .add_systems(PreStartup, load_content);
    }
}

/// Load, validate and fall back to defaults when either step fails.
pub fn resolve_defaults(path: &Path) -> MotionDefaults {
    let defaults = match load_motion_defaults(path) {
        Ok(defaults) => defaults,
        Err(e) => {
            warn!("{}; using built-in motion defaults", e);
            return MotionDefaults::default();
        }
    };

    let errors = validate_defaults(&defaults);
    if errors.is_empty() {
        return defaults;
    }

    for e in &errors {
        error!("Invalid motion content: {}", e);
    }
    warn!(
        "{} validation error(s) in {}; using built-in motion defaults",
        errors.len(),
        path.display()
    );
    MotionDefaults::default()
}

fn load_content(mut commands: Commands, mut next_state: ResMut<NextState<GameState>>) {
    let defaults = resolve_defaults(Path::new(MOTION_FILE));

    info!(
        "Motion content: acc={}, max={}, friction={}, dash={} (cooldown {}ms), world={}x{}",
        defaults.tuning.acceleration,
        defaults.tuning.max_speed,
        defaults.tuning.friction,
        defaults.tuning.dash_impulse,
        defaults.tuning.dash_cooldown_ms,
        defaults.world.width,
        defaults.world.height
    );

    commands.insert_resource(defaults.tuning);
    commands.insert_resource(defaults.world);
    commands.insert_resource(defaults.player);
    commands.insert_resource(defaults.squash);
    next_state.set(GameState::Run);
}
