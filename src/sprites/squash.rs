//! Dash squash: a short scale pulse played when a dash fires.

use bevy::ecs::message::MessageReader;
use bevy::ecs::schedule::ScheduleConfigs;
use bevy::ecs::system::ScheduleSystem;
use bevy::prelude::*;

use crate::content::SquashDef;
use crate::movement::DashTriggeredEvent;

/// Quadratic ease-out over `t` in [0, 1].
pub fn quad_ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Active scale tween on an entity.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct DashSquash {
    pub elapsed_ms: f32,
    pub duration_ms: f32,
    pub from_scale: f32,
    pub to_scale: f32,
}

impl DashSquash {
    pub fn new(def: &SquashDef) -> Self {
        Self {
            elapsed_ms: 0.0,
            duration_ms: def.duration_ms,
            from_scale: def.from_scale,
            to_scale: def.to_scale,
        }
    }

    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn scale(&self) -> f32 {
        self.from_scale + (self.to_scale - self.from_scale) * quad_ease_out(self.progress())
    }

    pub fn finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

/// Running tweens advance before new ones start, so a fresh pulse is first
/// drawn at `from_scale`.
pub(crate) fn squash_systems() -> ScheduleConfigs<ScheduleSystem> {
    (animate_dash_squash, start_dash_squash).chain().into_configs()
}

/// Start (or restart) the pulse for every dash this frame.
pub(crate) fn start_dash_squash(
    mut commands: Commands,
    mut events: MessageReader<DashTriggeredEvent>,
    squash: Res<SquashDef>,
    mut transforms: Query<&mut Transform>,
) {
    for event in events.read() {
        let tween = DashSquash::new(&squash);
        if let Ok(mut transform) = transforms.get_mut(event.entity) {
            transform.scale = Vec3::new(tween.scale(), tween.scale(), 1.0);
        }
        commands.entity(event.entity).try_insert(tween);
    }
}

pub(crate) fn animate_dash_squash(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut DashSquash, &mut Transform)>,
) {
    let dt_ms = time.delta_secs() * 1000.0;

    for (entity, mut squash, mut transform) in &mut query {
        squash.elapsed_ms += dt_ms;
        let scale = squash.scale();
        transform.scale = Vec3::new(scale, scale, 1.0);

        if squash.finished() {
            commands.entity(entity).remove::<DashSquash>();
        }
    }
}
