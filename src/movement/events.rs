//! Movement domain: messages emitted by locomotion.

use bevy::ecs::message::Message;
use bevy::math::DVec2;
use bevy::prelude::*;

/// Emitted on the frame a dash impulse is applied.
#[derive(Debug)]
pub struct DashTriggeredEvent {
    pub entity: Entity,
    pub direction: DVec2,
    pub at_ms: f64,
}

impl Message for DashTriggeredEvent {}
