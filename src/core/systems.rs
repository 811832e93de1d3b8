//! Core domain: camera setup and world-to-screen sync.

use bevy::camera::ScalingMode;
use bevy::math::DVec2;
use bevy::prelude::*;

use crate::core::resources::WorldBounds;
use crate::movement::WorldPosition;

pub(crate) fn setup_camera(mut commands: Commands, bounds: Res<WorldBounds>) {
    let size = bounds.size();
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: size.x,
                min_height: size.y,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Map a top-left, y-down world point onto Bevy's centred, y-up plane.
pub fn world_to_screen(position: DVec2, bounds: &WorldBounds) -> Vec2 {
    Vec2::new(
        (position.x - bounds.width * 0.5) as f32,
        (bounds.height * 0.5 - position.y) as f32,
    )
}

pub(crate) fn sync_transforms(
    bounds: Res<WorldBounds>,
    mut query: Query<(&WorldPosition, &mut Transform), Changed<WorldPosition>>,
) {
    for (position, mut transform) in &mut query {
        let screen = world_to_screen(position.0, &bounds);
        transform.translation.x = screen.x;
        transform.translation.y = screen.y;
    }
}
