//! Player sprite spawn and display-size tracking.

use bevy::math::DVec2;
use bevy::prelude::*;
use std::path::Path;

use crate::content::PlayerDef;
use crate::movement::{HalfExtents, MotionState, Player, WorldPosition};

/// Directory the asset server resolves relative paths against.
const ASSET_ROOT: &str = "assets";

/// Placeholder tint when the crate texture is missing.
const FALLBACK_COLOR: Color = Color::srgb(0.61, 0.41, 0.2);

/// Textured sprite when an image is available, otherwise a flat box of the
/// fallback size so the player stays visible.
pub fn player_sprite(image: Option<Handle<Image>>, fallback: Vec2) -> Sprite {
    match image {
        Some(image) => Sprite::from_image(image),
        None => Sprite::from_color(FALLBACK_COLOR, fallback),
    }
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    player: Res<PlayerDef>,
) {
    let (x, y) = player.spawn;
    let (w, h) = player.fallback_size;
    let fallback = Vec2::new(w, h);

    let image = Path::new(ASSET_ROOT)
        .join(&player.texture)
        .is_file()
        .then(|| asset_server.load(player.texture.clone()));
    if image.is_none() {
        warn!(
            "Texture {} not found under {}/, drawing a {}x{} box instead",
            player.texture, ASSET_ROOT, w, h
        );
    }

    info!(
        "Spawning player: texture={}, spawn=({}, {})",
        player.texture, x, y
    );

    commands.spawn((
        Player,
        MotionState::default(),
        WorldPosition(DVec2::new(x, y)),
        HalfExtents::from_size(fallback),
        player_sprite(image, fallback),
        Transform::default(),
    ));
}

/// Displayed size of a sprite before scaling: explicit size, then the loaded
/// image, then the configured fallback.
pub fn base_size(sprite: &Sprite, images: &Assets<Image>, fallback: Vec2) -> Vec2 {
    sprite
        .custom_size
        .or_else(|| images.get(&sprite.image).map(|image| image.size_f32()))
        .unwrap_or(fallback)
}

pub(crate) fn update_half_extents(
    images: Res<Assets<Image>>,
    player: Res<PlayerDef>,
    mut query: Query<(&Sprite, &Transform, &mut HalfExtents), With<Player>>,
) {
    let fallback = Vec2::new(player.fallback_size.0, player.fallback_size.1);

    for (sprite, transform, mut half_extents) in &mut query {
        let size = base_size(sprite, &images, fallback) * transform.scale.truncate().abs();
        half_extents.set_if_neq(HalfExtents::from_size(size));
    }
}
