use bevy::prelude::*;

use crate::engine::assets::mural::MuralStore;
use crate::engine::loading::route::MuralRoute;
use constants::data_source::mural_scene_path;

/// Top-level node positioned at the tracked wayspot.
#[derive(Component)]
pub struct ContentRoot;

/// Child of [`ContentRoot`] carrying the wayspot calibration offset.
#[derive(Component)]
pub struct ContentContainer;

/// Child of [`ContentContainer`] holding the mural scene, scaled by the mural's
/// uniform scale so calibration offsets and authored scale never overwrite
/// each other.
#[derive(Component)]
pub struct MuralFigures;

/// Spawns root → container → figures. Content starts hidden until a wayspot is found.
pub fn spawn_content_root(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    route: Res<MuralRoute>,
) {
    let scene_path = mural_scene_path(&route.mural_id);
    info!("Spawning mural scene from {}", scene_path);

    commands
        .spawn((
            ContentRoot,
            Name::new("ContentRoot"),
            Transform::IDENTITY,
            Visibility::Hidden,
        ))
        .with_children(|root| {
            root.spawn((
                ContentContainer,
                Name::new("ContentContainer"),
                Transform::IDENTITY,
                Visibility::Inherited,
            ))
            .with_children(|container| {
                container.spawn((
                    MuralFigures,
                    Name::new("MuralFigures"),
                    SceneRoot(asset_server.load(scene_path)),
                    Transform::IDENTITY,
                    Visibility::Inherited,
                ));
            });
        });
}

/// Applies the mural's uniform scale once the description resolves.
pub fn apply_mural_scale(
    murals: Res<MuralStore>,
    mut figures: Query<&mut Transform, With<MuralFigures>>,
) {
    if !murals.is_changed() {
        return;
    }
    let Some(mural) = murals.get() else {
        return;
    };

    for mut transform in &mut figures {
        transform.scale = Vec3::splat(mural.scale());
    }
}
