use bevy::prelude::*;
use bevy::render::view::RenderLayers;
use constants::selection::PICKABLE_LAYER;

/// The single scene camera. On the web its pose is streamed from the AR
/// session; natively it stays where it was spawned.
#[derive(Component)]
pub struct ArCamera;

/// Camera pose update from the AR session.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CameraPoseEvent {
    pub position: Vec3,
    pub rotation: Quat,
}

pub fn spawn_ar_camera(mut commands: Commands) {
    #[cfg(target_arch = "wasm32")]
    let transform = Transform::IDENTITY;

    #[cfg(not(target_arch = "wasm32"))]
    let transform = Transform::from_translation(
        constants::render_settings::NATIVE_CAMERA_POSITION,
    )
    .looking_at(Vec3::ZERO, Vec3::Y);

    commands.spawn((
        ArCamera,
        Camera3d::default(),
        transform,
        // Pickable highlight meshes live on their own layer; render both.
        RenderLayers::layer(0).with(PICKABLE_LAYER),
    ));
}

/// Applies the most recent camera pose received this frame.
pub fn apply_camera_pose(
    mut events: EventReader<CameraPoseEvent>,
    mut cameras: Query<&mut Transform, With<ArCamera>>,
) {
    let Some(pose) = events.read().last() else {
        return;
    };
    for mut transform in &mut cameras {
        transform.translation = pose.position;
        transform.rotation = pose.rotation;
    }
}
