// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;

// Crate engine modules
use crate::engine::{
    anchor::AnchorPlugin,
    camera::{apply_camera_pose, spawn_ar_camera},
    core::window_config::{clear_colour, create_window_config},
    loading::{DataLoadingPlugin, route::MuralRoute},
    scene::content_root::{apply_mural_scale, spawn_content_root},
};
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::tools::InteractionPlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .insert_resource(clear_colour())
        .insert_resource(MuralRoute::from_environment())
        .add_plugins(DataLoadingPlugin)
        .add_plugins(WebRpcPlugin)
        .add_plugins(AnchorPlugin)
        .add_plugins(InteractionPlugin);

    app.add_systems(Startup, (spawn_lighting, spawn_ar_camera, spawn_content_root))
        .add_systems(Update, (apply_camera_pose, apply_mural_scale));

    app
}

fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
