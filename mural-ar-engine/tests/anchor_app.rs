use bevy::prelude::*;
use mural_ar_engine::engine::anchor::{AnchorController, AnchorPlugin, AnchorState, TrackingEvent, TrackingEventKind};
use mural_ar_engine::engine::assets::calibration::{CalibrationDocument, CalibrationStore};
use mural_ar_engine::engine::assets::pose::WorldPose;
use mural_ar_engine::engine::scene::content_root::{ContentContainer, ContentRoot};
use mural_ar_engine::tools::debug_log::DebugLog;

fn calibration() -> CalibrationStore {
    let doc: CalibrationDocument = serde_json::from_str(
        r#"{"wp1":{"offset":{"position":[1,0,0],"rotation":[0,0,0],"scale":[1,1,1]}}}"#,
    )
    .unwrap();
    CalibrationStore::from_document(&doc)
}

fn app_with_scene(store: CalibrationStore) -> (App, Entity, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(AnchorPlugin)
        .insert_resource(store)
        .init_resource::<DebugLog>();

    let container = app
        .world_mut()
        .spawn((ContentContainer, Transform::IDENTITY, Visibility::Inherited))
        .id();
    let root = app
        .world_mut()
        .spawn((ContentRoot, Transform::IDENTITY, Visibility::Hidden))
        .add_child(container)
        .id();

    app.update();
    (app, root, container)
}

fn send(app: &mut App, kind: TrackingEventKind, name: &str, position: Vec3) {
    app.world_mut().send_event(TrackingEvent::new(
        kind,
        name,
        WorldPose::new(position, Quat::IDENTITY),
    ));
    app.update();
}

fn transform(app: &App, entity: Entity) -> Transform {
    *app.world().get::<Transform>(entity).unwrap()
}

fn visibility(app: &App, entity: Entity) -> Visibility {
    *app.world().get::<Visibility>(entity).unwrap()
}

#[test]
fn found_applies_pose_offset_and_visibility() {
    let (mut app, root, container) = app_with_scene(calibration());
    assert_eq!(visibility(&app, root), Visibility::Hidden);

    send(&mut app, TrackingEventKind::Found, "wp1", Vec3::new(0.0, 0.0, -3.0));

    assert_eq!(transform(&app, root).translation, Vec3::new(0.0, 0.0, -3.0));
    assert_eq!(transform(&app, container).translation, Vec3::X);
    assert_eq!(visibility(&app, root), Visibility::Visible);
    assert_eq!(
        app.world().resource::<AnchorController>().state(),
        AnchorState::TrackedVisible
    );
}

#[test]
fn uncalibrated_wayspot_leaves_container_alone() {
    let (mut app, root, container) = app_with_scene(calibration());

    send(&mut app, TrackingEventKind::Found, "wp1", Vec3::ZERO);
    send(&mut app, TrackingEventKind::Found, "wp2", Vec3::Y);

    assert_eq!(transform(&app, root).translation, Vec3::Y);
    assert_eq!(transform(&app, container).translation, Vec3::X);
    assert_eq!(visibility(&app, root), Visibility::Visible);
}

#[test]
fn lost_hides_and_keeps_last_pose() {
    let (mut app, root, container) = app_with_scene(calibration());

    send(&mut app, TrackingEventKind::Found, "wp1", Vec3::new(2.0, 0.0, 0.0));
    send(&mut app, TrackingEventKind::Lost, "wp1", Vec3::new(2.5, 0.0, 0.0));

    assert_eq!(visibility(&app, root), Visibility::Hidden);
    assert_eq!(transform(&app, root).translation, Vec3::new(2.5, 0.0, 0.0));
    assert_eq!(transform(&app, container).translation, Vec3::X);

    send(&mut app, TrackingEventKind::Updated, "wp1", Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(visibility(&app, root), Visibility::Visible);
}

#[test]
fn store_arriving_after_found_applies_on_next_event() {
    let (mut app, _root, container) = app_with_scene(CalibrationStore::default());

    send(&mut app, TrackingEventKind::Found, "wp1", Vec3::ZERO);
    assert_eq!(transform(&app, container), Transform::IDENTITY);

    app.insert_resource(calibration());
    send(&mut app, TrackingEventKind::Updated, "wp1", Vec3::ZERO);
    assert_eq!(transform(&app, container).translation, Vec3::X);
}
