use bevy::prelude::*;

use super::controller::{AnchorController, TrackingEvent, TrackingEventKind};
use crate::engine::assets::calibration::CalibrationStore;
use crate::engine::scene::content_root::{ContentContainer, ContentRoot};
use crate::tools::debug_log::DebugLog;

/// Feeds tracking events through the anchor controller in arrival order.
pub fn apply_tracking_events(
    mut events: EventReader<TrackingEvent>,
    mut controller: ResMut<AnchorController>,
    calibration: Res<CalibrationStore>,
    mut debug_log: ResMut<DebugLog>,
) {
    for event in events.read() {
        let output = controller.handle(event, &calibration);

        if !output.calibrated {
            if calibration.is_loaded() {
                debug!(
                    "No calibration for wayspot '{}', keeping previous offset",
                    event.wayspot_name
                );
            } else {
                debug!(
                    "Calibration not loaded yet, keeping previous offset for '{}'",
                    event.wayspot_name
                );
            }
        }

        debug_log.record(format!(
            "wayspot {} '{}'{}",
            event.kind.as_str(),
            event.wayspot_name,
            if output.calibrated { "" } else { " (uncalibrated)" }
        ));
    }
}

/// Writes the controller's output onto the scene whenever it changes, or when
/// the content root is spawned after tracking already started.
pub fn sync_content_root(
    controller: Res<AnchorController>,
    added_roots: Query<(), Added<ContentRoot>>,
    mut roots: Query<(&mut Transform, &mut Visibility), (With<ContentRoot>, Without<ContentContainer>)>,
    mut containers: Query<&mut Transform, (With<ContentContainer>, Without<ContentRoot>)>,
) {
    if !controller.is_changed() && added_roots.is_empty() {
        return;
    }

    let output = controller.output();

    for (mut transform, mut visibility) in &mut roots {
        *transform = output.root;
        *visibility = if output.visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }

    for mut transform in &mut containers {
        *transform = output.container;
    }
}

/// Native stand-in for the tracking collaborator.
///
/// `F` finds the debug wayspot, `U` nudges it along X, `L` loses it.
#[cfg(not(target_arch = "wasm32"))]
pub fn simulate_tracking_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut position: Local<Vec3>,
    mut events: EventWriter<TrackingEvent>,
) {
    use crate::engine::assets::pose::WorldPose;
    use constants::tracking::DEBUG_WAYSPOT_NAME;

    let kind = if keyboard.just_pressed(KeyCode::KeyF) {
        TrackingEventKind::Found
    } else if keyboard.just_pressed(KeyCode::KeyU) {
        position.x += 0.1;
        TrackingEventKind::Updated
    } else if keyboard.just_pressed(KeyCode::KeyL) {
        TrackingEventKind::Lost
    } else {
        return;
    };

    events.write(TrackingEvent::new(
        kind,
        DEBUG_WAYSPOT_NAME,
        WorldPose::new(*position, Quat::IDENTITY),
    ));
}
