use bevy::prelude::*;

use crate::engine::assets::calibration::CalibrationStore;
use crate::engine::assets::pose::WorldPose;

/// Tracking lifecycle of the anchored content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnchorState {
    #[default]
    Untracked,
    TrackedVisible,
    TrackedHidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingEventKind {
    Found,
    Updated,
    Lost,
}

impl TrackingEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::Updated => "updated",
            Self::Lost => "lost",
        }
    }
}

/// Wayspot tracking event delivered by the tracking collaborator.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct TrackingEvent {
    pub kind: TrackingEventKind,
    pub wayspot_name: String,
    pub pose: WorldPose,
}

impl TrackingEvent {
    pub fn new(kind: TrackingEventKind, wayspot_name: impl Into<String>, pose: WorldPose) -> Self {
        Self {
            kind,
            wayspot_name: wayspot_name.into(),
            pose,
        }
    }
}

/// What the scene should look like after an event has been applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorOutput {
    /// World pose of the content root.
    pub root: Transform,
    /// Local transform of the container nested inside the root.
    pub container: Transform,
    pub visible: bool,
    /// Whether the event's wayspot had a calibration entry.
    pub calibrated: bool,
}

/// Composes tracked wayspot poses with calibration offsets.
///
/// Every event recomputes the whole output from the event and the store, so a
/// store that resolves after the first `Found` is picked up on the next event.
/// The container keeps its previous transform when the wayspot has no entry.
#[derive(Resource, Debug, Clone)]
pub struct AnchorController {
    state: AnchorState,
    root: Transform,
    container: Transform,
    visible: bool,
}

impl Default for AnchorController {
    fn default() -> Self {
        Self {
            state: AnchorState::Untracked,
            root: Transform::IDENTITY,
            container: Transform::IDENTITY,
            visible: false,
        }
    }
}

impl AnchorController {
    pub fn handle(&mut self, event: &TrackingEvent, calibration: &CalibrationStore) -> AnchorOutput {
        self.root = event.pose.to_transform();

        let offset = calibration.lookup(&event.wayspot_name);
        if let Some(offset) = offset {
            self.container = offset.to_transform();
        }

        let (state, visible) = match event.kind {
            TrackingEventKind::Found | TrackingEventKind::Updated => {
                (AnchorState::TrackedVisible, true)
            }
            TrackingEventKind::Lost => (AnchorState::TrackedHidden, false),
        };
        self.state = state;
        self.visible = visible;

        AnchorOutput {
            calibrated: offset.is_some(),
            ..self.output()
        }
    }

    /// Current output without applying a new event.
    pub fn output(&self) -> AnchorOutput {
        AnchorOutput {
            root: self.root,
            container: self.container,
            visible: self.visible,
            calibrated: false,
        }
    }

    pub fn state(&self) -> AnchorState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn container(&self) -> Transform {
        self.container
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::calibration::CalibrationDocument;

    fn calibration() -> CalibrationStore {
        let doc: CalibrationDocument = serde_json::from_str(
            r#"{
                "wp1": {"offset": {"position": [1, 0, 0], "rotation": [0, 0, 0], "scale": [1, 1, 1]}},
                "wp3": {"offset": {"position": [0, 2, 0], "scale": [3, 3, 3]}}
            }"#,
        )
        .unwrap();
        CalibrationStore::from_document(&doc)
    }

    fn event(kind: TrackingEventKind, name: &str) -> TrackingEvent {
        TrackingEvent::new(
            kind,
            name,
            WorldPose::new(Vec3::new(5.0, 0.0, -2.0), Quat::from_rotation_y(0.5)),
        )
    }

    #[test]
    fn starts_untracked_and_hidden() {
        let controller = AnchorController::default();
        assert_eq!(controller.state(), AnchorState::Untracked);
        assert!(!controller.is_visible());
        assert_eq!(controller.container(), Transform::IDENTITY);
    }

    #[test]
    fn found_places_root_and_applies_offset_locally() {
        let mut controller = AnchorController::default();
        let output = controller.handle(&event(TrackingEventKind::Found, "wp1"), &calibration());

        assert_eq!(controller.state(), AnchorState::TrackedVisible);
        assert!(output.visible);
        assert!(output.calibrated);
        assert_eq!(output.root.translation, Vec3::new(5.0, 0.0, -2.0));
        assert_eq!(output.root.rotation, Quat::from_rotation_y(0.5));
        assert_eq!(output.root.scale, Vec3::ONE);
        assert_eq!(output.container.translation, Vec3::X);
    }

    #[test]
    fn missing_calibration_keeps_previous_container() {
        let store = calibration();
        let mut controller = AnchorController::default();
        controller.handle(&event(TrackingEventKind::Found, "wp1"), &store);

        let output = controller.handle(&event(TrackingEventKind::Found, "wp2"), &store);
        assert!(!output.calibrated);
        assert!(output.visible);
        assert_eq!(output.container.translation, Vec3::X);
    }

    #[test]
    fn first_miss_leaves_identity() {
        let mut controller = AnchorController::default();
        let output = controller.handle(
            &event(TrackingEventKind::Found, "wp2"),
            &CalibrationStore::default(),
        );
        assert_eq!(output.container, Transform::IDENTITY);
        assert!(output.visible);
    }

    #[test]
    fn lost_hides_but_keeps_pose() {
        let store = calibration();
        let mut controller = AnchorController::default();
        controller.handle(&event(TrackingEventKind::Found, "wp3"), &store);
        let output = controller.handle(&event(TrackingEventKind::Lost, "wp3"), &store);

        assert_eq!(controller.state(), AnchorState::TrackedHidden);
        assert!(!output.visible);
        assert_eq!(output.root.translation, Vec3::new(5.0, 0.0, -2.0));
        assert_eq!(output.container.translation, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(output.container.scale, Vec3::splat(3.0));
    }

    #[test]
    fn updated_after_lost_shows_again() {
        let store = calibration();
        let mut controller = AnchorController::default();
        controller.handle(&event(TrackingEventKind::Lost, "wp1"), &store);
        let output = controller.handle(&event(TrackingEventKind::Updated, "wp1"), &store);
        assert_eq!(controller.state(), AnchorState::TrackedVisible);
        assert!(output.visible);
    }

    #[test]
    fn events_are_idempotent() {
        let store = calibration();
        let mut controller = AnchorController::default();
        for kind in [
            TrackingEventKind::Found,
            TrackingEventKind::Updated,
            TrackingEventKind::Lost,
        ] {
            let first = controller.handle(&event(kind, "wp1"), &store);
            let second = controller.handle(&event(kind, "wp1"), &store);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn store_populated_later_is_read_on_next_event() {
        let mut controller = AnchorController::default();
        controller.handle(
            &event(TrackingEventKind::Found, "wp1"),
            &CalibrationStore::default(),
        );
        assert_eq!(controller.container(), Transform::IDENTITY);

        controller.handle(&event(TrackingEventKind::Updated, "wp1"), &calibration());
        assert_eq!(controller.container().translation, Vec3::X);
    }
}
