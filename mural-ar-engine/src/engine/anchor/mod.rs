//! Wayspot anchoring.
//!
//! Tracking events arrive from the RPC bridge (web) or the keyboard simulator
//! (native). The controller is a plain value; the systems here only feed it
//! and copy its output onto the content root and container.
//!
//! ```text
//! TrackingEvent ──> apply_tracking_events ──> AnchorController
//!                                                 │
//!                   sync_content_root <───────────┘
//!                     ├─> ContentRoot:      world pose + visibility
//!                     └─> ContentContainer: calibration offset (local)
//! ```
//!
//! Both systems run in `Update`; hit-testing runs in `PostUpdate` after
//! transform propagation, so a tracking event is always fully applied before
//! the next reticle test.

pub mod controller;
pub mod systems;

use bevy::prelude::*;

pub use controller::{AnchorController, AnchorState, TrackingEvent, TrackingEventKind};

use systems::{apply_tracking_events, sync_content_root};

pub struct AnchorPlugin;

impl Plugin for AnchorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnchorController>()
            .add_event::<TrackingEvent>()
            .add_systems(
                Update,
                (apply_tracking_events, sync_content_root).chain(),
            );

        #[cfg(not(target_arch = "wasm32"))]
        {
            app.add_systems(
                Update,
                systems::simulate_tracking_keys
                    .run_if(resource_exists::<ButtonInput<KeyCode>>)
                    .before(apply_tracking_events),
            );
        }
    }
}
