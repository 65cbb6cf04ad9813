//! Caption/detail disclosure overlay.
//!
//! Three states driven by selection changes and two tap gestures:
//!
//! ```text
//!            Select                 TapCaption
//! Hidden ────────────> CaptionOnly <──────────> CaptionAndDetail
//!   ^                      │   TapCaption / TapDetail   │
//!   └──────── Hide ────────┴────────────────────────────┘
//! ```
//!
//! The overlay also carries the reticle and the debug log toggle.

/// Button interaction systems turning taps into disclosure events.
pub mod interactions;

/// Pure disclosure state machine and the resource holding it.
pub mod state;

/// Overlay spawning and state reflection systems.
pub mod ui;

use bevy::prelude::*;

pub use state::{Disclosure, DisclosureEvent, DisclosureState, DisclosureView};

use super::InteractionSet;
use interactions::{
    apply_disclosure_events, caption_button_interaction, debug_toggle_interaction,
    detail_button_interaction,
};
use ui::{reflect_debug_log, reflect_disclosure_view, spawn_disclosure_ui};

pub struct DisclosurePlugin;

impl Plugin for DisclosurePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Disclosure>()
            .add_event::<DisclosureEvent>()
            .add_systems(Startup, spawn_disclosure_ui)
            .add_systems(
                Update,
                (
                    caption_button_interaction,
                    detail_button_interaction,
                    debug_toggle_interaction,
                ),
            )
            .add_systems(
                PostUpdate,
                (apply_disclosure_events, reflect_disclosure_view, reflect_debug_log)
                    .chain()
                    .in_set(InteractionSet::Disclosure),
            );
    }
}
