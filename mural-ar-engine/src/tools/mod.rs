//! Interactive tools layered over the anchored mural.
//!
//! Selection and disclosure both run in `PostUpdate`, after transform
//! propagation, so the reticle always tests the pose written by the anchor
//! systems earlier in the same frame:
//!
//! ```text
//! Update:      tracking events ─> AnchorController ─> ContentRoot
//! PostUpdate:  TransformPropagate, VisibilityPropagate
//!              └─> InteractionSet::Selection  (hit-test, highlight)
//!                  └─> InteractionSet::Disclosure (state machine, overlay)
//! ```

/// Bounded in-app log backing the debug toggle panel.
pub mod debug_log;

/// Caption/detail disclosure state machine and overlay.
pub mod disclosure;

/// Reticle hit-testing and single-selection controller.
pub mod selection;

use bevy::prelude::*;
use bevy::render::view::VisibilitySystems;
use bevy::transform::TransformSystem;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionSet {
    Selection,
    Disclosure,
}

/// Orders the interaction sets after transform and visibility propagation.
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<debug_log::DebugLog>()
            .configure_sets(
                PostUpdate,
                (InteractionSet::Selection, InteractionSet::Disclosure)
                    .chain()
                    .after(TransformSystem::TransformPropagate)
                    .after(VisibilitySystems::VisibilityPropagate),
            )
            .add_plugins((selection::SelectionPlugin, disclosure::DisclosurePlugin));
    }
}
