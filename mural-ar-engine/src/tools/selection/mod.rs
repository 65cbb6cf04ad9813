//! Reticle-driven figure selection.
//!
//! Every frame, after transforms have propagated, a ray through the viewport
//! centre is tested against the oriented bounds of pickable figure meshes.
//! The resulting nearest-first hit list is handed to [`SelectionController`],
//! which keeps a single selection and emits Deselect/Select transitions.
//! Frames with no camera or with the anchored content hidden are frames
//! without hits, so they deselect.
//!
//! ## Pick policy
//!
//! The controller takes the *farthest* registered hit, i.e. the last entry of
//! the nearest-first list. This is preserved from the shipped product and is
//! awaiting confirmation; do not switch it to nearest-first without sign-off.
//!
//! ## Effects
//!
//! ```text
//! FigureSelectionChanged
//!   ├─> apply_selection_highlight        highlight opacity 0.5 / 0.0
//!   └─> forward_selection_to_disclosure  MuralStore lookup ─> DisclosureEvent
//! ```
//!
//! A tag with no figure record keeps its highlight but shows no caption.

/// Farthest-first selection state machine and disclosure mapping.
pub mod controller;


/// Bidirectional tag to node registry.
pub mod registry;

/// Bevy systems wiring the controller to the scene.
pub mod systems;

use bevy::prelude::*;

pub use controller::{Hit, SelectionController, SelectionEvent, SelectionState};
pub use systems::{FigureSelection, FigureSelectionChanged, PickableFigure};

use super::InteractionSet;
use systems::{
    apply_selection_highlight, forward_selection_to_disclosure, register_pickable_figures,
    unregister_removed_figures, update_reticle_selection,
};

pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FigureSelection>()
            .add_event::<FigureSelectionChanged>()
            .add_systems(Update, register_pickable_figures)
            .add_systems(
                PostUpdate,
                (
                    unregister_removed_figures,
                    update_reticle_selection,
                    apply_selection_highlight,
                    forward_selection_to_disclosure,
                )
                    .chain()
                    .in_set(InteractionSet::Selection),
            );
    }
}
