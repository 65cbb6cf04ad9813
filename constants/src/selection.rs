use bevy::prelude::*;

/// Highlight opacity applied to the figure under the reticle.
pub const SELECTED_OPACITY: f32 = 0.5;

/// Highlight opacity of every figure that is not selected.
pub const UNSELECTED_OPACITY: f32 = 0.0;

/// Tint of the highlight overlay; alpha is driven by the selection state.
pub const HIGHLIGHT_COLOUR: Color = Color::srgba(1.0, 1.0, 1.0, UNSELECTED_OPACITY);

/// Render layer reserved for meshes that take part in reticle hit-testing.
pub const PICKABLE_LAYER: usize = 1;

/// glTF node name prefix marking a mesh as pickable. The rest of the name is its tag.
pub const PICKABLE_NAME_PREFIX: &str = "pickable_";

/// Strip the pickable prefix from a node name, yielding the figure tag.
pub fn tag_from_node_name(name: &str) -> Option<&str> {
    name.strip_prefix(PICKABLE_NAME_PREFIX)
        .filter(|tag| !tag.is_empty())
}
