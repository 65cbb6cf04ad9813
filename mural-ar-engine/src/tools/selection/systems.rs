use bevy::color::Alpha;
use bevy::prelude::*;
use bevy::render::primitives::Aabb;
use bevy::render::view::RenderLayers;
use constants::selection::{
    HIGHLIGHT_COLOUR, PICKABLE_LAYER, SELECTED_OPACITY, UNSELECTED_OPACITY, tag_from_node_name,
};

use super::controller::{SelectionController, SelectionEvent, disclosure_event_for};
use super::hit_test::{hit_test, reticle_ray};
use crate::engine::anchor::AnchorController;
use crate::engine::assets::mural::MuralStore;
use crate::engine::camera::ArCamera;
use crate::engine::scene::content_root::ContentRoot;
use crate::rpc::web_rpc::WebRpcInterface;
use crate::tools::debug_log::DebugLog;
use crate::tools::disclosure::DisclosureEvent;

/// Selection controller keyed by scene entities.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct FigureSelection(pub SelectionController<Entity>);

/// Mesh registered for reticle picking.
#[derive(Component, Debug, Clone)]
pub struct PickableFigure {
    pub tag: String,
}

/// Selection transition for this frame, in emission order.
#[derive(Event, Debug, Clone)]
pub struct FigureSelectionChanged(pub SelectionEvent<Entity>);

/// Registers newly spawned meshes under the content root whose node name
/// carries the pickable prefix, moving them onto the pickable layer with
/// their own transparent highlight material.
pub fn register_pickable_figures(
    mut commands: Commands,
    new_meshes: Query<Entity, (Added<Mesh3d>, Without<PickableFigure>)>,
    names: Query<&Name>,
    parents: Query<&ChildOf>,
    roots: Query<(), With<ContentRoot>>,
    mut selection: ResMut<FigureSelection>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut debug_log: ResMut<DebugLog>,
) {
    for entity in &new_meshes {
        // glTF primitives carry the mesh name; the pickable name sits on the
        // node above them.
        let Ok(node) = parents.get(entity).map(ChildOf::parent) else {
            continue;
        };
        let mut tag = None;
        let mut under_root = false;
        let mut current = node;
        loop {
            if roots.contains(current) {
                under_root = true;
                break;
            }
            if tag.is_none() {
                tag = names
                    .get(current)
                    .ok()
                    .and_then(|name| tag_from_node_name(name.as_str()))
                    .map(str::to_string);
            }
            match parents.get(current) {
                Ok(child_of) => current = child_of.parent(),
                Err(_) => break,
            }
        }

        let (Some(tag), true) = (tag, under_root) else {
            continue;
        };

        if let Some(existing) = selection.registry().node_of(&tag) {
            warn!(
                "Figure tag '{}' already carried by {:?}; {:?} stays on standby",
                tag, existing, entity
            );
        }

        let highlight = materials.add(StandardMaterial {
            base_color: HIGHLIGHT_COLOUR,
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            cull_mode: None,
            ..default()
        });

        commands.entity(entity).insert((
            PickableFigure { tag: tag.clone() },
            MeshMaterial3d(highlight),
            RenderLayers::layer(0).with(PICKABLE_LAYER),
        ));
        selection.register(tag.clone(), entity);
        debug_log.record(format!("registered pickable figure '{}'", tag));
    }
}

/// Drops figures the engine despawned, deselecting them if needed.
pub fn unregister_removed_figures(
    mut removed: RemovedComponents<PickableFigure>,
    mut selection: ResMut<FigureSelection>,
    mut changes: EventWriter<FigureSelectionChanged>,
) {
    for entity in removed.read() {
        if let Some(event) = selection.node_removed(entity) {
            changes.write(FigureSelectionChanged(event));
        }
    }
}

/// Hit-tests the reticle against visible pickable figures once per frame.
///
/// A frame without an active camera or without anchored content counts as a
/// frame with no hits.
pub fn update_reticle_selection(
    cameras: Query<(&Camera, &GlobalTransform), With<ArCamera>>,
    anchor: Res<AnchorController>,
    pickables: Query<
        (Entity, &GlobalTransform, &Aabb, &RenderLayers, &InheritedVisibility),
        With<PickableFigure>,
    >,
    mut selection: ResMut<FigureSelection>,
    mut changes: EventWriter<FigureSelectionChanged>,
) {
    let ray = cameras
        .single()
        .ok()
        .filter(|(camera, _)| camera.is_active)
        .map(|(_, camera_transform)| reticle_ray(camera_transform));

    let hits = match ray {
        Some(ray) if anchor.is_visible() => {
            let pickable_layer = RenderLayers::layer(PICKABLE_LAYER);
            let candidates = pickables
                .iter()
                .filter(|(_, _, _, layers, visibility)| {
                    layers.intersects(&pickable_layer) && visibility.get()
                })
                .map(|(entity, transform, aabb, _, _)| (entity, transform, aabb));
            hit_test(ray.origin, ray.direction.as_vec3(), candidates)
        }
        _ => Vec::new(),
    };

    for event in selection.update(&hits) {
        changes.write(FigureSelectionChanged(event));
    }
}

/// Sets highlight opacity: selected figures glow, deselected ones go clear.
pub fn apply_selection_highlight(
    mut changes: EventReader<FigureSelectionChanged>,
    highlights: Query<&MeshMaterial3d<StandardMaterial>, With<PickableFigure>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for FigureSelectionChanged(event) in changes.read() {
        let (node, opacity) = match event {
            SelectionEvent::Select { node, .. } => (Some(*node), SELECTED_OPACITY),
            SelectionEvent::Deselect { node, .. } => (*node, UNSELECTED_OPACITY),
        };
        let Some(handle) = node.and_then(|node| highlights.get(node).ok()) else {
            continue;
        };
        if let Some(material) = materials.get_mut(&handle.0) {
            material.base_color = material.base_color.with_alpha(opacity);
        }
    }
}

/// Resolves selections against the mural and drives the disclosure panel.
pub fn forward_selection_to_disclosure(
    mut changes: EventReader<FigureSelectionChanged>,
    murals: Res<MuralStore>,
    mut disclosure: EventWriter<DisclosureEvent>,
    mut debug_log: ResMut<DebugLog>,
    mut rpc: Option<ResMut<WebRpcInterface>>,
) {
    for FigureSelectionChanged(event) in changes.read() {
        let (tag, selected) = match event {
            SelectionEvent::Select { tag, .. } => (tag, true),
            SelectionEvent::Deselect { tag, .. } => (tag, false),
        };

        match disclosure_event_for(event, murals.get()) {
            Some(disclosure_event) => {
                disclosure.write(disclosure_event);
            }
            None if murals.is_loaded() => {
                warn!("No figure description for selected tag '{}'", tag);
            }
            None => {
                debug!("Mural not loaded yet, no caption for '{}'", tag);
            }
        }

        debug_log.record(format!(
            "{} '{}'",
            if selected { "select" } else { "deselect" },
            tag
        ));

        if let Some(rpc) = rpc.as_mut() {
            rpc.send_notification(
                "selection_changed",
                serde_json::json!({ "tag": tag, "selected": selected }),
            );
        }
    }
}
