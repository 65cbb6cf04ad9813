use std::hash::Hash;

use super::registry::TagRegistry;
use crate::engine::assets::mural::MuralDescription;
use crate::tools::disclosure::DisclosureEvent;

/// One hit-test intersection. Lists of hits are ordered nearest-first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<N> {
    pub distance: f32,
    pub node: N,
}

/// Selection transitions emitted by [`SelectionController::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent<N> {
    Select { tag: String, node: N },
    /// `node` is `None` when the engine already removed the item.
    Deselect { tag: String, node: Option<N> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    NoSelection,
    Selected(String),
}

#[derive(Debug, Clone)]
struct ActiveSelection<N> {
    tag: String,
    node: Option<N>,
}

/// Keeps at most one figure selected across per-frame hit-test results.
///
/// Pick policy is farthest-first: of the registered nodes in a nearest-first
/// hit list, the last one wins. This matches the shipped behaviour and is
/// pending product confirmation, so keep it until told otherwise.
#[derive(Debug, Clone)]
pub struct SelectionController<N> {
    registry: TagRegistry<N>,
    current: Option<ActiveSelection<N>>,
}

impl<N> Default for SelectionController<N> {
    fn default() -> Self {
        Self {
            registry: TagRegistry::default(),
            current: None,
        }
    }
}

impl<N: Copy + Eq + Hash> SelectionController<N> {
    pub fn register(&mut self, tag: impl Into<String>, node: N) {
        self.registry.register(tag, node);
    }

    pub fn registry(&self) -> &TagRegistry<N> {
        &self.registry
    }

    pub fn state(&self) -> SelectionState {
        match &self.current {
            Some(active) => SelectionState::Selected(active.tag.clone()),
            None => SelectionState::NoSelection,
        }
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.current.as_ref().map(|active| active.tag.as_str())
    }

    /// Farthest-first pick among registered nodes.
    pub fn pick<'a>(&self, hits: &'a [Hit<N>]) -> Option<(&'a Hit<N>, &str)> {
        hits.iter()
            .rev()
            .find_map(|hit| self.registry.tag_of(hit.node).map(|tag| (hit, tag)))
    }

    /// Advance one frame. Deselect always precedes Select when switching.
    pub fn update(&mut self, hits: &[Hit<N>]) -> Vec<SelectionEvent<N>> {
        let Some((hit, tag)) = self.pick(hits) else {
            return self.clear().into_iter().collect();
        };

        if self.selected_tag() == Some(tag) {
            return Vec::new();
        }

        let tag = tag.to_string();
        let node = hit.node;
        let mut events: Vec<_> = self.clear().into_iter().collect();
        self.current = Some(ActiveSelection {
            tag: tag.clone(),
            node: Some(node),
        });
        events.push(SelectionEvent::Select { tag, node });
        events
    }

    /// Drop the current selection, if any.
    pub fn clear(&mut self) -> Option<SelectionEvent<N>> {
        self.current.take().map(|active| SelectionEvent::Deselect {
            tag: active.tag,
            node: active.node,
        })
    }

    /// The engine removed a node. Clears the selection when it was selected.
    pub fn node_removed(&mut self, node: N) -> Option<SelectionEvent<N>> {
        self.registry.unregister_node(node);

        let selected_node = self.current.as_ref().and_then(|active| active.node);
        if selected_node != Some(node) {
            return None;
        }
        self.current.take().map(|active| SelectionEvent::Deselect {
            tag: active.tag,
            node: None,
        })
    }
}

/// Disclosure input for a selection transition.
///
/// A select whose tag has no figure record yields `None`: the highlight stays
/// but no caption is shown.
pub fn disclosure_event_for<N>(
    event: &SelectionEvent<N>,
    mural: Option<&MuralDescription>,
) -> Option<DisclosureEvent> {
    match event {
        SelectionEvent::Select { tag, .. } => {
            let figure = mural?.figure(tag)?;
            Some(DisclosureEvent::Select {
                caption: figure.caption.clone(),
                detail: figure.detail.clone(),
            })
        }
        SelectionEvent::Deselect { .. } => Some(DisclosureEvent::Hide),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hit(distance: f32, node: u32) -> Hit<u32> {
        Hit { distance, node }
    }

    fn controller() -> SelectionController<u32> {
        let mut controller = SelectionController::default();
        controller.register("near", 1);
        controller.register("far", 2);
        controller.register("other", 3);
        controller
    }

    #[test]
    fn picks_farthest_hit() {
        let mut controller = controller();
        let events = controller.update(&[hit(1.0, 1), hit(4.0, 2)]);
        assert_eq!(
            events,
            vec![SelectionEvent::Select {
                tag: "far".to_string(),
                node: 2
            }]
        );
        assert_eq!(controller.state(), SelectionState::Selected("far".to_string()));
    }

    #[test]
    fn same_tag_every_frame_selects_once() {
        let mut controller = controller();
        let hits = [hit(1.0, 3)];
        assert_eq!(controller.update(&hits).len(), 1);
        for _ in 0..10 {
            assert!(controller.update(&hits).is_empty());
        }
    }

    #[test]
    fn switching_deselects_before_selecting() {
        let mut controller = controller();
        controller.update(&[hit(1.0, 1)]);
        let events = controller.update(&[hit(1.0, 3)]);
        assert_eq!(
            events,
            vec![
                SelectionEvent::Deselect {
                    tag: "near".to_string(),
                    node: Some(1)
                },
                SelectionEvent::Select {
                    tag: "other".to_string(),
                    node: 3
                },
            ]
        );
    }

    #[test]
    fn no_hits_deselects_once() {
        let mut controller = controller();
        controller.update(&[hit(1.0, 1)]);
        assert_eq!(controller.update(&[]).len(), 1);
        assert!(controller.update(&[]).is_empty());
        assert_eq!(controller.state(), SelectionState::NoSelection);
    }

    #[test]
    fn unregistered_hits_are_skipped() {
        let mut controller = controller();
        let events = controller.update(&[hit(1.0, 1), hit(2.0, 99)]);
        assert_eq!(controller.selected_tag(), Some("near"));
        assert_eq!(events.len(), 1);

        assert_eq!(controller.update(&[hit(2.0, 99)]).len(), 1);
        assert_eq!(controller.state(), SelectionState::NoSelection);
    }

    #[test]
    fn removing_selected_node_clears_selection() {
        let mut controller = controller();
        controller.update(&[hit(1.0, 2)]);
        assert_eq!(
            controller.node_removed(2),
            Some(SelectionEvent::Deselect {
                tag: "far".to_string(),
                node: None
            })
        );
        assert_eq!(controller.state(), SelectionState::NoSelection);
        assert!(controller.registry().tag_of(2).is_none());
    }

    #[test]
    fn removing_other_node_keeps_selection() {
        let mut controller = controller();
        controller.update(&[hit(1.0, 2)]);
        assert_eq!(controller.node_removed(1), None);
        assert_eq!(controller.selected_tag(), Some("far"));
    }

    #[test]
    fn resolves_caption_for_known_tag_only() {
        let mural = MuralDescription::from_value(&json!({
            "figures": [{"tag": "fig1", "caption": "A", "detail": "Long A"}]
        }))
        .unwrap();

        let known = SelectionEvent::Select {
            tag: "fig1".to_string(),
            node: 0u32,
        };
        assert_eq!(
            disclosure_event_for(&known, Some(&mural)),
            Some(DisclosureEvent::Select {
                caption: "A".to_string(),
                detail: "Long A".to_string()
            })
        );

        let unknown = SelectionEvent::Select {
            tag: "fig2".to_string(),
            node: 0u32,
        };
        assert_eq!(disclosure_event_for(&unknown, Some(&mural)), None);
        assert_eq!(disclosure_event_for(&known, None), None);

        let deselect = SelectionEvent::<u32>::Deselect {
            tag: "fig1".to_string(),
            node: None,
        };
        assert_eq!(
            disclosure_event_for(&deselect, None),
            Some(DisclosureEvent::Hide)
        );
    }
}
