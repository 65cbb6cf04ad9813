use bevy::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisclosureState {
    #[default]
    Hidden,
    CaptionOnly,
    CaptionAndDetail,
}

/// Inputs to the disclosure panel: selection changes and the two tap gestures.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum DisclosureEvent {
    Select { caption: String, detail: String },
    Hide,
    TapCaption,
    TapDetail,
}

/// Pure transition function.
///
/// Caption visibility follows selection presence only; detail visibility
/// follows taps only and is reset by every new selection.
pub fn transition(state: DisclosureState, event: &DisclosureEvent) -> DisclosureState {
    use DisclosureState::*;

    match (state, event) {
        (_, DisclosureEvent::Hide) => Hidden,
        (_, DisclosureEvent::Select { .. }) => CaptionOnly,
        (CaptionOnly, DisclosureEvent::TapCaption) => CaptionAndDetail,
        (CaptionAndDetail, DisclosureEvent::TapCaption) => CaptionOnly,
        (CaptionAndDetail, DisclosureEvent::TapDetail) => CaptionOnly,
        (state, DisclosureEvent::TapCaption | DisclosureEvent::TapDetail) => state,
    }
}

/// What the overlay should currently display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisclosureView {
    pub state: DisclosureState,
    pub caption_visible: bool,
    pub detail_visible: bool,
    pub caption: String,
    pub detail: String,
}

/// Disclosure panel state plus the text of the current figure.
#[derive(Resource, Debug, Clone, Default)]
pub struct Disclosure {
    state: DisclosureState,
    caption: String,
    detail: String,
}

impl Disclosure {
    /// Apply an event, returning whether anything visible changed.
    pub fn handle(&mut self, event: &DisclosureEvent) -> bool {
        let next = transition(self.state, event);

        let mut changed = next != self.state;
        if let DisclosureEvent::Select { caption, detail } = event {
            changed |= *caption != self.caption || *detail != self.detail;
            self.caption.clone_from(caption);
            self.detail.clone_from(detail);
        }

        self.state = next;
        changed
    }

    pub fn state(&self) -> DisclosureState {
        self.state
    }

    pub fn view(&self) -> DisclosureView {
        DisclosureView {
            state: self.state,
            caption_visible: self.state != DisclosureState::Hidden,
            detail_visible: self.state == DisclosureState::CaptionAndDetail,
            caption: self.caption.clone(),
            detail: self.detail.clone(),
        }
    }
}
