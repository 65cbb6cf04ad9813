use bevy::prelude::*;

use super::state::{Disclosure, DisclosureEvent};
use super::ui::{CaptionButton, DebugToggleButton, DetailButton};
use crate::rpc::web_rpc::WebRpcInterface;
use crate::tools::debug_log::DebugLog;

// Tapping the caption toggles the detail text
pub fn caption_button_interaction(
    q: Query<&Interaction, (Changed<Interaction>, With<Button>, With<CaptionButton>)>,
    mut events: EventWriter<DisclosureEvent>,
) {
    for interaction in &q {
        if *interaction == Interaction::Pressed {
            events.write(DisclosureEvent::TapCaption);
        }
    }
}

// Tapping the detail text hides it again
pub fn detail_button_interaction(
    q: Query<&Interaction, (Changed<Interaction>, With<Button>, With<DetailButton>)>,
    mut events: EventWriter<DisclosureEvent>,
) {
    for interaction in &q {
        if *interaction == Interaction::Pressed {
            events.write(DisclosureEvent::TapDetail);
        }
    }
}

pub fn debug_toggle_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<DebugToggleButton>),
    >,
    mut log: ResMut<DebugLog>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                log.toggle();
                *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24));
            }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None => *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        }
    }
}

/// Runs every disclosure input through the state machine in arrival order.
pub fn apply_disclosure_events(
    mut events: EventReader<DisclosureEvent>,
    mut disclosure: ResMut<Disclosure>,
    mut rpc: Option<ResMut<WebRpcInterface>>,
) {
    let mut changed = false;
    for event in events.read() {
        // Bypass change detection so unchanged taps don't trigger UI refresh.
        changed |= disclosure.bypass_change_detection().handle(event);
    }
    if !changed {
        return;
    }

    disclosure.set_changed();
    if let Some(rpc) = rpc.as_mut() {
        let view = disclosure.view();
        rpc.send_notification(
            "disclosure_changed",
            serde_json::to_value(&view).unwrap_or_default(),
        );
    }
}
