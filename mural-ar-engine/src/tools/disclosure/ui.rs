use bevy::prelude::*;
use constants::render_settings::{
    CAPTION_FONT_SIZE, DEBUG_FONT_SIZE, DETAIL_FONT_SIZE, RETICLE_COLOUR, RETICLE_SIZE,
};

use super::state::Disclosure;
use crate::tools::debug_log::DebugLog;

#[derive(Component)]
pub struct Reticle;
#[derive(Component)]
pub struct CaptionButton;
#[derive(Component)]
pub struct CaptionText;
#[derive(Component)]
pub struct DetailButton;
#[derive(Component)]
pub struct DetailText;
#[derive(Component)]
pub struct DebugToggleButton;
#[derive(Component)]
pub struct DebugPanel;
#[derive(Component)]
pub struct DebugText;

// Spawns reticle, caption/detail tap targets and the debug log toggle
pub fn spawn_disclosure_ui(mut commands: Commands) {
    commands
        .spawn((
            Name::new("DisclosureOverlay"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                ..default()
            },
        ))
        .with_children(|overlay| {
            overlay.spawn((
                Reticle,
                Name::new("Reticle"),
                BorderColor(RETICLE_COLOUR),
                BorderRadius::MAX,
                Node {
                    width: Val::Px(RETICLE_SIZE),
                    height: Val::Px(RETICLE_SIZE),
                    position_type: PositionType::Absolute,
                    left: Val::Percent(50.0),
                    top: Val::Percent(50.0),
                    margin: UiRect {
                        left: Val::Px(-RETICLE_SIZE * 0.5),
                        top: Val::Px(-RETICLE_SIZE * 0.5),
                        ..default()
                    },
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
            ));

            overlay
                .spawn((
                    Name::new("DisclosurePanel"),
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(16.0),
                        right: Val::Px(16.0),
                        bottom: Val::Px(24.0),
                        display: Display::Flex,
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(8.0),
                        ..default()
                    },
                ))
                .with_children(|panel| {
                    panel
                        .spawn((
                            CaptionButton,
                            Name::new("Caption"),
                            Button,
                            BackgroundColor(Color::srgba(0.10, 0.11, 0.13, 0.85)),
                            Node {
                                padding: UiRect::all(Val::Px(12.0)),
                                display: Display::None,
                                ..default()
                            },
                        ))
                        .with_children(|button| {
                            button.spawn((
                                CaptionText,
                                Text::new(""),
                                TextFont { font_size: CAPTION_FONT_SIZE, ..default() },
                                TextColor(Color::WHITE),
                            ));
                        });

                    panel
                        .spawn((
                            DetailButton,
                            Name::new("Detail"),
                            Button,
                            BackgroundColor(Color::srgba(0.12, 0.13, 0.15, 0.85)),
                            Node {
                                padding: UiRect::all(Val::Px(12.0)),
                                display: Display::None,
                                ..default()
                            },
                        ))
                        .with_children(|button| {
                            button.spawn((
                                DetailText,
                                Text::new(""),
                                TextFont { font_size: DETAIL_FONT_SIZE, ..default() },
                                TextColor(Color::srgb(0.85, 0.85, 0.85)),
                            ));
                        });
                });

            overlay
                .spawn((
                    DebugToggleButton,
                    Name::new("DebugToggle"),
                    Button,
                    BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
                    Node {
                        position_type: PositionType::Absolute,
                        top: Val::Px(12.0),
                        right: Val::Px(12.0),
                        padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                        ..default()
                    },
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("log"),
                        TextFont { font_size: DEBUG_FONT_SIZE, ..default() },
                        TextColor(Color::WHITE),
                    ));
                });

            overlay
                .spawn((
                    DebugPanel,
                    Name::new("DebugPanel"),
                    BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
                    Node {
                        position_type: PositionType::Absolute,
                        top: Val::Px(44.0),
                        right: Val::Px(12.0),
                        max_width: Val::Percent(60.0),
                        padding: UiRect::all(Val::Px(8.0)),
                        display: Display::None,
                        overflow: Overflow::clip(),
                        ..default()
                    },
                ))
                .with_children(|panel| {
                    panel.spawn((
                        DebugText,
                        Text::new(""),
                        TextFont { font_size: DEBUG_FONT_SIZE, ..default() },
                        TextColor(Color::srgb(0.6, 1.0, 0.6)),
                    ));
                });
        });
}

fn display(visible: bool) -> Display {
    if visible { Display::Flex } else { Display::None }
}

// Mirrors the disclosure state onto the caption and detail elements
pub fn reflect_disclosure_view(
    disclosure: Res<Disclosure>,
    mut caption_nodes: Query<&mut Node, (With<CaptionButton>, Without<DetailButton>)>,
    mut detail_nodes: Query<&mut Node, (With<DetailButton>, Without<CaptionButton>)>,
    mut caption_texts: Query<&mut Text, (With<CaptionText>, Without<DetailText>)>,
    mut detail_texts: Query<&mut Text, (With<DetailText>, Without<CaptionText>)>,
) {
    if !disclosure.is_changed() {
        return;
    }
    let view = disclosure.view();

    for mut node in &mut caption_nodes {
        node.display = display(view.caption_visible);
    }
    for mut node in &mut detail_nodes {
        node.display = display(view.detail_visible);
    }
    for mut text in &mut caption_texts {
        text.0.clone_from(&view.caption);
    }
    for mut text in &mut detail_texts {
        text.0.clone_from(&view.detail);
    }
}

// Shows or hides the debug panel and refreshes its lines
pub fn reflect_debug_log(
    log: Res<DebugLog>,
    mut panels: Query<&mut Node, With<DebugPanel>>,
    mut texts: Query<&mut Text, With<DebugText>>,
) {
    if !log.is_changed() {
        return;
    }
    for mut node in &mut panels {
        node.display = display(log.is_visible());
    }
    if log.is_visible() {
        for mut text in &mut texts {
            text.0 = log.render();
        }
    }
}
