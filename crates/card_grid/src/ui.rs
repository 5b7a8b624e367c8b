use bevy::prelude::*;
use card_helpers::reset::{handle_reset_button, ResetButton};

use crate::config::GridConfig;
use crate::grid::CardGrid;
use crate::CardSystemSet;

const BUTTON_HOVER_COLOR: Color = Color::srgb(0.886, 0.910, 0.941);

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_overlay).add_systems(
            Update,
            (handle_reset_button::<CardGrid>, style_reset_button).in_set(CardSystemSet::Input),
        );
    }
}

fn spawn_overlay(mut commands: Commands, config: Res<GridConfig>) {
    // Header
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(0.0),
            width: Val::Percent(100.0),
            height: Val::Px(128.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_child((
            Text::new(config.header_text),
            TextFont {
                font_size: config.header_font_size,
                ..default()
            },
            TextColor(Color::WHITE),
        ));

    // Footer with the reset button
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(32.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|footer| {
            footer
                .spawn((
                    Button,
                    ResetButton,
                    Node {
                        padding: UiRect::axes(Val::Px(24.0), Val::Px(12.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BorderColor(Color::WHITE),
                    BorderRadius::all(Val::Px(8.0)),
                    BackgroundColor(Color::NONE),
                ))
                .with_child((
                    Text::new(config.reset_label),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
        });
}

fn style_reset_button(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor, &Children),
        (Changed<Interaction>, With<ResetButton>),
    >,
    mut labels: Query<&mut TextColor>,
) {
    for (interaction, mut background, children) in &mut buttons {
        let (fill, text) = match interaction {
            Interaction::Hovered | Interaction::Pressed => (BUTTON_HOVER_COLOR, Color::BLACK),
            Interaction::None => (Color::NONE, Color::WHITE),
        };
        background.0 = fill;

        for &child in children {
            if let Ok(mut label) = labels.get_mut(child) {
                label.0 = text;
            }
        }
    }
}
