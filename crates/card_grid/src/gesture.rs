use bevy::prelude::*;
use card_helpers::input::{
    held_screen_position, just_pressed_screen_position, pointer_just_released, screen_to_world,
};
use card_helpers::reset::pointer_over_button;

use crate::animation::{FlipAnimation, MoveTween};
use crate::card::{topmost_card_at, CardView};
use crate::config::GridConfig;
use crate::grid::{CardGrid, DropOutcome};
use crate::layout::{drag_factor, Viewport};
use crate::CardSystemSet;

/// A pointer press on a card, from press until release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerGesture {
    pub card: Entity,
    /// Screen position of the press
    pub start: Vec2,
    /// Displayed card position when the press started
    pub anchor: Vec3,
    /// Set once the pointer travelled past the tap threshold
    pub dragging: bool,
}

impl PointerGesture {
    pub const fn new(card: Entity, start: Vec2, anchor: Vec3) -> Self {
        Self {
            card,
            start,
            anchor,
            dragging: false,
        }
    }

    pub fn exceeds_tap(&self, current: Vec2, threshold: f32) -> bool {
        self.start.distance(current) > threshold
    }

    /// Card position for the pointer at `current`. Screen y grows downward,
    /// world y grows upward.
    pub fn drag_position(&self, current: Vec2, factor: f32, raised_z: f32) -> Vec3 {
        let movement = current - self.start;
        Vec3::new(
            movement.x.mul_add(factor, self.anchor.x),
            movement.y.mul_add(-factor, self.anchor.y),
            raised_z,
        )
    }
}

#[derive(Resource, Default, Debug)]
pub struct DragState {
    pub gesture: Option<PointerGesture>,
}

pub struct GesturePlugin;

impl Plugin for GesturePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DragState>()
            .add_systems(Update, handle_card_pointer.in_set(CardSystemSet::Input));
    }
}

fn handle_card_pointer(
    mut commands: Commands,
    mut drag_state: ResMut<DragState>,
    mut grid: ResMut<CardGrid>,
    config: Res<GridConfig>,
    viewport: Res<Viewport>,
    windows: Query<&Window>,
    buttons: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    camera: Query<(&Camera, &GlobalTransform)>,
    ui_buttons: Query<&Interaction, With<Button>>,
    mut cards: Query<(Entity, &mut CardView, &mut Transform)>,
) {
    if drag_state.gesture.is_none() && !pointer_over_button(&ui_buttons) {
        drag_state.gesture = just_pressed_screen_position(&buttons, &touch_input, &windows)
            .and_then(|screen| {
                let world = screen_to_world(&camera, screen)?;
                let card = topmost_card_at(
                    world,
                    cards
                        .iter()
                        .map(|(entity, view, transform)| (entity, view.index, transform)),
                    config.card_size,
                )?;
                let (_, _, transform) = cards.get(card).ok()?;
                Some(PointerGesture::new(card, screen, transform.translation))
            });
    }

    let Some(mut gesture) = drag_state.gesture else {
        return;
    };

    let Ok((entity, mut view, mut transform)) = cards.get_mut(gesture.card) else {
        drag_state.gesture = None;
        return;
    };

    if let Some(current) = held_screen_position(&buttons, &touch_input, &windows) {
        if !gesture.dragging && gesture.exceeds_tap(current, config.tap_threshold) {
            gesture.dragging = true;
            view.is_dragging = true;
            commands.entity(entity).remove::<MoveTween>();
            debug!("Dragging card {}", view.index);
        }

        if gesture.dragging {
            transform.translation = gesture.drag_position(
                current,
                drag_factor(*viewport, config.base_zoom),
                config.drag_raised_z,
            );
        }
    }

    if !pointer_just_released(&buttons, &touch_input) {
        drag_state.gesture = Some(gesture);
        return;
    }

    drag_state.gesture = None;

    if gesture.dragging {
        view.is_dragging = false;
        let dropped_at = transform.translation.truncate().extend(0.0);

        match grid.report_drop(view.index, dropped_at) {
            DropOutcome::Swapped { with } => info!("Card {} swapped with card {with}", view.index),
            DropOutcome::Placed => info!("Card {} placed at {dropped_at}", view.index),
        }

        if let Some(position) = grid.position(view.index) {
            view.target = position;
            commands.entity(entity).insert(MoveTween::new(
                transform.translation,
                position,
                config.move_duration,
            ));
        }
    } else {
        let from = view.face;
        view.face = from.flipped();
        commands
            .entity(entity)
            .insert(FlipAnimation::new(from, view.face, config.flip_duration));
    }
}
