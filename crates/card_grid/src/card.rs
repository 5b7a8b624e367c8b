use bevy::prelude::*;
use bevy::text::TextBounds;
use card_helpers::input::cursor_world_position;

use crate::animation::{FlipAnimation, MoveTween, ScaleTween};
use crate::config::GridConfig;
use crate::grid::{CardEntity, CardGrid};
use crate::CardSystemSet;

const FRONT_PLATE_COLOR: Color = Color::srgb(0.12, 0.12, 0.14);
const FRONT_OVERLAY_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.4);
const BACK_LABEL: &str = "Back of Card";

// Card text is laid out in pixels and scaled down into world units
const TEXT_PIXELS_PER_UNIT: f32 = 40.0;
const TITLE_FONT_SIZE: f32 = 18.0;
const BODY_FONT_SIZE: f32 = 14.0;
const TEXT_PADDING: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Face {
    #[default]
    Front,
    Back,
}

impl Face {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// Transient view state of one card. Never written back into the grid.
#[derive(Component, Debug)]
pub struct CardView {
    /// Index of the card in [`CardGrid::cards`]
    pub index: usize,
    pub face: Face,
    pub is_dragging: bool,
    pub hovered: bool,
    /// Authoritative position the view last converged toward
    pub target: Vec3,
    pub seen_reset_token: u32,
}

impl CardView {
    pub const fn new(index: usize, target: Vec3, reset_token: u32) -> Self {
        Self {
            index,
            face: Face::Front,
            is_dragging: false,
            hovered: false,
            target,
            seen_reset_token: reset_token,
        }
    }
}

#[derive(Component)]
pub struct CardFront;

#[derive(Component)]
pub struct CardBack;

pub struct CardPlugin;

impl Plugin for CardPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, sync_card_views.in_set(CardSystemSet::Sync))
            .add_systems(Update, update_hover.in_set(CardSystemSet::Sync))
            .add_systems(
                Update,
                update_face_visibility.in_set(CardSystemSet::Present),
            );
    }
}

pub fn spawn_cards(
    commands: &mut Commands,
    asset_server: &AssetServer,
    grid: &CardGrid,
    config: &GridConfig,
) {
    for (index, card) in grid.cards().iter().enumerate() {
        spawn_card(commands, asset_server, config, index, card, grid.reset_token());
    }
}

fn spawn_card(
    commands: &mut Commands,
    asset_server: &AssetServer,
    config: &GridConfig,
    index: usize,
    card: &CardEntity,
    reset_token: u32,
) {
    let size = config.card_size;
    let text_width = size.x.mul_add(TEXT_PIXELS_PER_UNIT, -2.0 * TEXT_PADDING);
    let content = &card.content;

    commands
        .spawn((
            Name::new(format!("Card {}", card.id)),
            CardView::new(index, card.position, reset_token),
            Transform::from_translation(card.position).with_scale(Vec3::splat(config.mount_scale)),
            Visibility::default(),
            ScaleTween::new(config.mount_scale, config.rest_scale, config.hover_duration),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    CardFront,
                    Sprite::from_color(FRONT_PLATE_COLOR, size),
                    Transform::from_xyz(0.0, 0.0, 0.01),
                    Visibility::Visible,
                ))
                .with_children(|front| {
                    front.spawn((
                        Sprite {
                            image: asset_server.load(content.front_image.clone()),
                            custom_size: Some(size),
                            ..default()
                        },
                        Transform::from_xyz(0.0, 0.0, 0.001),
                    ));
                    front.spawn((
                        Sprite::from_color(FRONT_OVERLAY_COLOR, size),
                        Transform::from_xyz(0.0, 0.0, 0.002),
                    ));
                    front.spawn(card_text(&content.title, TITLE_FONT_SIZE, 0.6, text_width));
                    front.spawn(card_text(
                        &content.description,
                        BODY_FONT_SIZE,
                        -0.5,
                        text_width,
                    ));
                });

            parent
                .spawn((
                    CardBack,
                    Sprite::from_color(content.back_color, size),
                    Transform::from_xyz(0.0, 0.0, 0.01),
                    Visibility::Hidden,
                ))
                .with_children(|back| {
                    back.spawn(card_text(&content.title, TITLE_FONT_SIZE, 0.6, text_width));
                    back.spawn(card_text(BACK_LABEL, BODY_FONT_SIZE, -0.5, text_width));
                });
        });
}

fn card_text(text: &str, font_size: f32, y: f32, width: f32) -> impl Bundle {
    (
        Text2d::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(Color::WHITE),
        TextLayout::new_with_justify(JustifyText::Center),
        TextBounds::new_horizontal(width),
        Transform::from_xyz(0.0, y, 0.003).with_scale(Vec3::splat(1.0 / TEXT_PIXELS_PER_UNIT)),
    )
}

/// Whether `point` lies on a card centred at `center`.
pub fn card_contains(center: Vec3, scale: f32, size: Vec2, point: Vec2) -> bool {
    Rect::from_center_size(center.truncate(), size * scale).contains(point)
}

/// The card drawn on top at `point`: highest z first, then the one spawned
/// last.
pub fn topmost_card_at<'a>(
    point: Vec2,
    cards: impl IntoIterator<Item = (Entity, usize, &'a Transform)>,
    size: Vec2,
) -> Option<Entity> {
    cards
        .into_iter()
        .filter(|(_, _, transform)| {
            card_contains(transform.translation, transform.scale.x, size, point)
        })
        .max_by(|(_, a_index, a), (_, b_index, b)| {
            a.translation
                .z
                .total_cmp(&b.translation.z)
                .then(a_index.cmp(b_index))
        })
        .map(|(entity, _, _)| entity)
}

/// Applies reset signals and converges idle views toward the grid's
/// authoritative positions.
fn sync_card_views(
    mut commands: Commands,
    grid: Res<CardGrid>,
    config: Res<GridConfig>,
    mut views: Query<(Entity, &mut CardView, &mut Transform)>,
) {
    for (entity, mut view, mut transform) in &mut views {
        if view.seen_reset_token != grid.reset_token() {
            view.seen_reset_token = grid.reset_token();
            view.face = Face::Front;
            transform.rotation = Quat::IDENTITY;
            commands.entity(entity).remove::<FlipAnimation>();
        }

        // A drag owns the displayed position until it ends
        if view.is_dragging {
            continue;
        }

        let Some(position) = grid.position(view.index) else {
            continue;
        };

        if position != view.target {
            view.target = position;
            commands.entity(entity).insert(MoveTween::new(
                transform.translation,
                position,
                config.move_duration,
            ));
        }
    }
}

fn update_hover(
    mut commands: Commands,
    config: Res<GridConfig>,
    windows: Query<&Window>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mut views: Query<(Entity, &mut CardView, &Transform)>,
) {
    let hovered_card = cursor_world_position(&windows, &camera).and_then(|point| {
        topmost_card_at(
            point,
            views
                .iter()
                .map(|(entity, view, transform)| (entity, view.index, transform)),
            config.card_size,
        )
    });

    for (entity, mut view, transform) in &mut views {
        let hovered = hovered_card == Some(entity);
        if view.hovered == hovered {
            continue;
        }

        view.hovered = hovered;
        let target = if hovered {
            config.hover_scale
        } else {
            config.rest_scale
        };
        commands.entity(entity).insert(ScaleTween::new(
            transform.scale.x,
            target,
            config.hover_duration,
        ));
    }
}

fn update_face_visibility(
    cards: Query<(&CardView, Option<&FlipAnimation>, &Children)>,
    mut faces: ParamSet<(
        Query<&mut Visibility, With<CardFront>>,
        Query<&mut Visibility, With<CardBack>>,
    )>,
) {
    for (view, flip, children) in &cards {
        let shown = flip.map_or(view.face, FlipAnimation::visible_face);

        for &child in children {
            if let Ok(mut visibility) = faces.p0().get_mut(child) {
                visibility.set_if_neq(if shown == Face::Front {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                });
            }
            if let Ok(mut visibility) = faces.p1().get_mut(child) {
                visibility.set_if_neq(if shown == Face::Back {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                });
            }
        }
    }
}
