//! Headless app with a primary window, a 2D camera and the default grid of
//! card views, enough for pointer systems to map the cursor into the world.

use bevy::asset::AssetEvent;
use bevy::prelude::*;
use bevy::render::camera::{camera_system, ManualTextureViews};
use bevy::window::{
    PrimaryWindow, WindowCreated, WindowResized, WindowResolution, WindowScaleFactorChanged,
};

use crate::card::CardView;
use crate::config::GridConfig;
use crate::deck::{CardDeck, DEFAULT_CARDS};
use crate::grid::CardGrid;
use crate::layout::Viewport;

pub const WIDTH: f32 = 1280.0;
pub const HEIGHT: f32 = 800.0;
const ZOOM: f32 = 40.0;

/// Builds the app. The camera is brought up to date in `PreUpdate`, so
/// systems under test can go in `Update`.
pub fn pointer_app() -> App {
    let config = GridConfig::default();
    let deck = CardDeck::new(DEFAULT_CARDS).expect("default deck is valid");
    let viewport = Viewport::new(WIDTH, HEIGHT);
    let grid = CardGrid::new(&deck, viewport.device_class().grid_dimensions(), &config);

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_event::<WindowCreated>()
        .add_event::<WindowResized>()
        .add_event::<WindowScaleFactorChanged>()
        .add_event::<AssetEvent<Image>>()
        .init_resource::<Assets<Image>>()
        .init_resource::<ManualTextureViews>()
        .init_resource::<ButtonInput<MouseButton>>()
        .init_resource::<Touches>()
        .add_systems(PreUpdate, camera_system::<OrthographicProjection>);

    app.world_mut().spawn((
        Window {
            resolution: WindowResolution::new(WIDTH, HEIGHT),
            ..default()
        },
        PrimaryWindow,
    ));
    app.world_mut().spawn((
        Camera2d,
        OrthographicProjection {
            scale: 1.0 / ZOOM,
            ..OrthographicProjection::default_2d()
        },
    ));

    for (index, card) in grid.cards().iter().enumerate() {
        app.world_mut().spawn((
            CardView::new(index, card.position, grid.reset_token()),
            Transform::from_translation(card.position),
        ));
    }

    app.insert_resource(config)
        .insert_resource(viewport)
        .insert_resource(grid);
    app
}

/// Window position showing the world point `world`.
pub fn screen_at(world: Vec2) -> Vec2 {
    Vec2::new(
        world.x.mul_add(ZOOM, WIDTH / 2.0),
        world.y.mul_add(-ZOOM, HEIGHT / 2.0),
    )
}

pub fn set_cursor(app: &mut App, screen: Vec2) {
    let mut windows = app.world_mut().query::<&mut Window>();
    for mut window in windows.iter_mut(app.world_mut()) {
        window.set_cursor_position(Some(screen));
    }
}

/// Starts a new input frame, like the input plugin does before `PreUpdate`.
pub fn mouse(app: &mut App) -> Mut<'_, ButtonInput<MouseButton>> {
    let mut buttons = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
    buttons.clear();
    buttons
}

pub fn card_entity(app: &mut App, index: usize) -> Entity {
    app.world_mut()
        .query::<(Entity, &CardView)>()
        .iter(app.world())
        .find(|(_, view)| view.index == index)
        .map(|(entity, _)| entity)
        .expect("view exists")
}
