use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use card_helpers::{WINDOW_HEIGHT, WINDOW_WIDTH};

mod animation;
mod camera;
mod card;
mod config;
mod deck;
mod gesture;
mod grid;
mod layout;
#[cfg(test)]
mod test_support;
mod ui;

pub use animation::{FlipAnimation, MoveTween, ScaleTween};
use animation::AnimationPlugin;
use camera::CameraPlugin;
use card::CardPlugin;
pub use card::{CardView, Face};
pub use config::GridConfig;
pub use deck::{CardContent, CardDeck, CardRecord, DeckError, DEFAULT_CARDS};
use gesture::GesturePlugin;
pub use grid::{CardEntity, CardGrid, DropOutcome};
pub use layout::{DeviceClass, GridDimensions, Viewport};
use ui::UiPlugin;

/// Frame phases, run in this order every update.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum CardSystemSet {
    /// Window size changes and relayout
    Viewport,
    /// Pointer gestures and the reset button
    Input,
    /// Views catching up with the grid, hover
    Sync,
    /// Tweens
    Animate,
    /// Face visibility
    Present,
}

pub fn run() -> Result<(), DeckError> {
    let deck = CardDeck::new(DEFAULT_CARDS)?;

    card_helpers::get_default_app(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
        .insert_resource(deck)
        .add_plugins(CardGridPlugin)
        .run();

    Ok(())
}

/// Everything needed to show an interactive grid for the [`CardDeck`]
/// resource, which must be inserted by the caller.
pub struct CardGridPlugin;

impl Plugin for CardGridPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GridConfig>()
            .configure_sets(
                Update,
                (
                    CardSystemSet::Viewport,
                    CardSystemSet::Input,
                    CardSystemSet::Sync,
                    CardSystemSet::Animate,
                    CardSystemSet::Present,
                )
                    .chain(),
            )
            .add_systems(Startup, setup)
            .add_plugins(CameraPlugin)
            .add_plugins(GesturePlugin)
            .add_plugins(CardPlugin)
            .add_plugins(AnimationPlugin)
            .add_plugins(UiPlugin);
    }
}

fn setup(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    deck: Res<CardDeck>,
    config: Res<GridConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let viewport = camera::primary_viewport(&windows)
        .unwrap_or_else(|| Viewport::new(WINDOW_WIDTH, WINDOW_HEIGHT));
    let dimensions = viewport.device_class().grid_dimensions();
    let grid = CardGrid::new(&deck, dimensions, &config);

    info!(
        "Laying out {} cards as {}x{} for a {} viewport",
        grid.cards().len(),
        dimensions.rows,
        dimensions.cols,
        viewport.device_class()
    );

    camera::spawn_camera(&mut commands, viewport, &config);
    card::spawn_cards(&mut commands, &asset_server, &grid, &config);

    commands.insert_resource(viewport);
    commands.insert_resource(grid);
}
