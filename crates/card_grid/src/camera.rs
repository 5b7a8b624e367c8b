use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::config::GridConfig;
use crate::grid::CardGrid;
use crate::layout::{camera_zoom, Viewport};
use crate::CardSystemSet;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, track_viewport.in_set(CardSystemSet::Viewport));
    }
}

pub fn primary_viewport(windows: &Query<&Window, With<PrimaryWindow>>) -> Option<Viewport> {
    let window = windows.get_single().ok()?;
    Some(Viewport::new(window.width(), window.height()))
}

pub fn spawn_camera(commands: &mut Commands, viewport: Viewport, config: &GridConfig) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scale: 1.0 / camera_zoom(viewport, config.base_zoom),
            ..OrthographicProjection::default_2d()
        },
    ));
}

/// Follows the primary window size: rescales the camera and lays the grid out
/// for the new device class.
fn track_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    config: Res<GridConfig>,
    mut viewport: ResMut<Viewport>,
    mut grid: ResMut<CardGrid>,
    mut projections: Query<&mut OrthographicProjection>,
) {
    let Some(current) = primary_viewport(&windows) else {
        return;
    };

    if current == *viewport {
        return;
    }

    let device = current.device_class();
    if device != viewport.device_class() {
        info!(
            "Viewport {}x{} is now {device}",
            current.width, current.height
        );
    }

    *viewport = current;
    grid.resize(device.grid_dimensions());

    let scale = 1.0 / camera_zoom(current, config.base_zoom);
    for mut projection in &mut projections {
        projection.scale = scale;
    }
}
