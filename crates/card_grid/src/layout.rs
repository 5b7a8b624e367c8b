//! Responsive layout rules, all pure functions of the viewport size.

use bevy::prelude::*;
use strum::{Display, EnumIter};

/// Viewports whose smaller side is under this are treated as phones
pub const MOBILE_MAX_DIMENSION: f32 = 500.0;
/// Viewports whose smaller side is under this are treated as tablets
pub const TABLET_MAX_DIMENSION: f32 = 800.0;

/// Logical size of the primary window in pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn min_dimension(self) -> f32 {
        self.width.min(self.height)
    }

    pub fn device_class(self) -> DeviceClass {
        DeviceClass::from_min_dimension(self.min_dimension())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub fn from_min_dimension(min_dimension: f32) -> Self {
        if min_dimension < MOBILE_MAX_DIMENSION {
            Self::Mobile
        } else if min_dimension < TABLET_MAX_DIMENSION {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Portrait viewports stack the cards in two columns.
    pub const fn grid_dimensions(self) -> GridDimensions {
        match self {
            Self::Mobile | Self::Tablet => GridDimensions::new(5, 2),
            Self::Desktop => GridDimensions::new(2, 5),
        }
    }

    /// Multiplier applied to the base camera zoom.
    pub const fn camera_zoom_factor(self) -> f32 {
        match self {
            Self::Mobile => 0.5,
            Self::Tablet => 0.55,
            Self::Desktop => 1.0,
        }
    }

    /// Zoom the drag gesture assumes when converting pointer travel to world
    /// units. Phones use 0.4 here while the camera uses 0.5, so a dragged card
    /// outruns the pointer on small screens.
    pub const fn drag_zoom_factor(self) -> f32 {
        match self {
            Self::Mobile => 0.4,
            Self::Tablet => 0.55,
            Self::Desktop => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl GridDimensions {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub const fn slot_count(self) -> usize {
        self.rows * self.cols
    }

    /// World position of the slot at `index` in row-major order, with the
    /// whole grid centred on the origin.
    pub fn slot_position(self, index: usize, spacing: Vec2) -> Vec3 {
        let row = (index / self.cols) as f32;
        let col = (index % self.cols) as f32;
        let half_cols = (self.cols as f32 - 1.0) / 2.0;
        let half_rows = (self.rows as f32 - 1.0) / 2.0;

        Vec3::new(
            (col - half_cols) * spacing.x,
            (half_rows - row) * spacing.y,
            0.0,
        )
    }
}

/// Pixels per world unit for the camera.
pub fn camera_zoom(viewport: Viewport, base_zoom: f32) -> f32 {
    base_zoom * viewport.device_class().camera_zoom_factor()
}

/// World units travelled by a dragged card per pixel of pointer travel.
pub fn drag_factor(viewport: Viewport, base_zoom: f32) -> f32 {
    let device = viewport.device_class();
    let camera_zoom = base_zoom * device.camera_zoom_factor();
    1.0 / (camera_zoom * device.drag_zoom_factor())
}
