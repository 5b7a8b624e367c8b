use bevy::prelude::*;

/// Tunables for the grid, the card views and their animations.
#[derive(Resource, Debug, Clone)]
pub struct GridConfig {
    // Layout
    /// Distance between neighbouring columns (world units)
    pub horizontal_spacing: f32,
    /// Distance between neighbouring rows (world units)
    pub vertical_spacing: f32,
    /// A drop closer than this to another card swaps the two cards
    pub swap_threshold: f32,
    /// Size of a card (world units)
    pub card_size: Vec2,

    // Camera
    /// Pixels per world unit on a desktop sized viewport
    pub base_zoom: f32,

    // Dragging
    /// Pointer travel (pixels) below which a gesture is a tap
    pub tap_threshold: f32,
    /// Z of a card while it is being dragged, keeps it above its neighbours
    pub drag_raised_z: f32,

    // Animation timings (seconds)
    /// Converging to a new authoritative position
    pub move_duration: f32,
    /// Half turn between the two faces
    pub flip_duration: f32,
    /// Scaling in and out of hover
    pub hover_duration: f32,

    // Scales
    /// Scale a card is spawned with before settling
    pub mount_scale: f32,
    pub rest_scale: f32,
    pub hover_scale: f32,

    // UI
    pub header_text: &'static str,
    pub header_font_size: f32,
    pub reset_label: &'static str,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: 5.0,
            vertical_spacing: 7.0,
            swap_threshold: 2.0,
            card_size: Vec2::new(4.5, 6.0),

            base_zoom: 40.0,

            tap_threshold: 3.0,
            drag_raised_z: 1.0,

            move_duration: 0.2,
            flip_duration: 0.6,
            hover_duration: 0.3,

            mount_scale: 0.8,
            rest_scale: 1.0,
            hover_scale: 1.05,

            header_text: "Left Field Labs Demo",
            header_font_size: 30.0,
            reset_label: "Reset Cards",
        }
    }
}

impl GridConfig {
    pub const fn spacing(&self) -> Vec2 {
        Vec2::new(self.horizontal_spacing, self.vertical_spacing)
    }
}
