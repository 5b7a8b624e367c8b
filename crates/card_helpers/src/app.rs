use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy::render::settings::{Backends, RenderCreation, WgpuSettings};
use bevy::render::RenderPlugin;
use bevy::window::WindowResolution;

#[cfg(target_arch = "wasm32")]
use crate::window_resizing::handle_browser_resize;

// Landscape desktop window, the browser build resizes to its parent anyway
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

/// Selector of the canvas element the wasm build renders into.
pub const CANVAS_SELECTOR: &str = "#cards";

/// Creates a Bevy app with the window, asset and render settings shared by
/// native and browser builds.
#[cfg_attr(
    not(target_arch = "wasm32"),
    expect(unused_variables, reason = "app_version is used in wasm")
)]
pub fn get_default_app(app_name: &str, app_version: &str) -> App {
    let mut app = App::new();

    // Browser builds are served from a versioned directory and ship no .meta files
    let asset_plugin = AssetPlugin {
        #[cfg(not(target_arch = "wasm32"))]
        file_path: "assets".to_string(),
        #[cfg(target_arch = "wasm32")]
        file_path: format!("{app_name}-{app_version}/assets"),
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: app_name.to_string(),
            resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            canvas: Some(CANVAS_SELECTOR.into()),
            fit_canvas_to_parent: true,
            // Keep browser shortcuts such as F5 and Ctrl+R working
            prevent_default_event_handling: false,
            ..default()
        }),
        ..default()
    };

    // WebGL2 fallback for browsers without WebGPU
    let render_plugin = RenderPlugin {
        render_creation: RenderCreation::Automatic(WgpuSettings {
            backends: Some(Backends::BROWSER_WEBGPU | Backends::GL),
            ..default()
        }),
        ..default()
    };

    app.add_plugins(
        DefaultPlugins
            .set(asset_plugin)
            .set(window_plugin)
            .set(render_plugin),
    )
    .add_plugins(bevy_framepace::FramepacePlugin)
    .insert_resource(ClearColor(Color::BLACK));

    #[cfg(target_arch = "wasm32")]
    app.add_systems(PreUpdate, handle_browser_resize);

    app
}
