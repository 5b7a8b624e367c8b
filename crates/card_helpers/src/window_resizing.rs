// Largest surface wgpu accepts on WebGL2 targets
#[cfg(target_arch = "wasm32")]
const MAX_SURFACE_SIZE: f32 = 2048.0;

/// Keeps the primary window in step with the browser's inner size.
#[cfg(target_arch = "wasm32")]
pub fn handle_browser_resize(
    mut primary_query: bevy::ecs::system::Query<
        &mut bevy::window::Window,
        bevy::ecs::query::With<bevy::window::PrimaryWindow>,
    >,
) {
    let Some((target_width, target_height)) = browser_inner_size() else {
        return;
    };

    for mut window in &mut primary_query {
        let width = target_width.min(MAX_SURFACE_SIZE);
        let height = target_height.min(MAX_SURFACE_SIZE);

        if (window.resolution.width() - width).abs() > f32::EPSILON
            || (window.resolution.height() - height).abs() > f32::EPSILON
        {
            window.resolution.set(width, height);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_inner_size() -> Option<(f32, f32)> {
    let browser_window = web_sys::window()?;
    let width = browser_window.inner_width().ok()?.as_f64()?;
    let height = browser_window.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}
