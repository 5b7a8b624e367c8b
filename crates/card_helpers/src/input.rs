//! Pointer helpers that treat the left mouse button and the first touch as a
//! single pointer.

use bevy::prelude::*;

/// Screen position of a pointer press that started this frame.
pub fn just_pressed_screen_position(
    button_input: &ButtonInput<MouseButton>,
    touch_input: &Touches,
    windows: &Query<&Window>,
) -> Option<Vec2> {
    if button_input.just_pressed(MouseButton::Left) {
        cursor_screen_position(windows)
    } else {
        touch_input
            .iter_just_pressed()
            .next()
            .map(bevy::input::touch::Touch::position)
    }
}

/// Screen position of a pointer that is currently held down.
pub fn held_screen_position(
    button_input: &ButtonInput<MouseButton>,
    touch_input: &Touches,
    windows: &Query<&Window>,
) -> Option<Vec2> {
    if button_input.pressed(MouseButton::Left) {
        cursor_screen_position(windows)
    } else {
        touch_input
            .iter()
            .next()
            .map(bevy::input::touch::Touch::position)
    }
}

/// Whether the pointer was lifted this frame.
pub fn pointer_just_released(
    button_input: &ButtonInput<MouseButton>,
    touch_input: &Touches,
) -> bool {
    button_input.just_released(MouseButton::Left) || touch_input.any_just_released()
}

pub fn cursor_screen_position(windows: &Query<&Window>) -> Option<Vec2> {
    windows.get_single().ok()?.cursor_position()
}

/// Projects a screen position onto the world plane of the single 2D camera.
pub fn screen_to_world(
    camera: &Query<(&Camera, &GlobalTransform)>,
    screen_position: Vec2,
) -> Option<Vec2> {
    let (camera, camera_transform) = camera.get_single().ok()?;

    camera
        .viewport_to_world_2d(camera_transform, screen_position)
        .ok()
}

/// World position under the mouse cursor, `None` when the cursor left the window.
pub fn cursor_world_position(
    windows: &Query<&Window>,
    camera: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let position = cursor_screen_position(windows)?;
    screen_to_world(camera, position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_is_reported_once() {
        let mut buttons = ButtonInput::<MouseButton>::default();
        let touches = Touches::default();

        buttons.press(MouseButton::Left);
        assert!(
            !pointer_just_released(&buttons, &touches),
            "nothing released yet"
        );

        buttons.clear();
        assert!(
            !pointer_just_released(&buttons, &touches),
            "holding the button is not a release"
        );

        buttons.release(MouseButton::Left);
        assert!(
            pointer_just_released(&buttons, &touches),
            "release shows up on the frame it happens"
        );

        buttons.clear();
        assert!(
            !pointer_just_released(&buttons, &touches),
            "release is cleared on the next frame"
        );
    }

    #[test]
    fn other_mouse_buttons_are_ignored() {
        let mut buttons = ButtonInput::<MouseButton>::default();
        let touches = Touches::default();

        buttons.press(MouseButton::Right);
        buttons.clear();
        buttons.release(MouseButton::Right);
        assert!(
            !pointer_just_released(&buttons, &touches),
            "only the left button drives the pointer"
        );
    }
}
