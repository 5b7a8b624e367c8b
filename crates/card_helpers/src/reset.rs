use bevy::prelude::*;

/// Marks a UI button that resets a [`Resettable`] resource when pressed.
#[derive(Component)]
pub struct ResetButton;

/// A resource that can be put back into its initial arrangement.
pub trait Resettable: Resource {
    fn reset(&mut self);
}

pub fn handle_reset_button<T: Resettable>(
    mut resettable: ResMut<T>,
    interaction_query: Query<&Interaction, (Changed<Interaction>, With<ResetButton>)>,
) {
    for interaction in &interaction_query {
        if *interaction == Interaction::Pressed {
            resettable.reset();
        }
    }
}

/// True while the pointer is over or pressing any UI button, so world input
/// below the button can be skipped.
pub fn pointer_over_button(buttons: &Query<&Interaction, With<Button>>) -> bool {
    buttons
        .iter()
        .any(|interaction| *interaction != Interaction::None)
}
