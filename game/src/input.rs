//! Keyboard sampling for the character controls.

use bevy::prelude::*;
use controller::{ControlKey, InputSource};

/// Keyboard state polled fresh each frame; past presses are not buffered.
#[derive(Resource, Default)]
pub struct ControlState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Sample the arrow keys and spacebar into [`ControlState`].
pub fn sample_keyboard(keyboard: Res<ButtonInput<KeyCode>>, mut controls: ResMut<ControlState>) {
    controls.left = keyboard.pressed(KeyCode::ArrowLeft);
    controls.right = keyboard.pressed(KeyCode::ArrowRight);
    controls.jump = keyboard.pressed(KeyCode::Space);
}

impl InputSource for ControlState {
    fn is_down(&self, key: ControlKey) -> bool {
        match key {
            ControlKey::Left => self.left,
            ControlKey::Right => self.right,
            ControlKey::Jump => self.jump,
        }
    }
}
