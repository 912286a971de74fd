use macroquad::prelude::*;
use crate::domain::PaddleInput;

/// Snapshot of everything the game reads from the keyboard and mouse in one
/// frame. Sampled once, then passed by value into the game logic.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Enter pressed this frame
    pub confirm: bool,
    /// Escape pressed this frame
    pub quit: bool,
    pub left: bool,
    pub right: bool,
    pub pointer_x: Option<f32>,
}

impl FrameInput {
    /// Poll macroquad for the current frame
    pub fn sample() -> Self {
        Self {
            confirm: is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter),
            quit: is_key_pressed(KeyCode::Escape),
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            // The pointer is read every frame, so it always takes precedence
            pointer_x: Some(mouse_position().0),
        }
    }

    pub fn paddle(&self) -> PaddleInput {
        PaddleInput {
            left: self.left,
            right: self.right,
            pointer_x: self.pointer_x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_input_carries_keys_and_pointer() {
        let input = FrameInput { left: true, pointer_x: Some(42.0), ..Default::default() };
        assert_eq!(
            input.paddle(),
            PaddleInput { left: true, right: false, pointer_x: Some(42.0) }
        );
    }
}
