use macroquad::prelude::Rect;
use crate::config::GameConfig;

/// Input relevant to the paddle for a single step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddleInput {
    pub left: bool,
    pub right: bool,
    /// Pointer x in screen coordinates, when sampled this step
    pub pointer_x: Option<f32>,
}

/// Paddle is a horizontally sliding rectangle near the bottom of the screen.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Paddle centered horizontally
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rect: Rect::new(
                config.paddle_start_x(),
                config.paddle_y(),
                config.paddle_width,
                config.paddle_height,
            ),
        }
    }

    pub fn x(&self) -> f32 {
        self.rect.x
    }

    pub fn top(&self) -> f32 {
        self.rect.y
    }

    /// Apply one step of input.
    ///
    /// Keyboard moves the paddle first, then a sampled pointer replaces that
    /// result outright, and finally the position is clamped to the screen.
    /// With a pointer present every step, keyboard movement has no effect.
    pub fn steer(&mut self, input: &PaddleInput, config: &GameConfig) {
        if input.left && self.rect.x > 0.0 {
            self.rect.x -= config.paddle_step;
        }
        if input.right && self.rect.x + self.rect.w < config.screen_width {
            self.rect.x += config.paddle_step;
        }

        if let Some(pointer_x) = input.pointer_x {
            self.rect.x = pointer_x - self.rect.w / 2.0;
        }

        self.rect.x = self.rect.x.clamp(0.0, config.screen_width - self.rect.w);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn keys(left: bool, right: bool) -> PaddleInput {
        PaddleInput { left, right, pointer_x: None }
    }

    #[test]
    fn test_starts_centered() {
        let paddle = Paddle::new(&GameConfig::default());
        assert_eq!(paddle.rect, Rect::new(350.0, 570.0, 100.0, 20.0));
    }

    #[test]
    fn test_keyboard_moves_by_step() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(&config);
        paddle.steer(&keys(true, false), &config);
        assert_eq!(paddle.x(), 340.0);
        paddle.steer(&keys(false, true), &config);
        paddle.steer(&keys(false, true), &config);
        assert_eq!(paddle.x(), 360.0);
    }

    #[test]
    fn test_keyboard_overshoot_is_clamped() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(&config);
        paddle.rect.x = 4.0;
        paddle.steer(&keys(true, false), &config);
        assert_eq!(paddle.x(), 0.0);
        paddle.steer(&keys(true, false), &config);
        assert_eq!(paddle.x(), 0.0);

        paddle.rect.x = 695.0;
        paddle.steer(&keys(false, true), &config);
        assert_eq!(paddle.x(), 700.0);
    }

    #[test]
    fn test_pointer_overrides_keyboard() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(&config);
        let input = PaddleInput { left: true, right: false, pointer_x: Some(200.0) };
        paddle.steer(&input, &config);
        assert_eq!(paddle.x(), 150.0);
    }

    #[test]
    fn test_pointer_near_edges_is_clamped() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(&config);
        paddle.steer(&PaddleInput { pointer_x: Some(10.0), ..Default::default() }, &config);
        assert_eq!(paddle.x(), 0.0);
        paddle.steer(&PaddleInput { pointer_x: Some(790.0), ..Default::default() }, &config);
        assert_eq!(paddle.x(), 700.0);
    }

    proptest! {
        #[test]
        fn test_paddle_always_on_screen(
            start in -50.0f32..850.0,
            left in any::<bool>(),
            right in any::<bool>(),
            pointer in proptest::option::of(-500.0f32..1500.0),
        ) {
            let config = GameConfig::default();
            let mut paddle = Paddle::new(&config);
            paddle.rect.x = start;
            paddle.steer(&PaddleInput { left, right, pointer_x: pointer }, &config);
            prop_assert!(paddle.x() >= 0.0);
            prop_assert!(paddle.x() <= config.screen_width - config.paddle_width);
        }
    }
}
