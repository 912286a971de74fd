use macroquad::prelude::{Conf, Vec2, vec2};

/// GameConfig holds every geometric and rule constant of the game.
/// All components read from one shared instance.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between the paddle's bottom edge and the bottom of the screen
    pub paddle_bottom_margin: f32,
    /// Distance moved per step while an arrow key is held
    pub paddle_step: f32,

    pub ball_radius: f32,
    /// Per-axis speed in pixels per simulation step
    pub ball_speed: f32,

    pub block_width: f32,
    pub block_height: f32,
    pub block_gap: f32,
    pub block_top_offset: f32,
    pub block_rows: usize,
    pub block_cols: usize,

    pub starting_lives: u32,
    pub points_per_block: u32,

    pub steps_per_second: f32,
    /// Upper bound on catch-up steps after a long frame
    pub max_steps_per_frame: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            paddle_width: 100.0,
            paddle_height: 20.0,
            paddle_bottom_margin: 10.0,
            paddle_step: 10.0,
            ball_radius: 10.0,
            ball_speed: 5.0,
            block_width: 60.0,
            block_height: 20.0,
            block_gap: 5.0,
            block_top_offset: 50.0,
            block_rows: 3,
            block_cols: 12,
            starting_lives: 3,
            points_per_block: 10,
            steps_per_second: 60.0,
            max_steps_per_frame: 5,
        }
    }
}

impl GameConfig {
    pub const fn block_count(&self) -> usize {
        self.block_rows * self.block_cols
    }

    /// Score reached when every block has been destroyed once
    pub const fn max_score(&self) -> u32 {
        self.block_count() as u32 * self.points_per_block
    }

    pub fn paddle_y(&self) -> f32 {
        self.screen_height - self.paddle_height - self.paddle_bottom_margin
    }

    pub fn paddle_start_x(&self) -> f32 {
        self.screen_width / 2.0 - self.paddle_width / 2.0
    }

    pub fn ball_serve_position(&self) -> Vec2 {
        vec2(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Serve direction: rightward and upward
    pub fn ball_serve_velocity(&self) -> Vec2 {
        vec2(self.ball_speed, -self.ball_speed)
    }

    pub fn step_interval(&self) -> f32 {
        1.0 / self.steps_per_second
    }

    /// Window settings for the macroquad entry point
    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: "Breakout Game".to_owned(),
            window_width: self.screen_width as i32,
            window_height: self.screen_height as i32,
            window_resizable: false,
            ..Default::default()
        }
    }
}
