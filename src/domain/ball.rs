use macroquad::math::{Circle, Vec2};
use crate::config::GameConfig;

/// The ball moves a fixed distance per step; collisions only flip the sign
/// of a velocity component.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the screen center heading up and to the right
    pub fn serve(config: &GameConfig) -> Self {
        Self {
            position: config.ball_serve_position(),
            velocity: config.ball_serve_velocity(),
            radius: config.ball_radius,
        }
    }

    /// Euler step: one step of travel
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    pub fn bounce_x(&mut self) {
        self.velocity.x = -self.velocity.x;
    }

    pub fn bounce_y(&mut self) {
        self.velocity.y = -self.velocity.y;
    }

    /// Collision shape at the current position
    pub fn circle(&self) -> Circle {
        Circle::new(self.position.x, self.position.y, self.radius)
    }

    pub fn left(&self) -> f32 {
        self.position.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.position.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.radius
    }
}
