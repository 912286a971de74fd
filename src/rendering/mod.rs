mod scene;

pub use scene::{DrawCommand, TextAlign, compose, BACKGROUND, BALL_COLOR, PADDLE_COLOR, TEXT_COLOR};

use macroquad::prelude::*;
use crate::application::GameState;

/// Draw the current scene
pub fn draw_scene(state: &GameState) {
    compose(state).iter().for_each(paint);
}

/// Forward one command to macroquad
fn paint(command: &DrawCommand) {
    match command {
        DrawCommand::Clear(color) => clear_background(*color),
        DrawCommand::Text { text, x, y, size, color, align } => {
            let dims = measure_text(text, None, *size as u16, 1.0);
            let left = match align {
                TextAlign::Left => *x,
                TextAlign::Center => x - dims.width / 2.0,
            };
            // macroquad places text by baseline
            draw_text(text, left, y + dims.offset_y, *size, *color);
        }
        DrawCommand::Circle { center, radius, color } => {
            draw_circle(center.x, center.y, *radius, *color);
        }
        DrawCommand::Rect { rect, color } => {
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, *color);
        }
    }
}
