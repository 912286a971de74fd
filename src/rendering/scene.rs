use macroquad::prelude::*;
use crate::application::{GameState, Mode};

pub const BACKGROUND: Color = Color::new(0.96, 0.96, 0.96, 1.0);
pub const BALL_COLOR: Color = BLUE;
pub const PADDLE_COLOR: Color = DARKBLUE;
pub const TEXT_COLOR: Color = BLACK;

const TITLE: &str = "Breakout Game";
const PROMPT: &str = "Press ENTER to Start";

/// Horizontal placement of a text command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// `x` is the left edge
    Left,
    /// `x` is the horizontal center
    Center,
}

/// One primitive to draw. Text `y` is the top of the line, not the baseline.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        align: TextAlign,
    },
    Circle { center: Vec2, radius: f32, color: Color },
    Rect { rect: Rect, color: Color },
}

/// Build the draw list for the current frame without touching any state
pub fn compose(state: &GameState) -> Vec<DrawCommand> {
    match state.mode {
        Mode::Menu => compose_menu(state),
        Mode::Playing => compose_play(state),
    }
}

fn compose_menu(state: &GameState) -> Vec<DrawCommand> {
    let cx = state.config.screen_width / 2.0;
    let cy = state.config.screen_height / 2.0;
    vec![
        DrawCommand::Clear(BACKGROUND),
        DrawCommand::Text {
            text: TITLE.to_owned(),
            x: cx,
            y: cy - 50.0,
            size: 30.0,
            color: TEXT_COLOR,
            align: TextAlign::Center,
        },
        DrawCommand::Text {
            text: PROMPT.to_owned(),
            x: cx,
            y: cy + 10.0,
            size: 20.0,
            color: TEXT_COLOR,
            align: TextAlign::Center,
        },
    ]
}

fn compose_play(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(5 + state.blocks.len());

    commands.push(DrawCommand::Clear(BACKGROUND));
    commands.push(DrawCommand::Text {
        text: format!("Score: {}", state.scoreboard.score),
        x: 10.0,
        y: 10.0,
        size: 20.0,
        color: TEXT_COLOR,
        align: TextAlign::Left,
    });
    commands.push(DrawCommand::Text {
        text: format!("Lives: {}", state.scoreboard.lives),
        x: state.config.screen_width - 100.0,
        y: 10.0,
        size: 20.0,
        color: TEXT_COLOR,
        align: TextAlign::Left,
    });
    commands.push(DrawCommand::Circle {
        center: state.ball.position,
        radius: state.ball.radius,
        color: BALL_COLOR,
    });
    commands.push(DrawCommand::Rect {
        rect: state.paddle.rect,
        color: PADDLE_COLOR,
    });
    commands.extend(
        state
            .blocks
            .iter_intact()
            .map(|block| DrawCommand::Rect { rect: block.rect, color: block.color }),
    );

    commands
}
