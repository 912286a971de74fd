//! Per-step ball physics.
//!
//! One call to [`step_ball`] moves the ball once and resolves, in order,
//! walls, paddle, blocks and the bottom edge. Every bounce is a pure sign
//! flip so per-axis speed never changes.

use super::{Ball, BlockGrid, Paddle, Scoreboard};
use crate::config::GameConfig;

/// What happened during a single ball step.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StepOutcome {
    pub blocks_destroyed: usize,
    pub life_lost: bool,
}

/// Advance the ball one step and apply every collision it causes
pub fn step_ball(
    ball: &mut Ball,
    paddle: &Paddle,
    blocks: &mut BlockGrid,
    scoreboard: &mut Scoreboard,
    config: &GameConfig,
) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    ball.integrate();

    // Walls: no positional correction
    if ball.left() < 0.0 || ball.right() > config.screen_width {
        ball.bounce_x();
    }
    if ball.top() < 0.0 {
        ball.bounce_y();
    }

    // Paddle: snap on top so the ball cannot sink into it
    if ball.circle().overlaps_rect(&paddle.rect) {
        ball.bounce_y();
        ball.position.y = paddle.top() - ball.radius;
    }

    // Blocks: every overlapping block is hit, no early exit
    for (index, block) in blocks.iter_mut().enumerate() {
        if block.is_intact() && ball.circle().overlaps_rect(&block.rect) {
            ball.bounce_y();
            block.destroy();
            scoreboard.award(config.points_per_block);
            outcome.blocks_destroyed += 1;
            log::trace!("block {} destroyed, score {}", index, scoreboard.score);
        }
    }

    if ball.bottom() > config.screen_height {
        scoreboard.lose_life();
        outcome.life_lost = true;
        if scoreboard.is_out_of_lives() {
            scoreboard.score = 0;
        } else {
            *ball = Ball::serve(config);
        }
    }

    outcome
}
