mod ball;
mod block;
mod paddle;
mod scoreboard;
pub mod simulation;

pub use ball::Ball;
pub use block::{Block, BlockGrid, BlockState, RAINBOW};
pub use paddle::{Paddle, PaddleInput};
pub use scoreboard::Scoreboard;
pub use simulation::{StepOutcome, step_ball};
