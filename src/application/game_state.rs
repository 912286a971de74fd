use crate::config::GameConfig;
use crate::domain::{Ball, BlockGrid, Paddle, Scoreboard, step_ball};
use crate::input::FrameInput;

/// Fraction of a step a frame may fall short by and still run that step.
/// Absorbs vsync jitter around the step interval; the shortfall is carried
/// as negative time into the next frame.
const STEP_SLACK: f32 = 0.1;

/// Which scene the game is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Menu,
    Playing,
}

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundEnd {
    OutOfLives,
    BoardCleared,
}

/// GameState owns every piece of mutable game data and drives the
/// menu/playing state machine.
pub struct GameState {
    pub config: GameConfig,
    pub mode: Mode,
    pub scoreboard: Scoreboard,
    pub ball: Ball,
    pub paddle: Paddle,
    pub blocks: BlockGrid,
    /// Unspent frame time carried into the next frame
    pub step_timer: f32,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            mode: Mode::Menu,
            scoreboard: Scoreboard::new(config.starting_lives),
            ball: Ball::serve(&config),
            paddle: Paddle::new(&config),
            blocks: BlockGrid::new(&config),
            step_timer: 0.0,
            config,
        }
    }

    /// Handle one rendered frame.
    ///
    /// In the menu only the confirm key matters. While playing, frame time is
    /// accumulated and spent in fixed simulation steps.
    pub fn frame(&mut self, input: &FrameInput, delta_time: f32) {
        match self.mode {
            Mode::Menu => {
                if input.confirm {
                    self.start();
                }
            }
            Mode::Playing => {
                self.step_timer += delta_time;
                let interval = self.config.step_interval();
                let threshold = interval * (1.0 - STEP_SLACK);
                let mut steps = 0;

                while self.step_timer >= threshold && self.mode == Mode::Playing {
                    if steps == self.config.max_steps_per_frame {
                        log::debug!("dropping {:.3}s of simulation backlog", self.step_timer);
                        self.step_timer = 0.0;
                        break;
                    }
                    self.step(input);
                    self.step_timer -= interval;
                    steps += 1;
                }
            }
        }
    }

    /// Menu -> Playing, keeping whatever state the last round left behind
    pub fn start(&mut self) {
        if self.mode == Mode::Menu {
            log::info!(
                "round started (score {}, lives {})",
                self.scoreboard.score,
                self.scoreboard.lives
            );
            self.mode = Mode::Playing;
            self.step_timer = 0.0;
        }
    }

    /// Run one simulation step: ball, then paddle, then the end-of-round check
    pub fn step(&mut self, input: &FrameInput) -> Option<RoundEnd> {
        if self.mode != Mode::Playing {
            return None;
        }

        let outcome = step_ball(
            &mut self.ball,
            &self.paddle,
            &mut self.blocks,
            &mut self.scoreboard,
            &self.config,
        );
        if outcome.life_lost {
            log::debug!("life lost, {} remaining", self.scoreboard.lives);
        }

        self.paddle.steer(&input.paddle(), &self.config);

        let end = self.round_end()?;
        match end {
            RoundEnd::OutOfLives => log::info!("out of lives, back to menu"),
            RoundEnd::BoardCleared => {
                log::info!("board cleared with score {}", self.scoreboard.score)
            }
        }
        self.return_to_menu();
        Some(end)
    }

    fn round_end(&self) -> Option<RoundEnd> {
        if self.scoreboard.is_out_of_lives() {
            Some(RoundEnd::OutOfLives)
        } else if self.scoreboard.score == self.config.max_score() {
            Some(RoundEnd::BoardCleared)
        } else {
            None
        }
    }

    /// Playing -> Menu: restore lives, ball and blocks. The score is left
    /// alone; only running out of lives zeroes it.
    fn return_to_menu(&mut self) {
        self.mode = Mode::Menu;
        self.scoreboard.lives = self.config.starting_lives;
        self.ball = Ball::serve(&self.config);
        self.blocks.reset(&self.config);
        self.step_timer = 0.0;
    }
}
