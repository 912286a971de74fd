/// Score and remaining lives for the current round.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Scoreboard {
    pub score: u32,
    pub lives: u32,
}

impl Scoreboard {
    pub const fn new(starting_lives: u32) -> Self {
        Self { score: 0, lives: starting_lives }
    }

    pub fn award(&mut self, points: u32) {
        self.score += points;
    }

    /// Take one life, never going below zero
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub const fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }
}
