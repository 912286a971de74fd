// Domain layer - entities, collisions and per-step physics
pub mod domain;

// Application layer - game modes and round lifecycle
pub mod application;

// Infrastructure layer - configuration, rendering, input
pub mod config;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Ball, Block, BlockGrid, Paddle, Scoreboard};
pub use application::{GameState, Mode};
pub use config::GameConfig;
pub use input::FrameInput;
