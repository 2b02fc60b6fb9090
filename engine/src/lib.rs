pub mod config;
pub mod game;
pub mod logger;

pub use game::{
    Cell, Direction, EndReason, GameRng, GameState, GameStatus, GameView, StepOutcome,
    TickDriver, GRID_SIZE,
};
