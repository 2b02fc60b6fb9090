mod rng;
mod state;
mod ticker;
mod types;
mod view;

pub use rng::GameRng;
pub use state::{GameState, StepOutcome, GRID_SIZE};
pub use ticker::TickDriver;
pub use types::{Cell, Direction, EndReason, GameStatus};
pub use view::GameView;
