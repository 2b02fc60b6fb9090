use engine::{Cell, GameStatus, GameView};

use crate::state::SharedState;

/// In-process presentation endpoint: writes engine notifications into
/// the snapshot the egui app reads.
#[derive(Clone)]
pub struct LocalView {
    shared_state: SharedState,
}

impl LocalView {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameView for LocalView {
    fn render(&self, snake: &[Cell], food: Option<Cell>) {
        self.shared_state.set_board(snake.to_vec(), food);
    }

    fn update_hud(&self, score: u32, status: GameStatus, game_over: bool) {
        self.shared_state.set_hud(score, status, game_over);
    }
}
