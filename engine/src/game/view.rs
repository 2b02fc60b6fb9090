use super::types::{Cell, GameStatus};

/// Presentation side of the engine: a board surface plus a HUD. The
/// engine pushes state after every mutation; implementations decide how
/// to draw it.
pub trait GameView: Clone + Send + Sync + 'static {
    /// Redraw the board. The snake is ordered head-first.
    fn render(&self, snake: &[Cell], food: Option<Cell>);

    /// Report score and lifecycle status changes.
    fn update_hud(&self, score: u32, status: GameStatus, game_over: bool);
}
