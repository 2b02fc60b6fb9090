use std::sync::{Arc, Mutex};

use engine::{Cell, Direction, GameStatus};

/// Fire-and-forget commands from the UI thread to the game task.
#[derive(Debug, Clone)]
pub enum ClientCommand {
    Turn { direction: Direction },
    Start,
    TogglePause,
    Restart,
}

/// Board and HUD snapshot published by the game task, read by the UI
/// every frame.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub score: u32,
    pub status: GameStatus,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            snake: vec![],
            food: None,
            score: 0,
            status: GameStatus::Ready,
            game_over: false,
        }
    }
}

pub struct SharedState {
    snapshot: Arc<Mutex<GameSnapshot>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(GameSnapshot::default())),
        }
    }

    pub fn set_board(&self, snake: Vec<Cell>, food: Option<Cell>) {
        let mut snapshot = self.snapshot.lock().unwrap();
        snapshot.snake = snake;
        snapshot.food = food;
    }

    pub fn set_hud(&self, score: u32, status: GameStatus, game_over: bool) {
        let mut snapshot = self.snapshot.lock().unwrap();
        snapshot.score = score;
        snapshot.status = status;
        snapshot.game_over = game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.snapshot.lock().unwrap().clone()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
        }
    }
}
