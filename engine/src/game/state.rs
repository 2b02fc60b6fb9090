use std::collections::{HashSet, VecDeque};

use crate::log;

use super::rng::GameRng;
use super::types::{Cell, Direction, EndReason, GameStatus};

pub const GRID_SIZE: usize = 20;

/// What a single tick did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Guard no-op: not running, paused, or already over.
    Skipped,
    /// Translated by one cell, same length.
    Moved,
    /// Ate food and grew by one cell.
    Ate,
    Ended(EndReason),
}

pub struct GameState {
    body: VecDeque<Cell>,
    body_set: HashSet<Cell>,
    direction: Direction,
    pending_direction: Direction,
    food: Option<Cell>,
    score: u32,
    running: bool,
    paused: bool,
    end_reason: Option<EndReason>,
    rng: GameRng,
}

impl GameState {
    pub fn new(rng: GameRng) -> Self {
        let mut state = Self {
            body: VecDeque::new(),
            body_set: HashSet::new(),
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food: None,
            score: 0,
            running: false,
            paused: false,
            end_reason: None,
            rng,
        };
        state.reset();
        state
    }

    /// Rebuilds the canonical start state: a two-segment snake centered
    /// on the grid heading right, score zero, flags cleared, fresh food.
    pub fn reset(&mut self) {
        let mid = GRID_SIZE / 2;
        self.body.clear();
        self.body_set.clear();
        for cell in [Cell::new(mid, mid), Cell::new(mid - 1, mid)] {
            self.body.push_back(cell);
            self.body_set.insert(cell);
        }
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.running = false;
        self.paused = false;
        self.end_reason = None;
        self.food = self.place_food();
    }

    /// Buffers a direction intent for the next step. Reversing against
    /// the current direction is rejected; between two ticks the last
    /// accepted intent wins.
    pub fn set_direction(&mut self, candidate: Direction) {
        if candidate.is_opposite(&self.direction) {
            return;
        }
        self.pending_direction = candidate;
    }

    pub fn step(&mut self) -> StepOutcome {
        if !self.running || self.paused || self.is_game_over() {
            return StepOutcome::Skipped;
        }

        self.direction = self.pending_direction;

        let next_head = match self.next_head() {
            Some(cell) => cell,
            None => return self.end_game(EndReason::WallCollision),
        };

        // The pre-move body includes the tail cell that would vacate on a
        // non-growth move; moving onto it still ends the game.
        if self.body_set.contains(&next_head) {
            return self.end_game(EndReason::SelfCollision);
        }

        self.body.push_front(next_head);
        self.body_set.insert(next_head);

        if self.food == Some(next_head) {
            self.score += 1;
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            self.food = self.place_food();
            if self.food.is_none() {
                return self.end_game(EndReason::BoardFull);
            }
            StepOutcome::Ate
        } else {
            let tail = self
                .body
                .pop_back()
                .expect("snake body is never empty");
            self.body_set.remove(&tail);
            StepOutcome::Moved
        }
    }

    /// Enters the running state; a finished game is reset first. Returns
    /// false when already running unpaused.
    pub fn start(&mut self) -> bool {
        if self.running && !self.paused {
            return false;
        }
        if self.is_game_over() {
            self.reset();
        }
        self.running = true;
        self.paused = false;
        true
    }

    /// Flips the pause flag. No-op unless a run is active; the tick
    /// driver keeps firing while paused and `step` skips.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.running || self.is_game_over() {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    pub fn status(&self) -> GameStatus {
        match self.end_reason {
            Some(EndReason::BoardFull) => GameStatus::Win,
            Some(_) => GameStatus::GameOver,
            None if !self.running => GameStatus::Ready,
            None if self.paused => GameStatus::Paused,
            None => GameStatus::Running,
        }
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("snake body is never empty")
    }

    /// Snake cells in order, head first.
    pub fn snake_cells(&self) -> Vec<Cell> {
        self.body.iter().copied().collect()
    }

    pub fn snake_len(&self) -> usize {
        self.body.len()
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.end_reason.is_some()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    fn next_head(&self) -> Option<Cell> {
        let head = self.head();
        let (dx, dy) = self.direction.vector();
        let x = head.x as i32 + dx;
        let y = head.y as i32 + dy;
        let range = 0..GRID_SIZE as i32;
        if !range.contains(&x) || !range.contains(&y) {
            return None;
        }
        Some(Cell::new(x as usize, y as usize))
    }

    fn end_game(&mut self, reason: EndReason) -> StepOutcome {
        self.running = false;
        self.end_reason = Some(reason);
        log!("Game ended ({:?}). Final score: {}", reason, self.score);
        StepOutcome::Ended(reason)
    }

    /// Uniform draw over unoccupied cells via rejection sampling; `None`
    /// once the snake covers the whole board.
    fn place_food(&mut self) -> Option<Cell> {
        if self.body_set.len() >= GRID_SIZE * GRID_SIZE {
            return None;
        }
        loop {
            let cell = Cell::new(
                self.rng.random_range(0..GRID_SIZE),
                self.rng.random_range(0..GRID_SIZE),
            );
            if !self.body_set.contains(&cell) {
                return Some(cell);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, cells: &[Cell]) {
        self.body = cells.iter().copied().collect();
        self.body_set = cells.iter().copied().collect();
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Option<Cell>) {
        self.food = food;
    }

    #[cfg(test)]
    pub(crate) fn force_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.pending_direction = direction;
    }
}
