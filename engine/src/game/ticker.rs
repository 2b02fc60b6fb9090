use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use super::state::{GameState, StepOutcome};
use super::view::GameView;

/// Fixed-period scheduler driving `GameState::step` while a run is
/// active. Holds at most one outstanding tick task; the task exits on
/// its own when the game ends, so no timer survives a game over.
pub struct TickDriver<V: GameView> {
    game: Arc<Mutex<GameState>>,
    view: V,
    tick_interval: Duration,
    task: Option<JoinHandle<()>>,
}

impl<V: GameView> TickDriver<V> {
    pub fn new(game: Arc<Mutex<GameState>>, view: V, tick_interval: Duration) -> Self {
        Self {
            game,
            view,
            tick_interval,
            task: None,
        }
    }

    /// Spawns the tick task unless one is already live. The first step
    /// lands one full period after the call.
    pub fn start_loop(&mut self) {
        if let Some(task) = &self.task
            && !task.is_finished()
        {
            return;
        }

        let game = Arc::clone(&self.game);
        let view = self.view.clone();
        let period = self.tick_interval;

        self.task = Some(tokio::spawn(async move {
            let mut timer = interval_at(Instant::now() + period, period);
            loop {
                timer.tick().await;

                let mut state = game.lock().await;
                if state.step() == StepOutcome::Skipped {
                    continue;
                }

                view.update_hud(state.score(), state.status(), state.is_game_over());
                view.render(&state.snake_cells(), state.food());

                if state.is_game_over() {
                    break;
                }
            }
        }));
    }

    /// Cancels the tick task if one is scheduled. Safe to call when
    /// nothing is running.
    pub fn stop_loop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::game::rng::GameRng;
    use crate::game::types::{Cell, Direction, GameStatus};

    #[derive(Clone)]
    struct CountingView {
        renders: Arc<AtomicUsize>,
    }

    impl CountingView {
        fn new() -> Self {
            Self {
                renders: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl GameView for CountingView {
        fn render(&self, _snake: &[Cell], _food: Option<Cell>) {
            self.renders.fetch_add(1, Ordering::SeqCst);
        }

        fn update_hud(&self, _score: u32, _status: GameStatus, _game_over: bool) {}
    }

    fn shared_state() -> Arc<Mutex<GameState>> {
        Arc::new(Mutex::new(GameState::new(GameRng::new(42))))
    }

    #[tokio::test]
    async fn test_loop_drives_steps_until_game_over() {
        let game = shared_state();
        {
            let mut state = game.lock().await;
            state.set_snake(&[Cell::new(17, 10), Cell::new(16, 10)]);
            state.set_food(Some(Cell::new(0, 0)));
            state.force_direction(Direction::Right);
            state.start();
        }

        let view = CountingView::new();
        let mut driver =
            TickDriver::new(Arc::clone(&game), view.clone(), Duration::from_millis(5));
        driver.start_loop();

        tokio::time::sleep(Duration::from_millis(400)).await;

        let state = game.lock().await;
        assert!(state.is_game_over());
        assert_eq!(state.status(), GameStatus::GameOver);
        // Two moves (to x=18 and x=19) plus the terminal wall step.
        assert_eq!(view.renders.load(Ordering::SeqCst), 3);
        assert!(driver.task.as_ref().is_some_and(|t| t.is_finished()));
        drop(state);
        driver.stop_loop();
    }

    #[tokio::test]
    async fn test_no_steps_while_not_running() {
        let game = shared_state();
        let view = CountingView::new();
        let mut driver =
            TickDriver::new(Arc::clone(&game), view.clone(), Duration::from_millis(5));
        driver.start_loop();

        tokio::time::sleep(Duration::from_millis(100)).await;

        let state = game.lock().await;
        assert_eq!(state.head(), Cell::new(10, 10));
        assert_eq!(view.renders.load(Ordering::SeqCst), 0);
        drop(state);
        driver.stop_loop();
    }

    #[tokio::test]
    async fn test_paused_ticks_are_skipped() {
        let game = shared_state();
        {
            let mut state = game.lock().await;
            state.start();
            state.toggle_pause();
        }

        let view = CountingView::new();
        let mut driver =
            TickDriver::new(Arc::clone(&game), view.clone(), Duration::from_millis(5));
        driver.start_loop();

        tokio::time::sleep(Duration::from_millis(100)).await;

        let state = game.lock().await;
        assert_eq!(state.head(), Cell::new(10, 10));
        assert_eq!(view.renders.load(Ordering::SeqCst), 0);
        drop(state);
        driver.stop_loop();
    }

    #[tokio::test]
    async fn test_start_and_stop_are_idempotent() {
        let game = shared_state();
        let view = CountingView::new();
        let mut driver = TickDriver::new(Arc::clone(&game), view, Duration::from_millis(5));

        driver.stop_loop();
        driver.start_loop();
        driver.start_loop();
        assert!(driver.task.is_some());

        driver.stop_loop();
        driver.stop_loop();
        assert!(driver.task.is_none());
    }
}
