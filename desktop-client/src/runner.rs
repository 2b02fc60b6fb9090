use std::sync::Arc;
use std::time::Duration;

use engine::{GameRng, GameState, GameView, TickDriver};
use tokio::sync::{mpsc, Mutex};

use crate::config::ClientConfig;
use crate::state::{ClientCommand, SharedState};
use crate::view::LocalView;

/// Offline game task: owns the engine state and the tick driver, and
/// applies UI commands received over the channel. The tokio mutex
/// serializes command handling against tick-driven steps.
pub async fn run_game(
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    config: ClientConfig,
    seed: u64,
) {
    let game = Arc::new(Mutex::new(GameState::new(GameRng::new(seed))));
    let view = LocalView::new(shared_state);
    let mut driver = TickDriver::new(
        Arc::clone(&game),
        view.clone(),
        Duration::from_millis(config.tick_interval_ms as u64),
    );

    engine::log!("Game task started (seed {})", seed);
    publish(&view, &*game.lock().await);

    while let Some(command) = command_rx.recv().await {
        match command {
            ClientCommand::Turn { direction } => {
                game.lock().await.set_direction(direction);
            }
            ClientCommand::Start => {
                let started = {
                    let mut state = game.lock().await;
                    let started = state.start();
                    if started {
                        publish(&view, &state);
                    }
                    started
                };
                if started {
                    driver.start_loop();
                }
            }
            ClientCommand::TogglePause => {
                let mut state = game.lock().await;
                if state.toggle_pause() {
                    publish(&view, &state);
                }
            }
            ClientCommand::Restart => {
                driver.stop_loop();
                let mut state = game.lock().await;
                state.reset();
                publish(&view, &state);
            }
        }
    }

    driver.stop_loop();
}

fn publish(view: &LocalView, state: &GameState) {
    view.update_hud(state.score(), state.status(), state.is_game_over());
    view.render(&state.snake_cells(), state.food());
}
