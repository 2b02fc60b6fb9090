mod config;
mod runner;
mod state;
mod ui;
mod view;

use clap::Parser;
use eframe::egui;
use engine::config::ConfigManager;
use engine::logger::init_logger;
use tokio::sync::mpsc;

use config::ClientConfig;
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser)]
#[command(about = "Grid snake desktop client")]
struct Args {
    /// Path to the YAML client configuration.
    #[arg(long, default_value = "client_config.yaml")]
    config: String,

    /// Fixed RNG seed for food placement (random when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(None);

    let config_manager: ConfigManager<ClientConfig> = ConfigManager::from_yaml_file(&args.config);
    let config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            engine::log!("Falling back to default config: {}", e);
            ClientConfig::default()
        }
    };

    let seed: u64 = args.seed.unwrap_or_else(rand::random);

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    let config_clone = config.clone();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
        rt.block_on(runner::run_game(shared_state_clone, command_rx, config_clone, seed));
    });

    let board_px = config.cell_px * engine::GRID_SIZE as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_px + 80.0, board_px + 220.0])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SnakeApp::new(
                shared_state,
                command_tx,
                config.cell_px,
            )))
        }),
    )?;

    Ok(())
}
