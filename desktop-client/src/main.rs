mod config;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::config::Validate;
use common::games::snake::{SessionCommand, SnakeSessionSettings};
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use config::{get_config_manager, Config};
use offline::run_snake_session;
use state::SharedState;
use ui::ReversnakeApp;

#[derive(Parser)]
#[command(name = "reversnake")]
struct Args {
    /// Config file; defaults to reversnake_config.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the seed from the config file.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config);
    let config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    };

    let mut settings = SnakeSessionSettings::from(&config.snake);
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    settings.validate()?;

    let tick_interval = settings.tick_interval;
    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    let session_thread = std::thread::spawn(move || -> Result<(), String> {
        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| format!("Failed to start tokio runtime: {}", e))?;
        rt.block_on(run_snake_session(settings, command_rx, shared_state_clone));
        Ok(())
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Reversnake"),
        ..Default::default()
    };

    let app_command_tx = command_tx.clone();
    let app_shared_state = shared_state.clone();
    eframe::run_native(
        "Reversnake",
        options,
        Box::new(move |cc| {
            app_shared_state.set_repaint_ctx(cc.egui_ctx.clone());
            Ok(Box::new(ReversnakeApp::new(
                app_shared_state,
                app_command_tx,
                tick_interval,
            )))
        }),
    )?;

    let _ = command_tx.send(SessionCommand::Quit);
    match session_thread.join() {
        Ok(Ok(())) => {}
        Ok(Err(e)) => log!("Snake session failed: {}", e),
        Err(_) => log!("Snake session thread panicked"),
    }

    if let Some(summary) = shared_state.get_summary() {
        log!(
            "Goodbye. Best score {} over {} game(s)",
            summary.best_score,
            summary.games_played
        );
    }

    Ok(())
}
