use common::games::snake::{SessionCommand, SnakeSession, SnakeSessionSettings};
use common::log;
use tokio::sync::mpsc;
use crate::state::SharedState;

use super::LocalBroadcaster;

pub async fn run_snake_session(
    settings: SnakeSessionSettings,
    command_rx: mpsc::UnboundedReceiver<SessionCommand>,
    shared_state: SharedState,
) {
    let broadcaster = LocalBroadcaster::new(shared_state);

    let game_handle = tokio::spawn(SnakeSession::run(settings, command_rx, broadcaster));

    match game_handle.await {
        Ok(summary) => log!(
            "Played {} game(s) with seed {}, best score {}",
            summary.games_played,
            summary.seed,
            summary.best_score
        ),
        Err(e) => log!("Snake session task failed: {}", e),
    }
}
