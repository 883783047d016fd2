use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

use crate::games::{SessionRng, SnapshotBroadcaster};
use crate::log;
use super::game_state::{KeyOutcome, SnakeGameState, TickOutcome};
use super::settings::SnakeSessionSettings;
use super::snapshot::GameSnapshot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Raw key identifier, e.g. `"ArrowUp"`.
    Key(String),
    TogglePause,
    Quit,
}

/// Totals for one session. Kept in memory only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub seed: u64,
    pub games_played: u32,
    pub best_score: u32,
    pub ticks: u64,
}

pub struct SnakeSession;

impl SnakeSession {
    /// Owns the game state for the lifetime of the session. Ticks and
    /// commands are handled one at a time on this task, so a key press never
    /// observes a half-applied tick.
    pub async fn run(
        settings: SnakeSessionSettings,
        mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: impl SnapshotBroadcaster,
    ) -> SessionSummary {
        let mut rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        let mut game_state =
            SnakeGameState::new(settings.board_size, settings.reverse_food_probability);
        let mut summary = SessionSummary {
            seed: rng.seed(),
            games_played: 1,
            best_score: 0,
            ticks: 0,
        };
        let mut paused = false;

        log!(
            "Session started: seed {}, board {}x{}, tick {}ms",
            summary.seed,
            settings.board_size,
            settings.board_size,
            settings.tick_interval.as_millis()
        );

        broadcaster
            .broadcast_snapshot(build_snapshot(&game_state, paused))
            .await;

        let mut tick_interval_timer = interval(settings.tick_interval);
        tick_interval_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // the first tick completes immediately
        tick_interval_timer.tick().await;

        loop {
            tokio::select! {
                _ = tick_interval_timer.tick() => {
                    if paused {
                        continue;
                    }

                    let outcome = game_state.update(&mut rng);
                    if outcome == TickOutcome::Idle {
                        continue;
                    }

                    summary.ticks += 1;
                    summary.best_score = summary.best_score.max(game_state.score());
                    broadcaster
                        .broadcast_snapshot(build_snapshot(&game_state, paused))
                        .await;
                }
                command = command_rx.recv() => {
                    match command {
                        Some(SessionCommand::Key(key)) => {
                            if game_state.on_direction_key(&key) == KeyOutcome::Restarted {
                                summary.games_played += 1;
                                paused = false;
                                broadcaster
                                    .broadcast_snapshot(build_snapshot(&game_state, paused))
                                    .await;
                            }
                        }
                        Some(SessionCommand::TogglePause) => {
                            if game_state.status().is_running() {
                                paused = !paused;
                                log!("Session {}", if paused { "paused" } else { "resumed" });
                                broadcaster
                                    .broadcast_snapshot(build_snapshot(&game_state, paused))
                                    .await;
                            }
                        }
                        Some(SessionCommand::Quit) | None => break,
                    }
                }
            }
        }

        log!(
            "Session ended: {} game(s), best score {}, {} ticks",
            summary.games_played,
            summary.best_score,
            summary.ticks
        );

        broadcaster.broadcast_session_end(summary.clone()).await;
        summary
    }
}

fn build_snapshot(game_state: &SnakeGameState, paused: bool) -> GameSnapshot {
    GameSnapshot {
        paused,
        ..game_state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct RecordingBroadcaster {
        snapshots: Arc<Mutex<Vec<GameSnapshot>>>,
        summaries: Arc<Mutex<Vec<SessionSummary>>>,
    }

    impl SnapshotBroadcaster for RecordingBroadcaster {
        async fn broadcast_snapshot(&self, snapshot: GameSnapshot) {
            self.snapshots.lock().unwrap().push(snapshot);
        }

        async fn broadcast_session_end(&self, summary: SessionSummary) {
            self.summaries.lock().unwrap().push(summary);
        }
    }

    fn fast_settings(board_size: usize) -> SnakeSessionSettings {
        SnakeSessionSettings {
            board_size,
            tick_interval: Duration::from_millis(5),
            reverse_food_probability: 0.3,
            seed: Some(42),
        }
    }

    #[tokio::test]
    async fn test_quit_ends_session() {
        let (tx, rx) = mpsc::unbounded_channel();
        let broadcaster = RecordingBroadcaster::default();
        tx.send(SessionCommand::Quit).unwrap();

        let summary = SnakeSession::run(fast_settings(15), rx, broadcaster.clone()).await;

        assert_eq!(summary.seed, 42);
        assert_eq!(summary.games_played, 1);
        let snapshots = broadcaster.snapshots.lock().unwrap();
        assert_eq!(snapshots[0].tick, 0);
        assert_eq!(snapshots[0].snake_len(), 1);
        assert_eq!(broadcaster.summaries.lock().unwrap().as_slice(), &[summary]);
    }

    #[tokio::test]
    async fn test_closed_channel_ends_session() {
        let (tx, rx) = mpsc::unbounded_channel::<SessionCommand>();
        drop(tx);

        let summary = SnakeSession::run(fast_settings(15), rx, RecordingBroadcaster::default()).await;
        assert_eq!(summary.games_played, 1);
    }

    #[tokio::test]
    async fn test_ticks_are_broadcast() {
        let (tx, rx) = mpsc::unbounded_channel();
        let broadcaster = RecordingBroadcaster::default();
        let handle = tokio::spawn(SnakeSession::run(fast_settings(15), rx, broadcaster.clone()));

        tokio::time::sleep(Duration::from_millis(40)).await;
        tx.send(SessionCommand::Quit).unwrap();
        let summary = handle.await.unwrap();

        assert!(summary.ticks > 0);
        let snapshots = broadcaster.snapshots.lock().unwrap();
        let ticks: Vec<u64> = snapshots.iter().map(|s| s.tick).collect();
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_paused_session_does_not_tick() {
        let (tx, rx) = mpsc::unbounded_channel();
        let broadcaster = RecordingBroadcaster::default();
        tx.send(SessionCommand::TogglePause).unwrap();
        let handle = tokio::spawn(SnakeSession::run(fast_settings(15), rx, broadcaster.clone()));

        tokio::time::sleep(Duration::from_millis(40)).await;
        tx.send(SessionCommand::Quit).unwrap();
        let summary = handle.await.unwrap();

        assert_eq!(summary.ticks, 0);
        let snapshots = broadcaster.snapshots.lock().unwrap();
        assert!(snapshots.last().unwrap().paused);
    }

    #[tokio::test]
    async fn test_game_over_then_restart() {
        let (tx, rx) = mpsc::unbounded_channel();
        let broadcaster = RecordingBroadcaster::default();
        // start (2,2) on a 5x5 board; heading up leaves the board on the third tick
        tx.send(SessionCommand::Key("ArrowUp".to_string())).unwrap();
        let handle = tokio::spawn(SnakeSession::run(fast_settings(5), rx, broadcaster.clone()));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(broadcaster.snapshots.lock().unwrap().last().unwrap().is_game_over());

        tx.send(SessionCommand::Key("Escape".to_string())).unwrap();
        tx.send(SessionCommand::Key("ArrowLeft".to_string())).unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        tx.send(SessionCommand::Quit).unwrap();
        let summary = handle.await.unwrap();

        assert_eq!(summary.games_played, 2);
        assert_eq!(summary.best_score, 0);
        let snapshots = broadcaster.snapshots.lock().unwrap();
        assert!(snapshots.iter().skip(1).any(|s| s.tick == 0 && !s.is_game_over()));
    }
}
