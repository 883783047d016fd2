pub mod config;
pub mod games;
pub mod logger;

pub use games::snake::{
    Cell, Coord, DeathReason, Direction, Food, GameSnapshot, GameStatus, Grid, SessionCommand,
    SessionSummary, SnakeGameState, SnakeSession, SnakeSessionSettings, TickOutcome,
};
pub use games::{SessionRng, SnapshotBroadcaster};
