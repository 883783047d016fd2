mod entity;
mod food;
mod game_state;
mod grid;
mod session;
mod settings;
mod snapshot;
mod types;

pub use entity::{Segment, Snake};
pub use food::{pick_food_cell, roll_reverse_flag, Food, DEFAULT_REVERSE_FOOD_PROBABILITY};
pub use game_state::{KeyOutcome, SnakeGameState, TickOutcome};
pub use grid::Grid;
pub use session::{SessionCommand, SessionSummary, SnakeSession};
pub use settings::{
    SnakeSessionSettings, BOARD_SIZE_RANGE, DEFAULT_BOARD_SIZE, DEFAULT_TICK_INTERVAL,
    TICK_INTERVAL_MS_RANGE,
};
pub use snapshot::{CellKind, GameSnapshot};
pub use types::{Cell, Coord, DeathReason, Direction, GameStatus};
