use std::collections::HashSet;

use super::types::{Cell, Direction, GameStatus};

/// What a board cell should be drawn as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Food,
    ReversingFood,
    Snake,
    SnakeHead,
}

/// Read-only copy of the game for renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub board: Vec<Vec<Cell>>,
    pub snake_head_cell: Cell,
    pub snake_cells: HashSet<Cell>,
    pub food_cell: Cell,
    pub food_reverses: bool,
    pub score: u32,
    pub direction: Direction,
    pub status: GameStatus,
    pub tick: u64,
    pub paused: bool,
}

impl GameSnapshot {
    /// The head wins over the body, the body over food.
    pub fn cell_kind(&self, cell: Cell) -> CellKind {
        if cell == self.snake_head_cell {
            CellKind::SnakeHead
        } else if self.snake_cells.contains(&cell) {
            CellKind::Snake
        } else if cell == self.food_cell && self.food_reverses {
            CellKind::ReversingFood
        } else if cell == self.food_cell {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }

    pub fn snake_len(&self) -> usize {
        self.snake_cells.len()
    }

    pub fn is_game_over(&self) -> bool {
        !self.status.is_running()
    }
}
