use crate::games::SessionRng;
use crate::log;
use super::food::{pick_food_cell, roll_reverse_flag, Food};
use super::grid::Grid;
use super::entity::{Segment, Snake};
use super::snapshot::GameSnapshot;
use super::types::{Cell, Coord, DeathReason, Direction, GameStatus};

const INITIAL_FOOD_OFFSET: u32 = 5;
const INITIAL_DIRECTION: Direction = Direction::Right;

/// Result of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is over; nothing moved.
    Idle,
    Moved,
    Ate { grew: bool, reversed: bool },
    GameOver(DeathReason),
}

/// Result of a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    DirectionQueued(Direction),
    Restarted,
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    grid: Grid,
    snake: Snake,
    food: Food,
    direction: Direction,
    pending_direction: Option<Direction>,
    score: u32,
    status: GameStatus,
    tick: u64,
    reverse_food_probability: f64,
}

impl SnakeGameState {
    /// Length-1 snake at the upper-third intersection heading right, with
    /// plain food five cells ahead of it.
    pub fn new(board_size: usize, reverse_food_probability: f64) -> Self {
        let grid = Grid::new(board_size);
        let start = starting_segment(&grid);
        let max_cell = grid.max_cell();
        let food_cell = Cell((start.cell.0 + INITIAL_FOOD_OFFSET - 1) % max_cell + 1);

        Self {
            grid,
            snake: Snake::new(start),
            food: Food {
                cell: food_cell,
                reverses: false,
            },
            direction: INITIAL_DIRECTION,
            pending_direction: None,
            score: 0,
            status: GameStatus::Running,
            tick: 0,
            reverse_food_probability,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Replaces the whole state with a fresh game on the same board.
    pub fn restart(&mut self) {
        *self = Self::new(self.grid.size(), self.reverse_food_probability);
    }

    /// Requests a direction for the next tick. The last request before a
    /// tick wins. Ignored once the game is over.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !self.status.is_running() {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Handles a raw key identifier. While running, arrow keys queue a
    /// direction; after game over, any arrow key restarts. Other keys are
    /// ignored.
    pub fn on_direction_key(&mut self, key: &str) -> KeyOutcome {
        let Some(direction) = Direction::from_key(key) else {
            return KeyOutcome::Ignored;
        };

        match self.status {
            GameStatus::Running => {
                self.set_direction(direction);
                KeyOutcome::DirectionQueued(direction)
            }
            GameStatus::GameOver(_) => {
                self.restart();
                log!("Game restarted");
                KeyOutcome::Restarted
            }
        }
    }

    pub fn update(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if !self.status.is_running() {
            return TickOutcome::Idle;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
        self.tick += 1;

        let next_head = match self.calculate_next_head() {
            Ok(segment) => segment,
            Err(reason) => return self.end_game(reason),
        };

        self.snake.advance_head(next_head);
        self.snake.drop_tail();

        if next_head.cell != self.food.cell {
            return TickOutcome::Moved;
        }

        self.consume_food(rng)
    }

    fn calculate_next_head(&self) -> Result<Segment, DeathReason> {
        let next = self.snake.head().coord.step(self.direction);

        if self.grid.is_out_of_bounds(next) {
            return Err(DeathReason::WallCollision);
        }
        let cell = self
            .grid
            .cell_at(next)
            .ok_or(DeathReason::WallCollision)?;

        // The tail leaves its cell during this same tick.
        if self.snake.occupies(cell) && cell != self.snake.tail().cell {
            return Err(DeathReason::SelfCollision);
        }

        Ok(Segment::new(next, cell))
    }

    /// Grow, then reverse, then place new food. Reversing changes which end
    /// is the tail, so the order matters for later ticks.
    fn consume_food(&mut self, rng: &mut SessionRng) -> TickOutcome {
        let eaten = self.food;

        let grew = self.snake.grow_tail(&self.grid, self.direction);
        if eaten.reverses {
            self.reverse_snake();
        }
        self.score += 1;

        log!(
            "Ate food at {}. Score: {}, length: {}{}",
            eaten.cell,
            self.score,
            self.snake.len(),
            if eaten.reverses { ", reversed" } else { "" }
        );

        let Some(cell) = pick_food_cell(rng, self.snake.cells(), eaten.cell, self.grid.max_cell())
        else {
            return self.end_game(DeathReason::BoardFilled);
        };

        self.food = Food {
            cell,
            reverses: roll_reverse_flag(rng, self.reverse_food_probability),
        };

        TickOutcome::Ate {
            grew,
            reversed: eaten.reverses,
        }
    }

    fn reverse_snake(&mut self) {
        let tail_direction = self.snake.tail_direction().unwrap_or(self.direction);
        self.direction = tail_direction.opposite();
        self.snake.reverse();
    }

    fn end_game(&mut self, reason: DeathReason) -> TickOutcome {
        self.status = GameStatus::GameOver(reason);
        self.pending_direction = None;
        log!(
            "Game over at tick {}: snake {}. Score: {}",
            self.tick,
            reason,
            self.score
        );
        TickOutcome::GameOver(reason)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.grid.rows().to_vec(),
            snake_head_cell: self.snake.head().cell,
            snake_cells: self.snake.cells().clone(),
            food_cell: self.food.cell,
            food_reverses: self.food.reverses,
            score: self.score,
            direction: self.direction,
            status: self.status,
            tick: self.tick,
            paused: false,
        }
    }

    #[cfg(test)]
    fn set_snake(&mut self, body: &[(i32, i32)], direction: Direction) {
        let segment = |&(row, col): &(i32, i32)| {
            let coord = Coord::new(row, col);
            Segment::new(coord, self.grid.cell_at(coord).unwrap())
        };
        let mut snake = Snake::new(segment(&body[body.len() - 1]));
        for position in body.iter().rev().skip(1) {
            snake.advance_head(segment(position));
        }
        self.snake = snake;
        self.direction = direction;
    }

    #[cfg(test)]
    fn set_food(&mut self, row: i32, col: i32, reverses: bool) {
        self.food = Food {
            cell: self.grid.cell_at(Coord::new(row, col)).unwrap(),
            reverses,
        };
    }

    #[cfg(test)]
    fn body(&self) -> Vec<(i32, i32)> {
        self.snake
            .segments()
            .map(|s| (s.coord.row, s.coord.col))
            .collect()
    }
}

/// Cell at `(round(n / 3), round(n / 3))`.
fn starting_segment(grid: &Grid) -> Segment {
    let index = ((grid.size() + 1) / 3) as i32;
    let coord = Coord::new(index, index);
    let cell = grid
        .cell_at(coord)
        .expect("Starting position should be on the board");
    Segment::new(coord, cell)
}
