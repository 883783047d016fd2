use std::fmt;

/// Row-major cell id, starting at 1 in the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(pub u32);

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Board position. Signed so that the neighbour of an edge cell can be
/// represented and rejected by a bounds check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn step(self, direction: Direction) -> Coord {
        let (dr, dc) = direction.delta();
        Coord::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// `(row, col)` offset of one step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }

    /// Direction `d` such that `to == from.step(d)`, or `None` when the two
    /// coordinates are not orthogonal neighbours.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| from.step(*direction) == to)
    }

    /// Maps arrow-key identifiers to directions. Anything else is `None` and
    /// must be ignored by the caller.
    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowRight" => Some(Direction::Right),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    /// No free cell is left for food. The player filled the board.
    BoardFilled,
}

impl fmt::Display for DeathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DeathReason::WallCollision => "hit the wall",
            DeathReason::SelfCollision => "ran into itself",
            DeathReason::BoardFilled => "filled the board",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver(DeathReason),
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }
}
