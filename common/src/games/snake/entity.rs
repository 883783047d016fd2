use std::collections::{HashSet, VecDeque};

use super::grid::Grid;
use super::types::{Cell, Coord, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub coord: Coord,
    pub cell: Cell,
}

impl Segment {
    pub fn new(coord: Coord, cell: Cell) -> Self {
        Self { coord, cell }
    }
}

/// Snake body ordered head (front) to tail (back), together with the set of
/// cells it occupies. The two are only changed together.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Segment>,
    body_set: HashSet<Cell>,
}

impl Snake {
    pub fn new(start: Segment) -> Self {
        Self {
            body: VecDeque::from([start]),
            body_set: HashSet::from([start.cell]),
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn head(&self) -> Segment {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Segment {
        *self.body.back().expect("Snake body should never be empty")
    }

    /// Segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.body.iter()
    }

    pub fn cells(&self) -> &HashSet<Cell> {
        &self.body_set
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body_set.contains(&cell)
    }

    pub fn advance_head(&mut self, head: Segment) {
        self.body.push_front(head);
        self.body_set.insert(head.cell);
    }

    /// Removes the tail segment. A single-segment snake is both head and tail,
    /// so nothing is removed and `None` is returned.
    pub fn drop_tail(&mut self) -> Option<Segment> {
        if self.body.len() == 1 {
            return None;
        }

        let tail = self.body.pop_back()?;
        // The head may have just moved onto the cell the tail is leaving.
        if tail.cell != self.head().cell {
            self.body_set.remove(&tail.cell);
        }
        Some(tail)
    }

    /// Direction the tail travels in: from the tail towards the segment in
    /// front of it. `None` for a single-segment snake.
    pub fn tail_direction(&self) -> Option<Direction> {
        let len = self.body.len();
        if len < 2 {
            return None;
        }
        Direction::between(self.body[len - 1].coord, self.body[len - 2].coord)
    }

    /// Extends the snake by one segment behind its tail, against the tail's
    /// direction of travel (`fallback` when the snake is a single segment).
    /// Returns `false` without changing anything when that cell is off the
    /// board or already occupied.
    pub fn grow_tail(&mut self, grid: &Grid, fallback: Direction) -> bool {
        let tail = self.tail();
        let tail_direction = self.tail_direction().unwrap_or(fallback);
        let growth = tail.coord.step(tail_direction.opposite());

        if grid.is_out_of_bounds(growth) {
            return false;
        }
        let Some(cell) = grid.cell_at(growth) else {
            return false;
        };
        if self.body_set.contains(&cell) {
            return false;
        }

        self.body.push_back(Segment::new(growth, cell));
        self.body_set.insert(cell);
        true
    }

    /// Reverses the body in place: the tail becomes the head.
    pub fn reverse(&mut self) {
        self.body.make_contiguous().reverse();
    }
}
