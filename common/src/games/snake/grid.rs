use super::types::{Cell, Coord};

/// Square board with row-major cell ids starting at 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        let mut counter = 1u32;
        let cells = (0..size)
            .map(|_| {
                (0..size)
                    .map(|_| {
                        let cell = Cell(counter);
                        counter += 1;
                        cell
                    })
                    .collect()
            })
            .collect();

        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Largest cell id, equal to the number of cells.
    pub fn max_cell(&self) -> u32 {
        (self.size * self.size) as u32
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn is_out_of_bounds(&self, coord: Coord) -> bool {
        let size = self.size as i32;
        coord.row < 0 || coord.col < 0 || coord.row >= size || coord.col >= size
    }

    pub fn cell_at(&self, coord: Coord) -> Option<Cell> {
        if self.is_out_of_bounds(coord) {
            return None;
        }
        Some(self.cells[coord.row as usize][coord.col as usize])
    }

    pub fn coord_of(&self, cell: Cell) -> Option<Coord> {
        if cell.0 == 0 || cell.0 > self.max_cell() {
            return None;
        }
        let index = (cell.0 - 1) as usize;
        Some(Coord::new((index / self.size) as i32, (index % self.size) as i32))
    }
}
