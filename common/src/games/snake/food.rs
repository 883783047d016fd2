use std::collections::HashSet;

use crate::games::SessionRng;
use super::types::Cell;

pub const DEFAULT_REVERSE_FOOD_PROBABILITY: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub cell: Cell,
    /// Eating this food reverses the snake.
    pub reverses: bool,
}

/// Picks a cell uniformly from `1..=max_cell` that is neither occupied nor
/// `exclude`. Returns `None` when no such cell exists.
pub fn pick_food_cell(
    rng: &mut SessionRng,
    occupied: &HashSet<Cell>,
    exclude: Cell,
    max_cell: u32,
) -> Option<Cell> {
    let blocked = occupied
        .iter()
        .filter(|cell| (1..=max_cell).contains(&cell.0))
        .count()
        + usize::from((1..=max_cell).contains(&exclude.0) && !occupied.contains(&exclude));
    if blocked >= max_cell as usize {
        return None;
    }

    loop {
        let candidate = Cell(rng.random_range(1..=max_cell));
        if occupied.contains(&candidate) || candidate == exclude {
            continue;
        }
        return Some(candidate);
    }
}

pub fn roll_reverse_flag(rng: &mut SessionRng, probability: f64) -> bool {
    rng.chance(probability)
}
