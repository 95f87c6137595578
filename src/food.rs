use crate::{Cell, Grid};

use rand::Rng;

pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new<R: Rng>(grid: Grid, rng: &mut R) -> Self {
        Food { position: randomize_position(grid, rng) }
    }

    pub fn at(position: Cell) -> Self {
        Food { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn relocate<R: Rng>(&mut self, grid: Grid, rng: &mut R) {
        self.position = randomize_position(grid, rng);
    }
}

/// Picks any cell of the arena, whether or not the snake is on it.
pub fn randomize_position<R: Rng>(grid: Grid, rng: &mut R) -> Cell {
    (rng.gen_range(0..grid.width), rng.gen_range(0..grid.height))
}
