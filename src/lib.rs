pub mod config;
pub mod display;
pub mod food;
pub mod game;
pub mod menu;
pub mod render;
pub mod rules;
pub mod snake;
pub mod state;
pub mod term;

/// A grid coordinate. Signed so a head that left the arena is still representable.
pub type Cell = (i32, i32);

/// The fixed arena the snake lives in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Grid { width, height }
    }

    pub fn contains(&self, (x, y): Cell) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    pub fn center(&self) -> Cell {
        (self.width / 2, self.height / 2)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(20, 20)
    }
}
