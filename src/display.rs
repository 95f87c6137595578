//! The boundary between the game and whatever shows it.
//!
//! Coordinates handed across this boundary are screen units: one unit is one
//! terminal cell in the shipped adapter, and a grid cell spans
//! [`CELL_COLUMNS`] units horizontally so it looks square.

use std::time::Duration;

use anyhow::Result;

use crate::Grid;

pub const CELL_COLUMNS: i32 = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Escape,
    P,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    MousePosition(i32, i32),
    MouseButtonState(bool),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    Green,
    Red,
    Grey,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextSize {
    Normal,
    Large,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, (px, py): (i32, i32)) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

/// Screen size in units for a grid.
pub fn screen_size(grid: Grid) -> (i32, i32) {
    (grid.width * CELL_COLUMNS, grid.height)
}

/// The screen rectangle covered by a grid cell.
pub fn cell_rect((x, y): (i32, i32)) -> Rect {
    Rect::new(x * CELL_COLUMNS, y, CELL_COLUMNS, 1)
}

pub trait Display {
    /// Drains every input event that arrived since the last call. Never blocks
    /// for longer than a frame.
    fn poll_input(&mut self) -> Result<Vec<InputEvent>>;

    /// Clears the playfield and draws the empty grid.
    fn draw_grid(&mut self, grid: Grid) -> Result<()>;

    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<()>;

    fn draw_text(&mut self, text: &str, pos: (i32, i32), size: TextSize, color: Color) -> Result<()>;

    fn present_frame(&mut self) -> Result<()>;

    /// Sleeps out the rest of the current frame at `ticks_per_second`.
    fn wait_until_next_tick(&mut self, ticks_per_second: u32);

    /// Keeps the last presented frame on screen for `duration`.
    fn hold(&mut self, duration: Duration);
}
