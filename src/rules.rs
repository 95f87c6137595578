use crate::Grid;
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfBite,
}

/// What the snake's current head runs into, if anything.
pub fn collision(snake: &Snake, grid: Grid) -> Option<Collision> {
    let head = snake.head();

    if snake.body()[1..].contains(&head) {
        Some(Collision::SelfBite)
    } else if !grid.contains(head) {
        Some(Collision::Wall)
    } else {
        None
    }
}

pub fn check_collision(snake: &Snake, grid: Grid) -> bool {
    collision(snake, grid).is_some()
}
