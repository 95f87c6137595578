use crate::Cell;
use Direction::*;

/// Every this many points the snake gains one tick per second.
pub const SPEED_UP_EVERY: u32 = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn delta(self) -> Cell {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        let (dx, dy) = self.delta();
        other.delta() == (-dx, -dy)
    }
}

pub struct Snake {
    body: Vec<Cell>,
    direction: Direction,
    requested: Option<Direction>,
    score: u32,
    speed: u32,
}

impl Snake {
    /// A one-cell snake at `pos` heading right.
    pub fn new(pos: Cell, speed: u32) -> Self {
        Snake::with_body(vec![pos], Right, speed)
    }

    /// Builds a snake from an explicit body, head first.
    pub fn with_body(body: Vec<Cell>, direction: Direction, speed: u32) -> Self {
        assert!(!body.is_empty(), "a snake needs at least one cell");
        Snake { body, direction, requested: None, score: 0, speed: speed.max(1) }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// The direction the next move will take.
    pub fn direction(&self) -> Direction {
        self.requested.unwrap_or(self.direction)
    }

    /// The direction of the last executed move.
    pub fn heading(&self) -> Direction {
        self.direction
    }

    /// Requests a turn for the next move. A reversal of the current heading
    /// is ignored; a later valid request replaces an earlier one.
    pub fn change_direction(&mut self, requested: Direction) {
        if !requested.is_opposite(self.direction) {
            self.requested = Some(requested);
        }
    }

    /// Advances one cell. Returns whether the new head landed on `food`, in
    /// which case the snake grows instead of dropping its tail.
    pub fn move_step(&mut self, food: Cell) -> bool {
        if let Some(dir) = self.requested.take() {
            self.direction = dir;
        }

        let (head_x, head_y) = self.head();
        let (dx, dy) = self.direction.delta();
        let new_head = (head_x + dx, head_y + dy);

        self.body.insert(0, new_head);

        if new_head == food {
            self.score += 1;
            if self.score % SPEED_UP_EVERY == 0 {
                self.speed += 1;
                log::info!("Score {} reached, speed is now {} ticks/s", self.score, self.speed);
            }
            true
        } else {
            self.body.pop();
            false
        }
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_snake(len: i32) -> Snake {
        let body = (0..len).map(|i| (10 - i, 10)).collect();
        Snake::with_body(body, Right, 10)
    }

    #[test]
    fn moving_without_food_keeps_length() {
        let mut snake = straight_snake(3);

        assert!(!snake.move_step((0, 0)));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.body(), &[(11, 10), (10, 10), (9, 10)]);
        assert_eq!(snake.score(), 0);
    }

    #[test]
    fn eating_grows_by_one_and_scores() {
        let mut snake = straight_snake(3);

        assert!(snake.move_step((11, 10)));
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), (11, 10));
        assert_eq!(snake.score(), 1);
        assert_eq!(snake.speed(), 10);
    }

    #[test]
    fn speed_goes_up_on_every_fifth_point() {
        let mut snake = Snake::new((0, 0), 10);

        for step in 1..=11 {
            let food = (step, 0);
            assert!(snake.move_step(food));
            let expected = 10 + (step as u32 / SPEED_UP_EVERY);
            assert_eq!(snake.speed(), expected, "after eating {} pieces", step);
        }
        assert_eq!(snake.score(), 11);
        assert_eq!(snake.speed(), 12);
    }

    #[test]
    fn reversal_is_ignored() {
        let mut snake = straight_snake(3);

        snake.change_direction(Left);
        assert_eq!(snake.direction(), Right);

        snake.move_step((0, 0));
        assert_eq!(snake.head(), (11, 10));
    }

    #[test]
    fn even_a_single_cell_snake_cannot_reverse() {
        let mut snake = Snake::new((5, 5), 10);
        snake.change_direction(Left);
        assert_eq!(snake.direction(), Right);
    }

    #[test]
    fn latest_valid_request_wins() {
        let mut snake = straight_snake(3);

        snake.change_direction(Up);
        snake.change_direction(Down);
        assert_eq!(snake.direction(), Down);

        snake.move_step((0, 0));
        assert_eq!(snake.head(), (10, 11));
        assert_eq!(snake.heading(), Down);
    }

    #[test]
    fn two_turns_in_one_frame_cannot_reverse() {
        let mut snake = straight_snake(3);

        // Up is accepted, Left is still the reverse of the last move.
        snake.change_direction(Up);
        snake.change_direction(Left);
        assert_eq!(snake.direction(), Up);
    }

    #[test]
    fn opposites() {
        assert!(Up.is_opposite(Down));
        assert!(Left.is_opposite(Right));
        assert!(!Up.is_opposite(Left));
        assert!(!Right.is_opposite(Right));
    }
}
