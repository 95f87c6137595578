use log::{debug, info};
use rand::Rng;

use crate::Grid;
use crate::display::{InputEvent, Key};
use crate::food::Food;
use crate::menu::{MenuChoice, MenuLayout, Pointer};
use crate::rules;
use crate::snake::{Direction, Snake};

/// Why a session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    /// Hit a wall or itself; the game-over summary is shown.
    Crashed,
    /// Quit signal; ends at once.
    Quit,
    /// "Exit" in the menu; ends at once.
    Exited,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Running,
    Paused,
    /// `paused` is the mode the menu was opened from and returns to.
    MenuOpen { paused: bool },
    Over(Ending),
}

pub struct GameState<R> {
    grid: Grid,
    snake: Snake,
    food: Food,
    mode: Mode,
    pointer: Pointer,
    menu: MenuLayout,
    rng: R,
}

impl<R: Rng> GameState<R> {
    /// A fresh session: one-cell snake in the centre, food anywhere.
    pub fn new(grid: Grid, speed: u32, mut rng: R) -> Self {
        let snake = Snake::new(grid.center(), speed);
        let food = Food::new(grid, &mut rng);
        GameState::with_parts(grid, snake, food, rng)
    }

    pub fn with_parts(grid: Grid, snake: Snake, food: Food, rng: R) -> Self {
        GameState {
            grid,
            snake,
            food,
            mode: Mode::Running,
            pointer: Pointer::default(),
            menu: MenuLayout::for_grid(grid),
            rng,
        }
    }
}

impl<R> GameState<R> {
    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn menu(&self) -> &MenuLayout {
        &self.menu
    }

    pub fn ending(&self) -> Option<Ending> {
        match self.mode {
            Mode::Over(ending) => Some(ending),
            _ => None,
        }
    }
}

impl<R: Rng> GameState<R> {
    /// Applies one frame's worth of input in order. Stops at the first event
    /// that ends the session.
    pub fn handle_events<I: IntoIterator<Item = InputEvent>>(&mut self, events: I) {
        for event in events {
            self.handle_event(event);
            if self.ending().is_some() {
                break;
            }
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        if self.ending().is_some() {
            return;
        }

        match event {
            InputEvent::Quit => self.set_mode(Mode::Over(Ending::Quit)),
            InputEvent::MousePosition(x, y) => self.pointer.position = Some((x, y)),
            InputEvent::MouseButtonState(pressed) => self.press(pressed),
            InputEvent::KeyDown(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: Key) {
        match (key, self.mode) {
            (Key::Escape, Mode::Running) => self.set_mode(Mode::MenuOpen { paused: false }),
            (Key::Escape, Mode::Paused) => self.set_mode(Mode::MenuOpen { paused: true }),
            (Key::Escape, Mode::MenuOpen { paused }) => self.close_menu(paused),
            (Key::P, Mode::Running) => self.set_mode(Mode::Paused),
            (Key::P, Mode::Paused) => self.set_mode(Mode::Running),
            (_, Mode::MenuOpen { .. }) | (_, Mode::Over(_)) => {}
            (Key::Up, _) => self.snake.change_direction(Direction::Up),
            (Key::Down, _) => self.snake.change_direction(Direction::Down),
            (Key::Left, _) => self.snake.change_direction(Direction::Left),
            (Key::Right, _) => self.snake.change_direction(Direction::Right),
        }
    }

    /// Only a fresh press over the open menu counts as a click; a button
    /// already held when the menu opens does not.
    fn press(&mut self, pressed: bool) {
        if pressed && !self.pointer.pressed && matches!(self.mode, Mode::MenuOpen { .. }) {
            self.pointer.clicked_at = self.pointer.position;
        }
        self.pointer.pressed = pressed;
    }

    /// Acts on this frame's menu click, if any. Runs once per frame and drops
    /// the click afterwards.
    pub fn update_menu(&mut self) {
        let click = self.pointer.clicked_at.take();
        let paused = match self.mode {
            Mode::MenuOpen { paused } => paused,
            _ => return,
        };

        match click.and_then(|pos| self.menu.choice_at(pos)) {
            Some(MenuChoice::Resume) => self.close_menu(paused),
            Some(MenuChoice::Exit) => self.set_mode(Mode::Over(Ending::Exited)),
            None => {}
        }
    }

    /// One simulation step: move, then check the new head. Does nothing unless
    /// the game is running.
    pub fn tick(&mut self) {
        if self.mode != Mode::Running {
            return;
        }

        let ate = self.snake.move_step(self.food.position());

        if let Some(hit) = rules::collision(&self.snake, self.grid) {
            info!("Snake crashed ({:?}) at {:?} with score {}", hit, self.snake.head(), self.snake.score());
            self.set_mode(Mode::Over(Ending::Crashed));
        } else if ate {
            self.food.relocate(self.grid, &mut self.rng);
            debug!("Food eaten, score {}, new food at {:?}", self.snake.score(), self.food.position());
        }
    }

    fn close_menu(&mut self, paused: bool) {
        self.set_mode(if paused { Mode::Paused } else { Mode::Running });
    }

    fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            debug!("Mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }
}
