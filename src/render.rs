use anyhow::Result;

use crate::display::{cell_rect, screen_size, Color, Display, Rect, TextSize};
use crate::menu::{MenuChoice, EXIT_LABEL, RESUME_LABEL};
use crate::state::{GameState, Mode};

const SCORE_POS: (i32, i32) = (1, 0);

/// Draws one frame for the current mode. Does not present it.
pub fn draw_frame<R, D: Display>(state: &GameState<R>, display: &mut D) -> Result<()> {
    match state.mode() {
        Mode::MenuOpen { .. } => draw_menu(state, display),
        _ => draw_playfield(state, display),
    }
}

fn draw_playfield<R, D: Display>(state: &GameState<R>, display: &mut D) -> Result<()> {
    let snake = state.snake();

    display.draw_grid(state.grid())?;
    display.draw_rect(cell_rect(state.food().position()), Color::Red)?;

    for segment in snake.body() {
        display.draw_rect(cell_rect(*segment), Color::Green)?;
    }

    let head = cell_rect(snake.head());
    display.draw_text(&snake.head_char().to_string(), (head.x, head.y), TextSize::Normal, Color::Black)?;

    display.draw_text(&score_line(snake.score()), SCORE_POS, TextSize::Normal, Color::White)?;

    if state.mode() == Mode::Paused {
        let (sw, sh) = screen_size(state.grid());
        draw_centered(display, "Paused", sw, sh / 2, TextSize::Large, Color::White)?;
    }

    Ok(())
}

fn draw_menu<R, D: Display>(state: &GameState<R>, display: &mut D) -> Result<()> {
    let (sw, sh) = screen_size(state.grid());
    let layout = state.menu();
    let hovered = layout.hovered(state.pointer());

    display.draw_rect(Rect::new(0, 0, sw, sh), Color::Black)?;
    display.draw_rect(layout.panel, Color::White)?;

    let entries = [
        (MenuChoice::Resume, RESUME_LABEL, layout.resume),
        (MenuChoice::Exit, EXIT_LABEL, layout.exit),
    ];

    for &(choice, label, region) in entries.iter() {
        let size = if hovered == Some(choice) { TextSize::Large } else { TextSize::Normal };
        display.draw_text(label, (region.x, region.y), size, Color::Black)?;
    }

    Ok(())
}

/// The final summary: black screen, message and score.
pub fn draw_game_over<R, D: Display>(state: &GameState<R>, display: &mut D) -> Result<()> {
    let (sw, sh) = screen_size(state.grid());

    display.draw_rect(Rect::new(0, 0, sw, sh), Color::Black)?;
    draw_centered(display, "Game Over", sw, sh / 2 - 1, TextSize::Large, Color::White)?;
    draw_centered(display, &score_line(state.snake().score()), sw, sh / 2 + 1, TextSize::Large, Color::White)
}

pub fn score_line(score: u32) -> String {
    format!("Score: {}", score)
}

fn draw_centered<D: Display>(display: &mut D, text: &str, width: i32, y: i32, size: TextSize, color: Color) -> Result<()> {
    let x = (width - text.chars().count() as i32).max(0) / 2;
    display.draw_text(text, (x, y), size, color)
}
