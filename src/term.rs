use std::{io::{Stdout, Write, stdout}, thread::sleep, time::{Duration, Instant}};

use anyhow::{bail, Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::event::{
    poll, read, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use log::debug;

use crate::Grid;
use crate::display::{Color, Display, InputEvent, Key, Rect, TextSize, CELL_COLUMNS};

const TITLE: &str = "Snake Game";

/// The playfield starts one cell in, inside the border.
const ORIGIN: (u16, u16) = (1, 1);

const GRID_CHAR: char = '·';

#[derive(Copy, Clone, PartialEq)]
struct Glyph {
    ch: char,
    fg: Color,
    bg: Color,
    bold: bool,
}

const BLANK: Glyph = Glyph { ch: ' ', fg: Color::White, bg: Color::Black, bold: false };

/// Terminal implementation of [`Display`]. Draw calls land in a back buffer
/// and `present_frame` writes out only the glyphs that changed.
pub struct TermManager {
    width: i32,
    height: i32,
    stdout: Stdout,
    back: Vec<Glyph>,
    front: Vec<Option<Glyph>>,
    last_frame: Instant,
}

impl TermManager {
    /// Fails if the terminal cannot fit a `width` x `height` playfield plus
    /// its border.
    pub fn new((width, height): (i32, i32)) -> Result<Self> {
        let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
        let (need_cols, need_rows) = (width + 2, height + 2);

        if (cols as i32) < need_cols || (rows as i32) < need_rows {
            bail!("Terminal is {}x{}, the game needs at least {}x{}", cols, rows, need_cols, need_rows);
        }

        let cells = (width * height) as usize;
        Ok(TermManager {
            width,
            height,
            stdout: stdout(),
            back: vec![BLANK; cells],
            front: vec![None; cells],
            last_frame: Instant::now(),
        })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(TITLE))
            .context("Failed to enter alternate screen")?;
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking).context("Failed to hide cursor")?;
        self.clear()?;
        self.draw_borders()
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            self.stdout,
            style::ResetColor,
            cursor::Show,
            cursor::EnableBlinking,
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .context("Failed to leave alternate screen")?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, style::ResetColor, terminal::Clear(ClearType::All)).context("Error clearing")?;
        self.front.iter_mut().for_each(|g| *g = None);
        Ok(())
    }

    pub fn draw_borders(&mut self) -> Result<()> {
        let (width, height) = (self.width as u16 + 2, self.height as u16 + 2);
        let end_x = width - 1;
        let end_y = height - 1;

        queue!(self.stdout, style::ResetColor)?;

        for x in 0..width {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            queue!(self.stdout, cursor::MoveTo(x, 0), style::Print(ch))?;
            queue!(self.stdout, cursor::MoveTo(x, end_y), style::Print(ch))?;
        }

        for y in 1..end_y {
            queue!(self.stdout, cursor::MoveTo(0, y), style::Print('|'))?;
            queue!(self.stdout, cursor::MoveTo(end_x, y), style::Print('|'))?;
        }

        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }
}

impl Display for TermManager {
    fn poll_input(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            let event = read()?;
            if let Event::Resize(cols, rows) = event {
                debug!("Terminal resized to {}x{}", cols, rows);
                self.clear()?;
                self.draw_borders()?;
            }
            events.extend(translate(event));
        }

        Ok(events)
    }

    fn draw_grid(&mut self, grid: Grid) -> Result<()> {
        for y in 0..grid.height {
            for x in 0..grid.width * CELL_COLUMNS {
                if let Some(i) = self.index(x, y) {
                    let ch = if x % CELL_COLUMNS == 0 {GRID_CHAR} else {' '};
                    self.back[i] = Glyph { ch, fg: Color::Grey, ..BLANK };
                }
            }
        }
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        for y in rect.y..rect.y + rect.h {
            for x in rect.x..rect.x + rect.w {
                if let Some(i) = self.index(x, y) {
                    self.back[i] = Glyph { bg: color, ..BLANK };
                }
            }
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, (x, y): (i32, i32), size: TextSize, color: Color) -> Result<()> {
        for (x_diff, ch) in text.chars().enumerate() {
            if let Some(i) = self.index(x + x_diff as i32, y) {
                let glyph = &mut self.back[i];
                glyph.ch = ch;
                glyph.fg = color;
                glyph.bold = size == TextSize::Large;
            }
        }
        Ok(())
    }

    fn present_frame(&mut self) -> Result<()> {
        for i in 0..self.back.len() {
            let glyph = self.back[i];
            if self.front[i] == Some(glyph) {
                continue;
            }

            let (x, y) = (i as i32 % self.width, i as i32 / self.width);
            let weight = if glyph.bold {style::Attribute::Bold} else {style::Attribute::NormalIntensity};
            queue!(
                self.stdout,
                cursor::MoveTo(ORIGIN.0 + x as u16, ORIGIN.1 + y as u16),
                style::SetForegroundColor(term_color(glyph.fg)),
                style::SetBackgroundColor(term_color(glyph.bg)),
                style::SetAttribute(weight),
                style::Print(glyph.ch)
            )?;
            self.front[i] = Some(glyph);
        }

        queue!(self.stdout, style::ResetColor)?;
        self.flush()
    }

    fn wait_until_next_tick(&mut self, ticks_per_second: u32) {
        let frame = Duration::from_secs(1) / ticks_per_second.max(1);
        let elapsed = self.last_frame.elapsed();

        if elapsed < frame {
            sleep(frame - elapsed);
        }
        self.last_frame = Instant::now();
    }

    fn hold(&mut self, duration: Duration) {
        sleep(duration);
    }
}

/// Maps a terminal event to game input. Mouse coordinates become relative to
/// the playfield.
pub fn translate(event: Event) -> Vec<InputEvent> {
    match event {
        Event::Key(ev) if is_ctrl_c(&ev) => vec![InputEvent::Quit],
        Event::Key(KeyEvent { code, modifiers: _ }) => {
            let key = match code {
                KeyCode::Up => Key::Up,
                KeyCode::Down => Key::Down,
                KeyCode::Left => Key::Left,
                KeyCode::Right => Key::Right,
                KeyCode::Esc => Key::Escape,
                KeyCode::Char('p') | KeyCode::Char('P') => Key::P,
                _ => return vec![],
            };
            vec![InputEvent::KeyDown(key)]
        }
        Event::Mouse(MouseEvent { kind, column, row, .. }) => {
            let pos = InputEvent::MousePosition(column as i32 - ORIGIN.0 as i32, row as i32 - ORIGIN.1 as i32);
            match kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => vec![pos],
                MouseEventKind::Down(MouseButton::Left) => vec![pos, InputEvent::MouseButtonState(true)],
                MouseEventKind::Up(MouseButton::Left) => vec![pos, InputEvent::MouseButtonState(false)],
                _ => vec![],
            }
        }
        _ => vec![],
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

fn term_color(color: Color) -> style::Color {
    match color {
        Color::Black => style::Color::Black,
        Color::White => style::Color::White,
        Color::Green => style::Color::Green,
        Color::Red => style::Color::Red,
        Color::Grey => style::Color::DarkGrey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent { code, modifiers })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE })
    }

    #[test]
    fn arrows_escape_and_p() {
        assert_eq!(translate(key(KeyCode::Up, KeyModifiers::NONE)), vec![InputEvent::KeyDown(Key::Up)]);
        assert_eq!(translate(key(KeyCode::Left, KeyModifiers::NONE)), vec![InputEvent::KeyDown(Key::Left)]);
        assert_eq!(translate(key(KeyCode::Esc, KeyModifiers::NONE)), vec![InputEvent::KeyDown(Key::Escape)]);
        assert_eq!(translate(key(KeyCode::Char('P'), KeyModifiers::SHIFT)), vec![InputEvent::KeyDown(Key::P)]);
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), vec![InputEvent::Quit]);
        assert!(translate(key(KeyCode::Char('c'), KeyModifiers::NONE)).is_empty());
        assert!(translate(key(KeyCode::Char('x'), KeyModifiers::NONE)).is_empty());
    }

    #[test]
    fn mouse_is_relative_to_the_playfield() {
        assert_eq!(translate(mouse(MouseEventKind::Moved, 19, 7)), vec![InputEvent::MousePosition(18, 6)]);
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Left), 1, 1)),
            vec![InputEvent::MousePosition(0, 0), InputEvent::MouseButtonState(true)]
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0)),
            vec![InputEvent::MousePosition(-1, -1), InputEvent::MouseButtonState(false)]
        );
        assert!(translate(mouse(MouseEventKind::Down(MouseButton::Right), 5, 5)).is_empty());
    }
}
