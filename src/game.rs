use std::time::Duration;

use anyhow::Result;
use log::info;
use rand::Rng;

use crate::display::Display;
use crate::render;
use crate::state::{Ending, GameState, Mode};

/// How long the game-over summary stays up.
pub const GAME_OVER_HOLD: Duration = Duration::from_millis(2000);

/// Runs frames until the session ends and returns how it ended.
///
/// A frame reads input, updates the menu, ticks the simulation when running,
/// draws and then waits out the rest of the tick at the snake's current speed.
pub fn run<R: Rng, D: Display>(state: &mut GameState<R>, display: &mut D) -> Result<Ending> {
    let ending = loop {
        let events = display.poll_input()?;
        state.handle_events(events);
        state.update_menu();

        if state.mode() == Mode::Running {
            state.tick();
        }

        if let Some(ending) = state.ending() {
            break ending;
        }

        render::draw_frame(state, display)?;
        display.present_frame()?;
        display.wait_until_next_tick(state.snake().speed());
    };

    info!("Session ended: {:?}, score {}", ending, state.snake().score());

    if ending == Ending::Crashed {
        render::draw_game_over(state, display)?;
        display.present_frame()?;
        display.hold(GAME_OVER_HOLD);
    }

    Ok(ending)
}

/// Combines the session result with the outcome of tearing the terminal down.
/// A session error is reported ahead of a teardown error.
pub fn finish<T>(session: Result<T>, teardown: Result<()>) -> Result<T> {
    let value = session?;
    teardown?;
    Ok(value)
}
