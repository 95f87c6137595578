use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use simplelog::WriteLogger;

use snake::config::Config;
use snake::display::screen_size;
use snake::game;
use snake::state::GameState;
use snake::term::TermManager;

fn main() -> Result<()> {
    let config = Config::parse();

    // The terminal is in raw mode while playing, so logs go to a file.
    let log_file = File::create(&config.log_file)
        .with_context(|| format!("Failed to create log file {}", config.log_file.display()))?;
    WriteLogger::init(config.log_level(), simplelog::Config::default(), log_file)
        .context("Failed to initialise logging")?;

    info!("Starting snake with {:?}", config);

    let grid = config.grid();
    let mut term = TermManager::new(screen_size(grid))?;
    if let Err(e) = term.setup() {
        term.restore().ok();
        return Err(e);
    }

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut state = GameState::new(grid, config.speed, rng);

    let result = game::run(&mut state, &mut term);
    let ending = game::finish(result, term.restore())?;
    info!("Exiting after {:?}", ending);
    Ok(())
}
