use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::Grid;

/// Command-line options.
#[derive(Parser, Debug, Clone)]
#[command(name = "snake")]
#[command(version, about = "Snake in the terminal: arrow keys to steer, P to pause, Esc for the menu")]
pub struct Config {
    /// Grid width in cells
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(8..=60))]
    pub width: u16,

    /// Grid height in cells
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(8..=60))]
    pub height: u16,

    /// Starting speed in ticks per second
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=60))]
    pub speed: u32,

    /// Seed for food placement; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where log output goes
    #[arg(long, default_value = "snake.log")]
    pub log_file: PathBuf,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn grid(&self) -> Grid {
        Grid::new(self.width as i32, self.height as i32)
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_game() {
        let config = Config::try_parse_from(["snake"]).unwrap();
        assert_eq!(config.grid(), Grid::new(20, 20));
        assert_eq!(config.speed, 10);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_file, PathBuf::from("snake.log"));
        assert_eq!(config.log_level(), LevelFilter::Info);
    }

    #[test]
    fn custom_values() {
        let config = Config::try_parse_from([
            "snake", "--width", "30", "--height", "12", "--speed", "4", "--seed", "7", "-v",
        ])
        .unwrap();
        assert_eq!(config.grid(), Grid::new(30, 12));
        assert_eq!(config.speed, 4);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(Config::try_parse_from(["snake", "--width", "4"]).is_err());
        assert!(Config::try_parse_from(["snake", "--height", "61"]).is_err());
        assert!(Config::try_parse_from(["snake", "--speed", "0"]).is_err());
    }
}
