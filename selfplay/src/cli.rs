use std::{path::PathBuf, time::Duration};

use alpha_gomoku::{config, Budget, SearchConfig};
use clap::{ArgEnum, Parser};
use log::LevelFilter;

/// Let the engine play games against itself
#[derive(Parser)]
pub struct Args {
    /// Number of games to play
    #[clap(short, long, default_value_t = 1)]
    pub games: u32,
    /// Playouts per move
    #[clap(short, long, default_value_t = config::PLAYOUTS)]
    pub playouts: u32,
    /// Think for this many milliseconds per move instead of counting playouts
    #[clap(short, long)]
    pub think_ms: Option<u64>,
    /// Exploration constant
    #[clap(short, long, default_value_t = config::EXPLORATION)]
    pub c_puct: f32,
    /// Plies per rollout before it is scored as a draw
    #[clap(short, long, default_value_t = config::ROLLOUT_DEPTH)]
    pub rollout_depth: usize,
    /// Search without tactical shortcuts
    #[clap(long)]
    pub no_shortcuts: bool,
    /// Seed for the rollout policies
    #[clap(short, long)]
    pub seed: Option<u64>,
    /// Print the board after every move
    #[clap(short, long)]
    pub verbose: bool,
    /// Log level
    #[clap(long, arg_enum, default_value = "info")]
    pub log_level: LogLevel,
    /// Log to this file instead of stderr
    #[clap(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Args {
    /// Search settings for one side. Each side gets its own seed.
    pub fn search_config(&self, side: u64) -> SearchConfig {
        let budget = match self.think_ms {
            Some(ms) => Budget::Time(Duration::from_millis(ms)),
            None => Budget::Playouts(self.playouts),
        };
        let mut config = SearchConfig::default()
            .with_budget(budget)
            .with_exploration(self.c_puct)
            .with_rollout_depth(self.rollout_depth);
        if self.no_shortcuts {
            config = config.with_shortcuts(Vec::new());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed.wrapping_add(side));
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses() {
        let args = Args::try_parse_from(["selfplay", "--log-level", "debug", "-p", "10"]).unwrap();
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
        assert_eq!(args.search_config(0).budget, Budget::Playouts(10));

        let args = Args::try_parse_from(["selfplay"]).unwrap();
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Info);
        assert!(Args::try_parse_from(["selfplay", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn sides_get_their_own_seed() {
        let args = Args::try_parse_from(["selfplay", "--seed", "5", "-t", "20"]).unwrap();
        assert_eq!(args.search_config(0).seed, Some(5));
        assert_eq!(args.search_config(1).seed, Some(6));
        assert_eq!(args.search_config(1).budget, Budget::Time(Duration::from_millis(20)));
    }
}
