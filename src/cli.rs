use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// CLI arguments for the ant simulation
#[derive(Parser, Debug)]
#[command(
    name = "langton_ant",
    version,
    about = "🐜 Langton's ant on a sparse two-color grid, driven from stdin"
)]
pub struct Args {
    /// Path to the map file
    pub map: PathBuf,

    /// Disable colored error output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log filter implied by `--verbose`
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
