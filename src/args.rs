use std::path::PathBuf;

use clap::Parser;

use crate::model::structures::identifiers::WeeklyNumber;

#[derive(Parser, Clone)]
#[command(
    display_name = "Season Standings",
    long_about = "Scores weeklies and computes season standings from an exported season"
)]
pub struct Args {
    /// Season document exported by the bot, holding the included weeklies count,
    /// player statuses and the closed weeklies in the order they closed
    #[arg(short, long, env = "SEASON_FILE", help = "Path to the season JSON file")]
    pub season_file: PathBuf,

    /// Recomputes every record as if the season counted this many weeklies
    #[arg(
        short,
        long,
        allow_hyphen_values = true,
        help = "Overrides the season's included weeklies count"
    )]
    pub included_weeklies: Option<i64>,

    /// Prints the scored entries of one weekly instead of the season standings
    #[arg(short, long, help = "Weekly number (1-based) to print results for")]
    pub weekly: Option<WeeklyNumber>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
