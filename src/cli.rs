use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "golfscore",
    version,
    about = "Golf side game scoring: skins, wolf, umbriago, copenhagen, best ball and match play"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a round file, or every round file under a directory
    Score(ScoreCommand),
    /// Parse and validate round files without scoring them
    Check(CheckCommand),
    /// Handicap strokes received on a hole
    Strokes(StrokesCommand),
    /// Wolf order for each hole
    Rotation(RotationCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Global settings file used in place of ~/.config/golfscore/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Write the report to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct StrokesCommand {
    #[arg(long, allow_negative_numbers = true)]
    pub handicap: f64,
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=18))]
    pub stroke_index: u32,
    #[arg(long, value_enum, default_value = "18")]
    pub holes: RoundLength,
    /// Gross score to convert to net
    #[arg(long)]
    pub gross: Option<i32>,
}

#[derive(Args)]
pub struct RotationCommand {
    #[arg(long, value_parser = clap::value_parser!(u32).range(3..=5))]
    pub players: u32,
    #[arg(long, value_enum, default_value = "18")]
    pub holes: RoundLength,
    /// The wolf tees off last instead of first
    #[arg(long)]
    pub wolf_last: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RoundLength {
    #[value(name = "9")]
    Nine,
    #[value(name = "18")]
    Eighteen,
}

impl RoundLength {
    pub fn holes(self) -> u32 {
        match self {
            RoundLength::Nine => 9,
            RoundLength::Eighteen => 18,
        }
    }
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
