mod cli;

use clap::Parser;
use golfscore::error::{GolfError, Result};
use golfscore::scoring::handicap::{net_score, playing_handicap, strokes_on_hole};
use golfscore::scoring::wolf::{wolf_for_hole, WolfTeeOrder};
use golfscore::types::report::RoundReport;
use golfscore::{config, load, report, round};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const INVALID: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn is_invalid_round(err: &GolfError) -> bool {
    matches!(
        err,
        GolfError::InvalidRound(_)
            | GolfError::RoundParse(_)
            | GolfError::InvalidWolfSetup(_)
            | GolfError::ConfigParse(_)
    )
}

fn score_file(path: &Path, global_config: Option<&Path>) -> Result<RoundReport> {
    let round = load::read_round(path)?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let layers = config::load_layers(dir, global_config)?;
    let settings = config::settings_for_round(&layers, &round)?;
    round::score_round(&round, &settings)
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let files = load::find_round_files(&cmd.path)?;
            if files.is_empty() {
                eprintln!("warning: no round files found in {}", cmd.path.display());
                return Ok(exit_code::WARNINGS);
            }

            let mut reports = Vec::new();
            let mut invalid = 0;
            for file in &files {
                match score_file(file, cmd.config.as_deref()) {
                    Ok(report) => reports.push(report),
                    Err(err) if is_invalid_round(&err) => {
                        eprintln!("error: {}: {}", file.display(), err);
                        invalid += 1;
                    }
                    Err(err) => return Err(err),
                }
            }

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            if !reports.is_empty() {
                let rendered = report::render(&reports, output_format)?;
                match &cmd.out {
                    Some(out) => {
                        std::fs::write(out, rendered)?;
                        tracing::info!(path = %out.display(), "report written");
                    }
                    None => println!("{rendered}"),
                }
            }

            if invalid > 0 {
                Ok(exit_code::INVALID)
            } else if reports.iter().any(|report| !report.is_complete()) {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Check(cmd) => {
            let files = load::find_round_files(&cmd.path)?;
            let mut invalid = 0;
            for file in &files {
                let checked = load::read_round(file).and_then(|round| {
                    let dir = file.parent().unwrap_or_else(|| Path::new("."));
                    let layers = config::load_layers(dir, cmd.config.as_deref())?;
                    config::settings_for_round(&layers, &round)?;
                    round.validate()
                });
                match checked {
                    Ok(()) => println!("ok: {}", file.display()),
                    Err(err) if is_invalid_round(&err) => {
                        println!("invalid: {}: {}", file.display(), err);
                        invalid += 1;
                    }
                    Err(err) => return Err(err),
                }
            }

            if invalid > 0 {
                Ok(exit_code::INVALID)
            } else if files.is_empty() {
                eprintln!("warning: no round files found in {}", cmd.path.display());
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Strokes(cmd) => {
            let holes = cmd.holes.holes();
            let handicap = Some(cmd.handicap);
            let strokes = strokes_on_hole(handicap, cmd.stroke_index, holes);
            println!("playing handicap: {}", playing_handicap(handicap, 1.0));
            println!("strokes: {strokes}");
            if let Some(gross) = cmd.gross {
                println!("net: {}", net_score(gross, strokes));
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Rotation(cmd) => {
            let order = if cmd.wolf_last {
                WolfTeeOrder::Last
            } else {
                WolfTeeOrder::First
            };
            for hole in 1..=cmd.holes.holes() {
                let wolf = wolf_for_hole(hole, cmd.players as usize, order);
                println!("hole {hole}: player {}", wolf + 1);
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
