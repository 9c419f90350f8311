use clap::{Parser, Subcommand};

use self::{analyze::AnalyzeArg, chart::ChartArg, export::ExportArg};

mod analyze;
mod chart;
mod export;

/// Default dataset location, matching where the games file is usually kept.
pub(crate) const DEFAULT_GAMES_CSV: &str = "games.csv";

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to run; a bare `caissa` performs the full analysis
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Full pipeline: dataset summary, win/draw report, and charts
    Analyze(AnalyzeArg),
    /// Render the opening-success charts only
    Chart(ChartArg),
    /// Write the per-band opening breakdowns as JSON
    Export(ExportArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Analyze(AnalyzeArg::default())) {
        Mode::Analyze(arg) => analyze::run(&arg),
        Mode::Chart(arg) => chart::run(&arg),
        Mode::Export(arg) => export::run(&arg),
    }
}
