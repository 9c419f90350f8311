use std::path::PathBuf;

use caissa_analysis::summary::DatasetSummary;
use clap::Args;

use crate::{chart, data, report};

use super::DEFAULT_GAMES_CSV;

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeArg {
    /// Path to the games CSV file
    #[arg(default_value = DEFAULT_GAMES_CSV)]
    pub csv: PathBuf,

    /// Directory the rendered charts are written to
    #[arg(long, default_value = "charts")]
    pub chart_dir: PathBuf,
}

impl Default for AnalyzeArg {
    fn default() -> Self {
        Self {
            csv: PathBuf::from(DEFAULT_GAMES_CSV),
            chart_dir: PathBuf::from("charts"),
        }
    }
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let games = data::load_cleaned_games(&arg.csv)?;
    print!("{}", DatasetSummary::from_games(&games));
    println!();

    let bands = data::band_breakdowns(&games);
    report::print_shares(&bands)?;
    chart::render_all(&arg.chart_dir, &bands)
}
