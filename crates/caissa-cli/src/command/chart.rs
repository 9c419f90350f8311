use std::path::PathBuf;

use clap::Args;

use crate::{chart, data};

use super::DEFAULT_GAMES_CSV;

#[derive(Debug, Clone, Args)]
pub(crate) struct ChartArg {
    /// Path to the games CSV file
    #[arg(default_value = DEFAULT_GAMES_CSV)]
    pub csv: PathBuf,

    /// Directory the rendered charts are written to
    #[arg(long, default_value = "charts")]
    pub chart_dir: PathBuf,
}

pub(crate) fn run(arg: &ChartArg) -> anyhow::Result<()> {
    let games = data::load_cleaned_games(&arg.csv)?;
    let bands = data::band_breakdowns(&games);
    chart::render_all(&arg.chart_dir, &bands)
}
