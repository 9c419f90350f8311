use std::{collections::BTreeMap, path::PathBuf};

use caissa_analysis::breakdown::{OpeningBreakdown, OpeningTally, Outcome};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;

use crate::{data, output::Output};

use super::DEFAULT_GAMES_CSV;

#[derive(Debug, Clone, Args)]
pub(crate) struct ExportArg {
    /// Path to the games CSV file
    #[arg(default_value = DEFAULT_GAMES_CSV)]
    pub csv: PathBuf,

    /// Output file path; written to stdout when omitted
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct AnalysisReport<'a> {
    generated_at: DateTime<Utc>,
    source: String,
    bands: Vec<BandReport<'a>>,
}

#[derive(Debug, Serialize)]
struct BandReport<'a> {
    name: &'static str,
    lower_rating: u16,
    upper_rating: u16,
    rating_gap_capped: bool,
    games: u32,
    /// Absent for a band with no games.
    shares: Option<OutcomeShares>,
    openings: &'a BTreeMap<String, OpeningTally>,
}

#[derive(Debug, Serialize)]
struct OutcomeShares {
    white_win: f64,
    black_win: f64,
    draw: f64,
}

impl OutcomeShares {
    fn from_breakdown(breakdown: &OpeningBreakdown) -> Option<Self> {
        Some(Self {
            white_win: breakdown.outcome_share(Outcome::WhiteWin).ok()?,
            black_win: breakdown.outcome_share(Outcome::BlackWin).ok()?,
            draw: breakdown.outcome_share(Outcome::Draw).ok()?,
        })
    }
}

pub(crate) fn run(arg: &ExportArg) -> anyhow::Result<()> {
    let games = data::load_cleaned_games(&arg.csv)?;
    let bands = data::band_breakdowns(&games);

    let report = AnalysisReport {
        generated_at: Utc::now(),
        source: arg.csv.display().to_string(),
        bands: bands
            .iter()
            .map(|(band, breakdown)| BandReport {
                name: band.name,
                lower_rating: band.lower,
                upper_rating: band.upper,
                rating_gap_capped: band.cap_rating_gap,
                games: breakdown.total_games(),
                shares: OutcomeShares::from_breakdown(breakdown),
                openings: &breakdown.map,
            })
            .collect(),
    };

    let mut output = Output::from_path(arg.output.clone())?;
    output.write_json(&report)?;
    log::info!("exported breakdowns to {}", output.target());
    Ok(())
}
