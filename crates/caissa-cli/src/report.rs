use anyhow::Context;
use caissa_analysis::breakdown::{OpeningBreakdown, Outcome};
use caissa_model::RatingBand;

/// Prints win and draw percentages per band: the win shares for all bands
/// first, then the draw shares, each band followed by a blank line.
pub(crate) fn print_shares(bands: &[(RatingBand, OpeningBreakdown)]) -> anyhow::Result<()> {
    for (band, breakdown) in bands {
        let white = share(band, breakdown, Outcome::WhiteWin)?;
        let black = share(band, breakdown, Outcome::BlackWin)?;
        println!("{} white win %: {white} %", band.name);
        println!("{} black win %: {black} %", band.name);
        println!();
    }
    for (band, breakdown) in bands {
        let draw = share(band, breakdown, Outcome::Draw)?;
        println!("{} draw %: {draw} %", band.name);
        println!();
    }
    Ok(())
}

fn share(
    band: &RatingBand,
    breakdown: &OpeningBreakdown,
    outcome: Outcome,
) -> anyhow::Result<f64> {
    breakdown
        .outcome_share(outcome)
        .with_context(|| format!("no games in the {} band", band.name))
}
