//! Console-oriented overview of the cleaned dataset: row and outcome counts
//! plus descriptive statistics per numeric column.

use std::fmt;

use caissa_model::{GameRecord, Winner};
use caissa_stats::descriptive::DescriptiveStats;

/// Descriptive statistics for one numeric column of the dataset.
#[derive(Debug, Clone)]
pub struct ColumnSummary {
    /// Column name as reported, e.g. `white_rating`.
    pub name: &'static str,
    /// The column's statistics.
    pub stats: DescriptiveStats,
}

/// Snapshot of the cleaned dataset, printed before the per-band analysis.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    /// Number of games.
    pub games: usize,
    /// Games won by white.
    pub white_wins: usize,
    /// Games won by black.
    pub black_wins: usize,
    /// Drawn games.
    pub draws: usize,
    /// Statistics for the rating and ply columns; empty when the dataset is.
    pub columns: Vec<ColumnSummary>,
}

impl DatasetSummary {
    /// Builds a summary over `games`.
    #[must_use]
    pub fn from_games(games: &[GameRecord]) -> Self {
        let mut white_wins = 0;
        let mut black_wins = 0;
        let mut draws = 0;
        for game in games {
            match game.winner {
                Winner::White => white_wins += 1,
                Winner::Black => black_wins += 1,
                Winner::Draw => draws += 1,
            }
        }

        let columns: [(&'static str, fn(&GameRecord) -> f64); 4] = [
            ("white_rating", |game| f64::from(game.white_rating)),
            ("black_rating", |game| f64::from(game.black_rating)),
            ("min_rating", |game| f64::from(game.min_rating())),
            ("opening_ply", |game| f64::from(game.opening_ply)),
        ];
        let columns = columns
            .into_iter()
            .filter_map(|(name, value)| {
                let stats = DescriptiveStats::new(games.iter().map(value))?;
                Some(ColumnSummary { name, stats })
            })
            .collect();

        Self {
            games: games.len(),
            white_wins,
            black_wins,
            draws,
            columns,
        }
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} games ({} white wins / {} black wins / {} draws)",
            self.games, self.white_wins, self.black_wins, self.draws
        )?;
        if self.columns.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:<14} {:>8} {:>8} {:>8} {:>8} {:>8}",
            "column", "min", "max", "mean", "median", "std dev"
        )?;
        for column in &self.columns {
            let stats = &column.stats;
            writeln!(
                f,
                "{:<14} {:>8.0} {:>8.0} {:>8.1} {:>8.1} {:>8.1}",
                column.name, stats.min, stats.max, stats.mean, stats.median, stats.std_dev
            )?;
        }
        Ok(())
    }
}
