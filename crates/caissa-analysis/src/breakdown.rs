//! Per-opening outcome aggregation for one rating band.
//!
//! A band's games are folded into one [`OpeningTally`] per distinct opening
//! name in a single linear pass. The resulting [`OpeningBreakdown`] is the
//! unit the report, the charts and the JSON export all consume.

use std::collections::BTreeMap;

use caissa_model::{GameRecord, Winner};
use caissa_stats::percent::percent_of;
use serde::Serialize;

/// Selector for one of the three counters of a tally when computing shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    WhiteWin,
    BlackWin,
    Draw,
}

impl Outcome {
    /// All outcomes, in tally order.
    pub const ALL: [Self; 3] = [Self::WhiteWin, Self::BlackWin, Self::Draw];
}

/// Error from share computation over a breakdown.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ShareError {
    /// The breakdown holds no games, so a share would divide by zero.
    #[display("cannot compute an outcome share over an empty breakdown")]
    EmptyBreakdown,
}

/// Outcome counts for a single opening.
///
/// Holds `white_wins + black_wins + draws == total` at all times when built
/// through [`OpeningTally::record`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OpeningTally {
    /// Games won by white with this opening.
    pub white_wins: u32,
    /// Games won by black with this opening.
    pub black_wins: u32,
    /// Drawn games with this opening.
    pub draws: u32,
    /// Total games played with this opening.
    pub total: u32,
}

impl OpeningTally {
    /// Counts one game toward this tally.
    pub fn record(&mut self, winner: Winner) {
        match winner {
            Winner::White => self.white_wins += 1,
            Winner::Black => self.black_wins += 1,
            Winner::Draw => self.draws += 1,
        }
        self.total += 1;
    }

    /// The counter selected by `outcome`.
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::WhiteWin => self.white_wins,
            Outcome::BlackWin => self.black_wins,
            Outcome::Draw => self.draws,
        }
    }
}

/// Outcome tallies for every opening appearing in a set of games, keyed by
/// opening name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OpeningBreakdown {
    /// Tally per opening name, ordered by name.
    pub map: BTreeMap<String, OpeningTally>,
}

impl OpeningBreakdown {
    /// Accumulates tallies over `games` in one linear pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use caissa_analysis::breakdown::OpeningBreakdown;
    /// use caissa_model::{GameRecord, Winner};
    ///
    /// let game = GameRecord {
    ///     rated: true,
    ///     white_rating: 1210,
    ///     black_rating: 1305,
    ///     winner: Winner::Black,
    ///     opening_name: "Caro-Kann Defense".to_owned(),
    ///     opening_ply: 3,
    /// };
    /// let breakdown = OpeningBreakdown::collect([&game]);
    /// assert_eq!(breakdown.map["Caro-Kann Defense"].black_wins, 1);
    /// assert_eq!(breakdown.total_games(), 1);
    /// ```
    #[must_use]
    pub fn collect<'a, I>(games: I) -> Self
    where
        I: IntoIterator<Item = &'a GameRecord>,
    {
        let mut map: BTreeMap<String, OpeningTally> = BTreeMap::new();
        for game in games {
            map.entry(game.opening_name.clone())
                .or_default()
                .record(game.winner);
        }
        Self { map }
    }

    /// Whether the breakdown holds no openings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of distinct openings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Total games across all openings.
    #[must_use]
    pub fn total_games(&self) -> u32 {
        self.map.values().map(|tally| tally.total).sum()
    }

    /// The percentage of all games in this breakdown that ended with
    /// `outcome`, rounded to two decimal places.
    ///
    /// The numerator sums the selected counter across openings and the
    /// denominator sums total games, so the three outcome shares of one
    /// breakdown add up to 100 within rounding.
    ///
    /// # Errors
    ///
    /// [`ShareError::EmptyBreakdown`] when the breakdown holds no games.
    pub fn outcome_share(&self, outcome: Outcome) -> Result<f64, ShareError> {
        let total = self.total_games();
        if total == 0 {
            return Err(ShareError::EmptyBreakdown);
        }
        let selected = self.map.values().map(|tally| tally.count(outcome)).sum::<u32>();
        Ok(percent_of(f64::from(selected), f64::from(total)))
    }

    /// One `(white_wins, black_wins)` point per opening, the coordinates the
    /// scatter charts and trend lines are built from.
    #[must_use]
    pub fn scatter_points(&self) -> Vec<(f64, f64)> {
        self.map
            .values()
            .map(|tally| (f64::from(tally.white_wins), f64::from(tally.black_wins)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(opening_name: &str, winner: Winner) -> GameRecord {
        GameRecord {
            rated: true,
            white_rating: 1500,
            black_rating: 1450,
            winner,
            opening_name: opening_name.to_owned(),
            opening_ply: 4,
        }
    }

    #[test]
    fn italian_game_example() {
        let games = vec![
            game("Italian Game", Winner::White),
            game("Italian Game", Winner::Black),
            game("Italian Game", Winner::White),
        ];
        let breakdown = OpeningBreakdown::collect(&games);
        let tally = &breakdown.map["Italian Game"];
        assert_eq!(
            (tally.white_wins, tally.black_wins, tally.draws, tally.total),
            (2, 1, 0, 3)
        );
        assert_eq!(breakdown.outcome_share(Outcome::WhiteWin).unwrap(), 66.67);
    }

    #[test]
    fn tallies_are_internally_consistent() {
        let games = vec![
            game("Sicilian Defense", Winner::White),
            game("Sicilian Defense", Winner::Draw),
            game("French Defense", Winner::Black),
            game("French Defense", Winner::Black),
            game("Scandinavian Defense", Winner::Draw),
        ];
        let breakdown = OpeningBreakdown::collect(&games);
        for tally in breakdown.map.values() {
            assert_eq!(tally.white_wins + tally.black_wins + tally.draws, tally.total);
        }
        assert_eq!(breakdown.total_games(), games.len() as u32);
        assert_eq!(breakdown.len(), 3);
    }

    #[test]
    fn shares_sum_to_one_hundred() {
        let games = vec![
            game("Sicilian Defense", Winner::White),
            game("Sicilian Defense", Winner::Black),
            game("King's Gambit", Winner::White),
            game("King's Gambit", Winner::Draw),
            game("English Opening", Winner::Black),
            game("English Opening", Winner::White),
            game("English Opening", Winner::Draw),
        ];
        let breakdown = OpeningBreakdown::collect(&games);
        let total: f64 = Outcome::ALL
            .iter()
            .map(|&outcome| breakdown.outcome_share(outcome).unwrap())
            .sum();
        assert!((total - 100.0).abs() < 0.05, "shares summed to {total}");
    }

    #[test]
    fn empty_breakdown_has_no_share() {
        let breakdown = OpeningBreakdown::default();
        assert!(breakdown.is_empty());
        assert!(matches!(
            breakdown.outcome_share(Outcome::Draw),
            Err(ShareError::EmptyBreakdown)
        ));
    }

    #[test]
    fn scatter_points_follow_name_order() {
        let games = vec![
            game("Zukertort Opening", Winner::White),
            game("Alekhine Defense", Winner::Black),
        ];
        let breakdown = OpeningBreakdown::collect(&games);
        // BTreeMap iterates by name: Alekhine first.
        assert_eq!(breakdown.scatter_points(), vec![(0.0, 1.0), (1.0, 0.0)]);
    }
}
