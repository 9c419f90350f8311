use crate::game::GameRecord;

/// Largest rating difference allowed between opponents when a band enforces
/// its fairness rule. Lopsided pairings say little about the opening.
pub const MAX_RATING_GAP: u16 = 400;

/// A skill-level bucket over the lower of the two players' ratings.
///
/// A game belongs to a band when `lower < min_rating <= upper`. Bands may
/// additionally reject games whose rating gap exceeds [`MAX_RATING_GAP`];
/// of the standard bands, Beginner and Intermediate enforce the rule and
/// Advanced does not.
///
/// # Examples
///
/// ```
/// use caissa_model::RatingBand;
///
/// let band = RatingBand::INTERMEDIATE;
/// assert!(!band.contains(1400));
/// assert!(band.contains(1401));
/// assert!(band.contains(1800));
/// assert!(!band.contains(1801));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingBand {
    /// Short name used in console reports, e.g. "Beginners".
    pub name: &'static str,
    /// Legend label used on charts, e.g. "Beginner (0-1399)".
    pub legend: &'static str,
    /// Exclusive lower bound on `min_rating`.
    pub lower: u16,
    /// Inclusive upper bound on `min_rating`.
    pub upper: u16,
    /// Whether the [`MAX_RATING_GAP`] fairness rule applies.
    pub cap_rating_gap: bool,
}

impl RatingBand {
    pub const BEGINNER: Self = Self {
        name: "Beginners",
        legend: "Beginner (0-1399)",
        lower: 0,
        upper: 1400,
        cap_rating_gap: true,
    };

    pub const INTERMEDIATE: Self = Self {
        name: "Intermediate",
        legend: "Intermediate (1400-1799)",
        lower: 1400,
        upper: 1800,
        cap_rating_gap: true,
    };

    pub const ADVANCED: Self = Self {
        name: "Advanced",
        legend: "Advanced (1800+)",
        lower: 1800,
        upper: 4000,
        cap_rating_gap: false,
    };

    /// The three bands the analysis is run over, in ascending rating order.
    pub const STANDARD: [Self; 3] = [Self::BEGINNER, Self::INTERMEDIATE, Self::ADVANCED];

    /// Whether `min_rating` falls inside this band's interval.
    #[must_use]
    pub fn contains(&self, min_rating: u16) -> bool {
        self.lower < min_rating && min_rating <= self.upper
    }

    /// Whether `game` belongs to this band, including the rating-gap rule
    /// when the band enforces one.
    #[must_use]
    pub fn admits(&self, game: &GameRecord) -> bool {
        self.contains(game.min_rating())
            && (!self.cap_rating_gap || game.rating_gap() <= MAX_RATING_GAP)
    }

    /// The subset of `games` belonging to this band.
    #[must_use]
    pub fn filter<'a>(&self, games: &'a [GameRecord]) -> Vec<&'a GameRecord> {
        games.iter().filter(|game| self.admits(game)).collect()
    }
}
