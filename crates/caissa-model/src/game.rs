use serde::{Deserialize, Deserializer, de};

/// Result of a single game from the winner's side of the board.
///
/// Parsed from the `winner` column of the dataset. Any value other than
/// `white` or `black` (including `draw` itself and malformed entries) is
/// treated as a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    White,
    Black,
    Draw,
}

impl<'de> Deserialize<'de> for Winner {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "white" => Winner::White,
            "black" => Winner::Black,
            _ => Winner::Draw,
        })
    }
}

/// One recorded chess game, reduced to the columns the analysis uses.
///
/// The published dataset carries more columns (game id, timestamps, player
/// ids, the move list, time control, ECO code); those are ignored at
/// deserialization time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameRecord {
    /// Whether the game was played for rating points.
    #[serde(deserialize_with = "relaxed_bool")]
    pub rated: bool,
    /// White's rating at the start of the game.
    pub white_rating: u16,
    /// Black's rating at the start of the game.
    pub black_rating: u16,
    /// Outcome of the game.
    pub winner: Winner,
    /// Name of the opening played, e.g. "Italian Game".
    pub opening_name: String,
    /// Number of plies the game followed the named opening line.
    pub opening_ply: u16,
}

impl GameRecord {
    /// The lower of the two players' ratings, used to bucket games by skill
    /// level.
    ///
    /// # Examples
    ///
    /// ```
    /// use caissa_model::{GameRecord, Winner};
    ///
    /// let game = GameRecord {
    ///     rated: true,
    ///     white_rating: 1650,
    ///     black_rating: 1490,
    ///     winner: Winner::White,
    ///     opening_name: "Sicilian Defense".to_owned(),
    ///     opening_ply: 5,
    /// };
    /// assert_eq!(game.min_rating(), 1490);
    /// ```
    #[must_use]
    pub fn min_rating(&self) -> u16 {
        self.white_rating.min(self.black_rating)
    }

    /// Absolute rating difference between the two players.
    #[must_use]
    pub fn rating_gap(&self) -> u16 {
        self.white_rating.abs_diff(self.black_rating)
    }
}

/// Accepts `TRUE`/`True`/`true` and the same spellings of `false`; the
/// dataset is not consistent about capitalization.
fn relaxed_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(de::Error::invalid_value(
            de::Unexpected::Str(&raw),
            &"true or false in any capitalization",
        ))
    }
}
