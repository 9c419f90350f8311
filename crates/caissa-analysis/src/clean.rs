//! Row-level cleaning applied once, before any banding or aggregation.

use caissa_model::GameRecord;

/// Minimum number of recorded opening plies for a game to be analyzable.
/// Below this the "opening" is a single move and carries no signal.
pub const MIN_OPENING_PLY: u16 = 2;

/// Whether a game enters the analysis: rated, with an opening line of at
/// least [`MIN_OPENING_PLY`] plies.
#[must_use]
pub fn is_analyzable(game: &GameRecord) -> bool {
    game.rated && game.opening_ply >= MIN_OPENING_PLY
}

/// Drops games the analysis ignores, in place.
pub fn retain_analyzable(games: &mut Vec<GameRecord>) {
    games.retain(is_analyzable);
}

#[cfg(test)]
mod tests {
    use caissa_model::Winner;

    use super::*;

    fn game(rated: bool, opening_ply: u16) -> GameRecord {
        GameRecord {
            rated,
            white_rating: 1500,
            black_rating: 1500,
            winner: Winner::Draw,
            opening_name: "French Defense".to_owned(),
            opening_ply,
        }
    }

    #[test]
    fn unrated_games_are_dropped() {
        assert!(!is_analyzable(&game(false, 6)));
    }

    #[test]
    fn single_ply_openings_are_dropped() {
        assert!(!is_analyzable(&game(true, 1)));
        assert!(!is_analyzable(&game(true, 0)));
        assert!(is_analyzable(&game(true, 2)));
    }

    #[test]
    fn retain_keeps_only_analyzable_rows() {
        let mut games = vec![game(true, 4), game(false, 4), game(true, 1)];
        retain_analyzable(&mut games);
        assert_eq!(games.len(), 1);
        assert!(games.iter().all(is_analyzable));
    }
}
