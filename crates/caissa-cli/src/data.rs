use std::{fs::File, io, path::Path};

use anyhow::Context;
use caissa_analysis::{breakdown::OpeningBreakdown, clean};
use caissa_model::{GameRecord, RatingBand};

fn read_games<R>(reader: R) -> anyhow::Result<Vec<GameRecord>>
where
    R: io::Read,
{
    let mut reader = csv::Reader::from_reader(reader);
    let mut games = Vec::new();
    for (row, result) in reader.deserialize().enumerate() {
        let game: GameRecord =
            result.with_context(|| format!("malformed game record at data row {}", row + 1))?;
        games.push(game);
    }
    Ok(games)
}

/// Reads every game record from a CSV file.
pub(crate) fn load_games<P>(path: P) -> anyhow::Result<Vec<GameRecord>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open games file: {}", path.display()))?;
    read_games(io::BufReader::new(file))
        .with_context(|| format!("failed to read games from {}", path.display()))
}

/// Loads the dataset and applies the row-level cleaning filter.
pub(crate) fn load_cleaned_games<P>(path: P) -> anyhow::Result<Vec<GameRecord>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut games = load_games(path)?;
    let loaded = games.len();
    clean::retain_analyzable(&mut games);
    log::info!(
        "kept {} of {loaded} games from {} after cleaning",
        games.len(),
        path.display()
    );
    Ok(games)
}

/// One opening breakdown per standard rating band, in ascending band order.
pub(crate) fn band_breakdowns(games: &[GameRecord]) -> Vec<(RatingBand, OpeningBreakdown)> {
    RatingBand::STANDARD
        .iter()
        .map(|band| (*band, OpeningBreakdown::collect(band.filter(games))))
        .collect()
}

#[cfg(test)]
mod tests {
    use caissa_model::Winner;

    use super::*;

    // Header row of the published dataset; most columns are irrelevant to
    // the analysis and must be skipped without complaint.
    const HEADER: &str = "id,rated,created_at,last_move_at,turns,victory_status,winner,\
                          increment_code,white_id,white_rating,black_id,black_rating,moves,\
                          opening_eco,opening_name,opening_ply";

    fn csv_of(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn parses_rows_and_ignores_surplus_columns() {
        let text = csv_of(&[
            "ab12,TRUE,1.5e+12,1.5e+12,13,outoftime,white,15+2,alice,1500,bob,1191,d4 d5,D10,Slav Defense,5",
        ]);
        let games = read_games(text.as_bytes()).unwrap();
        assert_eq!(games.len(), 1);
        let game = &games[0];
        assert!(game.rated);
        assert_eq!(game.white_rating, 1500);
        assert_eq!(game.black_rating, 1191);
        assert_eq!(game.winner, Winner::White);
        assert_eq!(game.opening_name, "Slav Defense");
        assert_eq!(game.opening_ply, 5);
    }

    #[test]
    fn odd_winner_values_count_as_draws() {
        let text = csv_of(&[
            "cd34,true,1.5e+12,1.5e+12,40,resign,draw,10+0,carol,1322,dan,1401,e4 e5,C20,King's Pawn Game,2",
            "ef56,True,1.5e+12,1.5e+12,61,outoftime,,5+5,erin,1400,frank,1500,d4 Nf6,A45,Indian Game,2",
        ]);
        let games = read_games(text.as_bytes()).unwrap();
        assert!(games.iter().all(|game| game.winner == Winner::Draw));
    }

    #[test]
    fn malformed_ratings_are_an_error() {
        let text = csv_of(&[
            "gh78,true,1.5e+12,1.5e+12,10,mate,black,15+15,gus,not-a-number,hal,1500,e4,B00,King's Pawn,3",
        ]);
        assert!(read_games(text.as_bytes()).is_err());
    }

    #[test]
    fn band_breakdowns_split_by_min_rating() {
        let text = csv_of(&[
            "a,true,0,0,10,mate,white,10+0,p1,1200,p2,1250,e4,B00,Italian Game,4",
            "b,true,0,0,10,mate,black,10+0,p3,1500,p4,1600,e4,B00,Italian Game,4",
            "c,true,0,0,10,mate,white,10+0,p5,1900,p6,2000,e4,B00,Sicilian Defense,6",
        ]);
        let games = read_games(text.as_bytes()).unwrap();
        let bands = band_breakdowns(&games);
        assert_eq!(bands.len(), 3);
        let totals: Vec<u32> = bands
            .iter()
            .map(|(_, breakdown)| breakdown.total_games())
            .collect();
        assert_eq!(totals, vec![1, 1, 1]);
    }

    #[test]
    fn gap_rule_drops_lopsided_games_from_lower_bands() {
        // 1000 vs 1700: beginner by min rating, but 700 points apart.
        let text = csv_of(&[
            "a,true,0,0,10,mate,white,10+0,p1,1000,p2,1700,e4,B00,Italian Game,4",
        ]);
        let games = read_games(text.as_bytes()).unwrap();
        let bands = band_breakdowns(&games);
        assert!(bands.iter().all(|(_, breakdown)| breakdown.is_empty()));
    }
}
