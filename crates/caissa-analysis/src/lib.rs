//! Opening-success analysis over recorded chess games.
//!
//! This crate turns a cleaned list of [`caissa_model::GameRecord`]s into the
//! numbers the CLI reports and charts:
//!
//! 1. **Clean** ([`clean`]): drop unrated games and games with fewer than
//!    two recorded opening plies
//! 2. **Aggregate** ([`breakdown`]): one pass over a rating band's games,
//!    counting white wins, black wins and draws per opening name
//! 3. **Shares** ([`breakdown::OpeningBreakdown::outcome_share`]): overall
//!    white/black/draw percentages across a band's openings
//! 4. **Summarize** ([`summary`]): per-column descriptive statistics of the
//!    cleaned dataset
//!
//! # Examples
//!
//! ```
//! use caissa_analysis::breakdown::{OpeningBreakdown, Outcome};
//! use caissa_model::{GameRecord, Winner};
//!
//! let games: Vec<GameRecord> = [Winner::White, Winner::Black, Winner::White]
//!     .into_iter()
//!     .map(|winner| GameRecord {
//!         rated: true,
//!         white_rating: 1500,
//!         black_rating: 1480,
//!         winner,
//!         opening_name: "Italian Game".to_owned(),
//!         opening_ply: 4,
//!     })
//!     .collect();
//!
//! let breakdown = OpeningBreakdown::collect(&games);
//! let tally = &breakdown.map["Italian Game"];
//! assert_eq!(
//!     (tally.white_wins, tally.black_wins, tally.draws, tally.total),
//!     (2, 1, 0, 3)
//! );
//! assert_eq!(breakdown.outcome_share(Outcome::WhiteWin).unwrap(), 66.67);
//! ```

pub mod breakdown;
pub mod clean;
pub mod summary;
