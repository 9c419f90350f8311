//! Core domain types for chess game analysis: game records, outcomes, and
//! rating bands.

pub use self::{band::*, game::*};

pub mod band;
pub mod game;
