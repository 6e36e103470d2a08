//! Lifetime win counts and their textual form.

use std::str::FromStr;

use derive_more::{Display, Error};
use derive_getters::Getters;
use tally_tictactoe::Mark;

/// Wins per mark across all sessions.
///
/// Stored as `"<x_wins>,<o_wins>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Getters, derive_new::new)]
#[display("{x_wins},{o_wins}")]
pub struct Tally {
    x_wins: u32,
    o_wins: u32,
}

impl Tally {
    /// Returns the win count for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Counts one more win for `mark`.
    pub fn record(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins = self.x_wins.saturating_add(1),
            Mark::O => self.o_wins = self.o_wins.saturating_add(1),
        }
    }
}

/// A stored tally that is not two comma-separated counts.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Malformed tally {:?}: expected \"<x>,<o>\"", input)]
pub struct TallyParseError {
    /// The rejected text.
    pub input: String,
}

impl FromStr for Tally {
    type Err = TallyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TallyParseError {
            input: s.to_string(),
        };

        let (x, o) = s.trim().split_once(',').ok_or_else(malformed)?;
        let x_wins = x.trim().parse().map_err(|_| malformed())?;
        let o_wins = o.trim().parse().map_err(|_| malformed())?;
        Ok(Self { x_wins, o_wins })
    }
}
